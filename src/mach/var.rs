use crate::error;
use crate::lang::{is_identifier, Error};

type Result<T> = std::result::Result<T, Error>;

pub const MAX_VARIABLES: usize = 20;

/// ## Variable memory
///
/// A fixed table of named integers. Names are created append-only and
/// only disappear when the whole table is cleared.

#[derive(Debug, Default)]
pub struct Var {
    vars: Vec<(Vec<u8>, i32)>,
}

impl Var {
    pub fn new() -> Var {
        Var {
            vars: Vec::with_capacity(MAX_VARIABLES),
        }
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn find(&self, name: &[u8]) -> Option<usize> {
        self.vars
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(name))
    }

    pub fn create(&mut self, name: &[u8]) -> Result<usize> {
        if !is_identifier(name) {
            return Err(error!(InvalidVariableName));
        }
        if self.vars.len() >= MAX_VARIABLES {
            return Err(error!(TooManyVariables));
        }
        self.vars.push((name.to_ascii_lowercase(), 0));
        Ok(self.vars.len() - 1)
    }

    pub fn fetch(&self, name: &[u8]) -> Option<i32> {
        self.find(name).map(|index| self.vars[index].1)
    }

    /// Stores a value, creating the variable when it is new.
    pub fn store(&mut self, name: &[u8], value: i32) -> Result<()> {
        let index = match self.find(name) {
            Some(index) => index,
            None => self.create(name)?,
        };
        self.vars[index].1 = value;
        Ok(())
    }
}
