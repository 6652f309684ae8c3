use super::Error;
use crate::error;

type Result<T> = std::result::Result<T, Error>;

pub const CONSTRUCTION_STACK_DEPTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionKind {
    If,
    While,
    Forever,
}

/// A block the compiler has opened and not yet closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Construction {
    pub kind: ConstructionKind,
    pub label: u16,
    pub indent: usize,
}

impl Construction {
    pub fn is_loop(&self) -> bool {
        self.kind != ConstructionKind::If
    }
}

/// ## Stack enforced and size limited vector of open blocks

pub struct ConstructionStack {
    vec: Vec<Construction>,
}

impl std::fmt::Debug for ConstructionStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl Default for ConstructionStack {
    fn default() -> Self {
        ConstructionStack::new()
    }
}

impl ConstructionStack {
    pub fn new() -> ConstructionStack {
        ConstructionStack {
            vec: Vec::with_capacity(CONSTRUCTION_STACK_DEPTH),
        }
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn top(&self) -> Option<&Construction> {
        self.vec.last()
    }
    pub fn push(&mut self, construction: Construction) -> Result<()> {
        if self.vec.len() >= CONSTRUCTION_STACK_DEPTH {
            return Err(error!(ConstructionStackFull));
        }
        self.vec.push(construction);
        Ok(())
    }
    pub fn pop(&mut self) -> Option<Construction> {
        self.vec.pop()
    }
    /// Nearest enclosing `while` or `forever`, searching from the top.
    pub fn find_loop(&self) -> Option<&Construction> {
        self.vec.iter().rev().find(|c| c.is_loop())
    }
}
