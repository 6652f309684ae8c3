/// Ends every instruction on the wire and in the store.
pub const STATEMENT_TERMINATOR: u8 = 0x0D;
/// Marks the end of a stored program.
pub const PROGRAM_TERMINATOR: u8 = 0x00;
pub const COMMAND_BUFFER_SIZE: usize = 60;

/// ## One framed instruction
///
/// Holds the bytes of one instruction without its terminator.

#[derive(Clone, Copy)]
pub struct Instruction {
    bytes: [u8; COMMAND_BUFFER_SIZE],
    len: usize,
}

impl Instruction {
    pub fn new(text: &[u8]) -> Instruction {
        let len = text.len().min(COMMAND_BUFFER_SIZE);
        let mut bytes = [0; COMMAND_BUFFER_SIZE];
        bytes[..len].copy_from_slice(&text[..len]);
        Instruction { bytes, len }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn group(&self) -> Option<u8> {
        self.as_bytes().first().map(u8::to_ascii_uppercase)
    }

    pub fn operation(&self) -> Option<u8> {
        self.as_bytes().get(1).map(u8::to_ascii_uppercase)
    }

    /// Operand text after the two command letters.
    pub fn operands(&self) -> &[u8] {
        self.as_bytes().get(2..).unwrap_or(&[])
    }
}

impl std::fmt::Debug for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instruction({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl PartialEq for Instruction {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

/// Frames a byte stream into instructions. A line that outgrows the
/// buffer is dropped whole when its terminator arrives.
#[derive(Debug)]
pub struct Assembler {
    bytes: [u8; COMMAND_BUFFER_SIZE],
    len: usize,
    overflowed: bool,
}

impl Default for Assembler {
    fn default() -> Self {
        Assembler::new()
    }
}

impl Assembler {
    pub fn new() -> Assembler {
        Assembler {
            bytes: [0; COMMAND_BUFFER_SIZE],
            len: 0,
            overflowed: false,
        }
    }

    pub fn reset(&mut self) {
        self.len = 0;
        self.overflowed = false;
    }

    pub fn accept(&mut self, b: u8) -> Option<Instruction> {
        if b == STATEMENT_TERMINATOR {
            let complete = !self.overflowed;
            let instruction = Instruction::new(&self.bytes[..self.len]);
            self.reset();
            if complete {
                return Some(instruction);
            }
            tracing::debug!("instruction longer than buffer dropped");
            return None;
        }
        if self.len == COMMAND_BUFFER_SIZE - 1 {
            self.overflowed = true;
        } else if !self.overflowed {
            self.bytes[self.len] = b;
            self.len += 1;
        }
        None
    }
}
