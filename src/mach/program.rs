/// Run state of the stored program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgramState {
    Stopped = 0,
    Paused = 1,
    Active = 2,
    AwaitingMove = 3,
    AwaitingDelay = 4,
}

impl Default for ProgramState {
    fn default() -> Self {
        ProgramState::Stopped
    }
}

impl std::fmt::Display for ProgramState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", *self as u8)
    }
}

/// ## Execution context of the stored program
///
/// `pc` is the offset of the next statement to run. Labels are searched
/// from `base`, the offset the program was started at.

#[derive(Debug, Default)]
pub struct Program {
    pub pc: usize,
    pub base: usize,
    pub state: ProgramState,
    pub delay_end: u64,
}

impl Program {
    pub fn new() -> Program {
        Program::default()
    }

    pub fn start(&mut self, pos: usize) {
        self.pc = pos;
        self.base = pos;
        self.state = ProgramState::Active;
    }

    pub fn halt(&mut self) {
        self.state = ProgramState::Stopped;
    }

    /// Pausing is unconditional, even from `Stopped`.
    pub fn pause(&mut self) {
        self.state = ProgramState::Paused;
    }

    /// Returns false, leaving the state alone, unless paused.
    pub fn resume(&mut self) -> bool {
        if self.state == ProgramState::Paused {
            self.state = ProgramState::Active;
            true
        } else {
            false
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == ProgramState::Active
    }

    /// Waits for the motors, only while running.
    pub fn await_move(&mut self) {
        if self.is_active() {
            self.state = ProgramState::AwaitingMove;
        }
    }

    /// Waits until `deadline`, only while running.
    pub fn await_until(&mut self, deadline: u64) {
        if self.is_active() {
            self.delay_end = deadline;
            self.state = ProgramState::AwaitingDelay;
        }
    }

    /// Moves a waiting program back to `Active` once its wait is over.
    pub fn poll(&mut self, motors_moving: bool, now: u64) {
        match self.state {
            ProgramState::AwaitingMove if !motors_moving => self.state = ProgramState::Active,
            ProgramState::AwaitingDelay if now > self.delay_end => {
                self.state = ProgramState::Active
            }
            _ => {}
        }
    }
}
