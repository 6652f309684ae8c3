/*!
## Rust Machine Module

This Rust module is the robot side of HullOS. It frames protocol
bytes into instructions, carries them out against the [`Hardware`],
and keeps a downloaded program in a persistent [`Store`] from which
it runs one statement per tick.

*/

mod config;
mod dispatch;
mod download;
mod hardware;
mod instruction;
mod program;
mod runtime;
mod store;
mod var;

pub use config::Config;
pub use dispatch::Operation;
pub use download::{Download, Downloader};
pub use hardware::{Call, Hardware, MoveError, Recorder};
pub use instruction::{Assembler, Instruction};
pub use instruction::{COMMAND_BUFFER_SIZE, PROGRAM_TERMINATOR, STATEMENT_TERMINATOR};
pub use program::{Program, ProgramState};
pub use runtime::{DeviceState, Diagnostics, Runtime};
pub use store::{find_label, next_statement, Store};
pub use var::{Var, MAX_VARIABLES};
