/*!
## Rust Language Module

This Rust module is the script front end. It turns lines of HullOS
script into the byte-coded instructions understood by the machine.

*/

pub type LineNumber = Option<u16>;

#[macro_use]
mod error;
mod compile;
mod cursor;
mod expr;
mod keyword;
mod line;
mod stack;

pub use compile::Compiled;
pub use compile::Compiler;
pub use cursor::Cursor;
pub use error::Error;
pub use error::ErrorCode;
pub use expr::{parse_condition, parse_value, Comparison, Operator, Reading, Resolve};
pub use expr::{is_identifier, MAX_NAME_LENGTH};
pub use keyword::Keyword;
pub use line::LineReader;
pub use line::LINE_BUFFER_SIZE;
pub use stack::{Construction, ConstructionKind, ConstructionStack};
