//! # HullOS
//!
//! A script language and command interpreter for small mobile robots.
//!
//! Script typed at the robot is compiled, a line at a time, into short
//! text instructions. Instructions either run at once or are stored as
//! a program that survives power cycles and runs one statement per tick.
//!
//! The [`lang`] module is the script front end and [`mach`] is the
//! robot side. The robot's motors, lights and sensors are reached only
//! through the [`mach::Hardware`] trait, so the whole interpreter runs
//! on a desktop against a simulator or a recorder.
//!
//! ```
//! use hullos::mach::{Call, Recorder, Runtime};
//!
//! let mut robot = Runtime::new(Recorder::new());
//! robot.enter("move 50 background");
//! assert_eq!(robot.hardware().calls, vec![Call::FastMove(50, 50)]);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/protocol.rs"]
#[allow(non_snake_case)]
pub mod __Protocol;

pub mod lang;
pub mod mach;
