//! Command interpreter for the zephyr task tracker.
//!
//! Raw input lines are turned into a [`Command`] by [`parse`]. A command is
//! validated against the shape of its arguments only, then executed against
//! a `TaskList`, producing the reply text for the user. [`Session`] wires
//! this together with a task store into a read/execute/reply loop.

pub mod command;
pub mod error;
pub mod parser;
pub mod session;

pub use command::{Command, CommandKind};
pub use error::{CommandError, Result, ValidationError};
pub use parser::parse;
pub use session::{LineSource, MessageSink, Response, Session, SessionOptions, Tone};
