//! Subcommand handlers. Each exposes `run(&RuntimeContext, ...)`.

pub mod completion;
pub mod exec;
pub mod init;
pub mod repl;
