//! The interactive session (no subcommand).

use anyhow::{Context, Result};

use crate::context::RuntimeContext;
use crate::output::{PromptedStdin, TerminalSink, set_unsaved_on_interrupt};

/// Chat with the user on stdin until `bye` or end of input.
///
/// Ctrl+C ends the session without the final save, so with autosave off
/// any changes made since the last save are lost.
pub fn run(ctx: &RuntimeContext) -> Result<()> {
    let mut session = ctx.open_session();
    set_unsaved_on_interrupt(!ctx.session_options().autosave);
    let mut input = PromptedStdin::new();
    let mut sink = TerminalSink::new(ctx.quiet);

    session
        .run(&mut input, &mut sink)
        .context("failed to read input")?;
    Ok(())
}
