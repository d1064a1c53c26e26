//! `zephyr exec` -- run one command line against the task file.

use anyhow::{Context, Result, anyhow, bail};
use zephyr_command::{Session, SessionOptions};
use zephyr_storage::FileStore;

use crate::cli::ExecArgs;
use crate::context::RuntimeContext;
use crate::output::print_plain_reply;

/// Execute the `zephyr exec` command.
///
/// The reply goes to stdout. A command error, a failed load or a failed
/// save is reported on stderr with exit code 1.
pub fn run(ctx: &RuntimeContext, args: &ExecArgs) -> Result<()> {
    let line = args.words.join(" ");
    let options = SessionOptions {
        autosave: true,
        welcome: false,
    };
    let mut session = Session::open(FileStore::new(&ctx.data_file), options);

    // Refuse to run on top of a file we could not read; saving would wipe it.
    if let Some(e) = session.load_error() {
        bail!(
            "failed to load tasks from {}: {e}",
            ctx.data_file.display()
        );
    }

    let response = session.respond(&line);
    if response.is_error() {
        bail!("{}", response.message);
    }
    print_plain_reply(&response.message);

    if let Some(e) = response.save_error {
        return Err(anyhow!(e))
            .with_context(|| format!("failed to save tasks to {}", ctx.data_file.display()));
    }
    Ok(())
}
