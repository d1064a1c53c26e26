//! `zephyr init` -- create a `.zephyr` directory in the current directory.

use std::env;

use anyhow::{Context, Result, bail};
use zephyr_config::config::CONFIG_FILE_NAME;
use zephyr_config::{ZephyrConfig, ensure_zephyr_dir, save_config};

use crate::cli::InitArgs;
use crate::context::RuntimeContext;
use crate::output::print_success;

/// Execute the `zephyr init` command.
pub fn run(ctx: &RuntimeContext, args: &InitArgs) -> Result<()> {
    let cwd = env::current_dir().context("failed to get current directory")?;
    let zephyr_dir = ensure_zephyr_dir(&cwd)
        .with_context(|| format!("failed to create .zephyr in {}", cwd.display()))?;

    let config_path = zephyr_dir.join(CONFIG_FILE_NAME);
    if config_path.exists() && !args.force {
        bail!(
            "{} already exists\n\nUse --force to overwrite it with the defaults.",
            config_path.display()
        );
    }

    save_config(&zephyr_dir, &ZephyrConfig::default())
        .with_context(|| format!("failed to write {}", config_path.display()))?;

    if !ctx.quiet {
        print_success("Initialized zephyr in", &zephyr_dir.display().to_string());
    }
    Ok(())
}
