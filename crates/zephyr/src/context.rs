//! Runtime context for command execution.
//!
//! The [`RuntimeContext`] holds what a command handler needs: the resolved
//! task file, the loaded config and the global flags.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use zephyr_command::{Session, SessionOptions};
use zephyr_config::{ColorMode, ZephyrConfig, find_zephyr_dir, load_config, resolve_data_file};
use zephyr_storage::FileStore;
use zephyr_ui::terminal::set_color_override;

use crate::cli::GlobalArgs;

/// Runtime context passed to every command handler.
///
/// Constructed once in `main` after CLI parsing, before command dispatch.
#[derive(Debug)]
pub struct RuntimeContext {
    pub config: ZephyrConfig,

    /// Task file the session reads and writes.
    pub data_file: PathBuf,

    /// Quiet mode: suppress non-essential output.
    pub quiet: bool,
}

impl RuntimeContext {
    /// Build a `RuntimeContext` from parsed global arguments.
    ///
    /// Also applies the colour choice: `--no-color` beats the config's
    /// `color` key, which beats terminal detection.
    pub fn from_global_args(global: &GlobalArgs) -> Result<Self> {
        let cwd = env::current_dir().context("failed to get current directory")?;
        let zephyr_dir = find_zephyr_dir(&cwd);

        let config = match &zephyr_dir {
            Some(dir) => load_config(dir)
                .with_context(|| format!("failed to load config from {}", dir.display()))?,
            None => ZephyrConfig::default(),
        };

        let data_file = resolve_data_file(global.file.as_deref(), zephyr_dir.as_deref(), &config);
        tracing::debug!(data_file = %data_file.display(), "resolved task file");

        let color = if global.no_color {
            Some(false)
        } else {
            match config.color {
                ColorMode::Auto => None,
                ColorMode::Always => Some(true),
                ColorMode::Never => Some(false),
            }
        };
        set_color_override(color);

        Ok(Self {
            config,
            data_file,
            quiet: global.quiet,
        })
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            autosave: self.config.autosave,
            welcome: self.config.welcome && !self.quiet,
        }
    }

    /// Opens a session on the resolved task file.
    pub fn open_session(&self) -> Session<FileStore> {
        Session::open(FileStore::new(&self.data_file), self.session_options())
    }
}
