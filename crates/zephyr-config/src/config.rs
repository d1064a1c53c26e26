//! Configuration types and loading for the zephyr tracker.
//!
//! The main entry point is [`ZephyrConfig`], which represents the contents of
//! `.zephyr/config.yaml`. Values from the file are layered under `ZEPHYR_*`
//! environment variables (`ZEPHYR_DATA_FILE`, `ZEPHYR_AUTOSAVE`,
//! `ZEPHYR_COLOR`, `ZEPHYR_WELCOME`) when loaded with [`load_config`].
//! [`save_config`] writes the file back.

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Yaml};
use figment::{Figment, Provider};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the config file inside the `.zephyr/` directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "ZEPHYR_";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration could not be serialized.
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// A layered value (file or environment) had the wrong shape.
    #[error("invalid configuration: {0}")]
    Figment(#[from] figment::Error),
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// When to colour terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Colour when stdout is a terminal and the environment allows it.
    #[default]
    Auto,
    Always,
    Never,
}

/// Contents of `.zephyr/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ZephyrConfig {
    /// Task file path. Relative paths are resolved against the project root
    /// (the directory holding `.zephyr/`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<String>,

    /// Save after every command that changes the list. When off, changes are
    /// written only when the session ends normally; Ctrl+C discards them.
    pub autosave: bool,

    pub color: ColorMode,

    /// Print the greeting when an interactive session starts.
    pub welcome: bool,
}

impl Default for ZephyrConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            autosave: true,
            color: ColorMode::default(),
            welcome: true,
        }
    }
}

/// Load configuration from `config.yaml` inside the given `.zephyr/`
/// directory, with `ZEPHYR_*` environment variables taking precedence.
///
/// A missing or empty file yields the defaults.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
/// or [`ConfigError::Figment`] if a value has the wrong type.
pub fn load_config(zephyr_dir: &Path) -> Result<ZephyrConfig> {
    let env = Env::prefixed(ENV_PREFIX)
        .ignore(&["dir"])
        .map(|key| key.as_str().replace('_', "-").into());
    load_layered(zephyr_dir, env)
}

/// Loads the file layer, then merges `overrides` on top.
fn load_layered(zephyr_dir: &Path, overrides: impl Provider) -> Result<ZephyrConfig> {
    let mut figment = Figment::from(Serialized::defaults(ZephyrConfig::default()));

    let config_path = zephyr_dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        // An empty file is valid and yields default config.
        if !content.trim().is_empty() {
            figment = figment.merge(Yaml::string(&content));
        }
    }

    let config = figment.merge(overrides).extract()?;
    Ok(config)
}

/// Save configuration to `config.yaml` inside the given `.zephyr/` directory.
///
/// The directory is created if it does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] on I/O failure or
/// [`ConfigError::ParseError`] if serialization fails.
pub fn save_config(zephyr_dir: &Path, config: &ZephyrConfig) -> Result<()> {
    std::fs::create_dir_all(zephyr_dir)?;

    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(zephyr_dir.join(CONFIG_FILE_NAME), yaml)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
