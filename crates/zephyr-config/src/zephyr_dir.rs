//! Discovery of the `.zephyr/` directory and the task file.
//!
//! A project is any directory containing `.zephyr/`. It is found by walking
//! up from the working directory, unless `ZEPHYR_DIR` points somewhere else.

use std::path::{Path, PathBuf};

use crate::config::{ConfigError, ZephyrConfig};

/// The name of the zephyr metadata directory.
const ZEPHYR_DIR_NAME: &str = ".zephyr";

/// The environment variable that overrides the zephyr directory.
const ZEPHYR_DIR_ENV: &str = "ZEPHYR_DIR";

/// Task file name inside `.zephyr/`.
pub const DATA_FILE_NAME: &str = "tasks.md";

/// Task file used when there is no project at all.
pub const FALLBACK_DATA_FILE: &str = "data/tasks.md";

/// Walk up the directory tree from `start` looking for a `.zephyr/`
/// directory.
///
/// The `ZEPHYR_DIR` environment variable is checked first and wins if it
/// names an existing directory.
pub fn find_zephyr_dir(start: &Path) -> Option<PathBuf> {
    if let Some(env_dir) = std::env::var_os(ZEPHYR_DIR_ENV) {
        let env_path = PathBuf::from(env_dir);
        if env_path.is_dir() {
            return Some(env_path);
        }
    }
    find_from(start)
}

fn find_from(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().ok()?;
    start
        .ancestors()
        .map(|dir| dir.join(ZEPHYR_DIR_NAME))
        .find(|candidate| candidate.is_dir())
}

/// Ensure a `.zephyr/` directory exists at (or under) `path`.
///
/// Returns the path to the `.zephyr/` directory.
///
/// # Errors
///
/// Returns [`ConfigError::ReadError`] if directory creation fails.
pub fn ensure_zephyr_dir(path: &Path) -> Result<PathBuf, ConfigError> {
    let zephyr_dir = if path.ends_with(ZEPHYR_DIR_NAME) {
        path.to_path_buf()
    } else {
        path.join(ZEPHYR_DIR_NAME)
    };

    std::fs::create_dir_all(&zephyr_dir)?;
    Ok(zephyr_dir)
}

/// Picks the task file for a session.
///
/// In order: an explicit path, the config's `data-file` (relative to the
/// project root), `tasks.md` inside the zephyr directory, and finally
/// [`FALLBACK_DATA_FILE`] relative to the working directory.
pub fn resolve_data_file(
    explicit: Option<&Path>,
    zephyr_dir: Option<&Path>,
    config: &ZephyrConfig,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    let Some(zephyr_dir) = zephyr_dir else {
        return PathBuf::from(FALLBACK_DATA_FILE);
    };
    match config.data_file.as_deref() {
        Some(file) => {
            let file = Path::new(file);
            let root = zephyr_dir.parent().unwrap_or(zephyr_dir);
            if file.is_absolute() {
                file.to_path_buf()
            } else {
                root.join(file)
            }
        }
        None => zephyr_dir.join(DATA_FILE_NAME),
    }
}
