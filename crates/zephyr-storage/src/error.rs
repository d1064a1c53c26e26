//! Storage error types.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading or saving tasks.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading, writing or creating the task file failed.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        /// The file or directory being accessed.
        path: PathBuf,
        source: io::Error,
    },

    /// The temporary file could not replace the task file.
    #[error("failed to replace task file: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// The store's content could not be loaded, so writing it would replace
    /// tasks that were never read.
    #[error("refusing to overwrite tasks that failed to load")]
    NotLoaded,

    /// A simulated failure from an in-memory store.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Convenience alias used throughout the storage crate.
pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
