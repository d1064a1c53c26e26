//! Plain-text file backend.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use zephyr_core::codec;
use zephyr_core::task::Task;

use crate::error::{Result, StorageError};
use crate::traits::TaskStore;

/// Stores tasks in a single text file, one task per line.
///
/// Saving writes a sibling temporary file and renames it over the target,
/// so the task file is always either the old or the new content.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl TaskStore for FileStore {
    fn load(&self) -> Result<Vec<Task>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "task file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        let decoded =
            codec::read_tasks(BufReader::new(file)).map_err(|e| StorageError::io(&self.path, e))?;
        for line in &decoded.skipped {
            tracing::warn!(path = %self.path.display(), line, "dropped malformed task line");
        }
        tracing::debug!(
            path = %self.path.display(),
            loaded = decoded.tasks.len(),
            skipped = decoded.skipped.len(),
            "loaded tasks"
        );
        Ok(decoded.tasks)
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir).map_err(|e| StorageError::io(dir, e))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StorageError::io(dir, e))?;
        codec::write_tasks(&mut tmp, tasks).map_err(|e| StorageError::io(tmp.path(), e))?;
        tmp.persist(&self.path)?;

        tracing::debug!(path = %self.path.display(), saved = tasks.len(), "saved tasks");
        Ok(())
    }
}
