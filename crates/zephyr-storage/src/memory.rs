//! In-memory backend, mainly for tests and embedding.

use zephyr_core::codec;
use zephyr_core::task::Task;

use crate::error::{Result, StorageError};
use crate::traits::TaskStore;

/// Keeps the encoded file content in memory.
///
/// Content goes through the same codec as [`crate::FileStore`], so
/// malformed seed lines are dropped on load exactly as they would be from
/// disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    content: String,
    saves: usize,
    fail_load: bool,
    fail_save: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose content is the given raw text.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Makes every `load` fail.
    pub fn failing_load(mut self) -> Self {
        self.fail_load = true;
        self
    }

    /// Makes every `save` fail.
    pub fn failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }

    /// The last saved (or seeded) text.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl TaskStore for MemoryStore {
    fn load(&self) -> Result<Vec<Task>> {
        if self.fail_load {
            return Err(StorageError::Unavailable("load disabled".into()));
        }
        Ok(codec::decode(self.content.lines()))
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        if self.fail_save {
            return Err(StorageError::Unavailable("save disabled".into()));
        }
        self.content = codec::encode(tasks);
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seeded_content_is_decoded() {
        let store = MemoryStore::with_content("- [X] T: a\nbroken\n- [ ] T: b\n");
        let tasks = store.load().unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(tasks[0].is_done());
    }

    #[test]
    fn save_encodes_and_counts() {
        let mut store = MemoryStore::new();
        store.save(&[Task::todo("a").unwrap()]).unwrap();
        assert_eq!(store.content(), "- [ ] T: a\n");
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn failures_are_reported() {
        let mut store = MemoryStore::new().failing_load().failing_save();
        assert!(store.load().is_err());
        assert!(store.save(&[]).is_err());
        assert_eq!(store.saves(), 0);
    }
}
