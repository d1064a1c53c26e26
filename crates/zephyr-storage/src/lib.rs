//! Storage backends for the zephyr task tracker.
//!
//! The [`TaskStore`] trait is the narrow interface the session uses to load
//! tasks at startup and write them back. [`FileStore`] persists to a text
//! file in the line format from `zephyr_core::codec`; [`MemoryStore`] keeps
//! everything in memory for tests.

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

pub use error::{Result, StorageError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::TaskStore;
