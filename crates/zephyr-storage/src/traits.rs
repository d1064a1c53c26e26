//! The `TaskStore` trait -- the public API for task persistence.
//!
//! The session depends on this trait rather than on a concrete backend so
//! that tests and alternative front ends can substitute their own.

use zephyr_core::task::Task;

use crate::error::Result;

pub trait TaskStore {
    /// Reads every task. A store with nothing saved yet yields an empty list.
    fn load(&self) -> Result<Vec<Task>>;

    /// Replaces the stored tasks with `tasks`, in order.
    fn save(&mut self, tasks: &[Task]) -> Result<()>;
}

impl<S: TaskStore + ?Sized> TaskStore for Box<S> {
    fn load(&self) -> Result<Vec<Task>> {
        (**self).load()
    }

    fn save(&mut self, tasks: &[Task]) -> Result<()> {
        (**self).save(tasks)
    }
}
