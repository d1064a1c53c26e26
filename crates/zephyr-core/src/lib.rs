//! Core types for the zephyr task tracker.
//!
//! This crate holds the task model, the ordered in-memory task list and the
//! line codec used to persist tasks as plain text.

pub mod codec;
pub mod date;
pub mod task;
pub mod task_list;
