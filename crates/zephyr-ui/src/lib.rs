//! Terminal UI components for the zephyr task tracker.
//!
//! Provides colour styling for replies and task lines, plus terminal and
//! colour-support detection.

pub mod styles;
pub mod terminal;
