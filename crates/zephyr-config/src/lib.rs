//! Configuration management for the zephyr task tracker.
//!
//! This crate handles loading and saving `.zephyr/config.yaml`, discovering
//! the `.zephyr/` directory, and deciding which task file a session uses.

pub mod config;
pub mod zephyr_dir;

pub use config::{ColorMode, ConfigError, Result, ZephyrConfig, load_config, save_config};
pub use zephyr_dir::{ensure_zephyr_dir, find_zephyr_dir, resolve_data_file};
