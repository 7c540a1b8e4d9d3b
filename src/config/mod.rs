//! Configuration module for wallhaven-sync.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Search mode definitions
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, DownloadConfig, HttpConfig, SearchConfig};
pub use modes::{Order, Purity, Sorting};
pub use validation::{page_delay, validate_config};
