//! Media module for wallpaper record handling.
//!
//! This module provides:
//! - The typed wallpaper record
//! - Normalization of raw API items
//! - Dimension and aspect-ratio filtering

pub mod filter;
pub mod item;
pub mod parser;

pub use filter::FilterConfig;
pub use item::{ImageExtension, WallpaperRecord, FILENAME_PREFIX};
pub use parser::normalize;
