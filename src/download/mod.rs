//! Download module for the fetch-filter-download pipeline.
//!
//! This module provides:
//! - The paginated search sweep that builds the accepted set
//! - Single wallpaper downloading with skip-if-present
//! - The bounded concurrent download pool
//! - Outcome tracking

pub mod media;
pub mod pool;
pub mod search;
pub mod state;

pub use media::download_wallpaper;
pub use pool::download_all;
pub use search::{collect_wallpapers, fetch_all, Collection, PageSweep};
pub use state::{DownloadOutcome, DownloadStatus};
