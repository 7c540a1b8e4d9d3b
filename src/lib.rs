//! Wallhaven Sync - keep a local directory in step with a Wallhaven search
//!
//! This library walks every page of a Wallhaven search, filters and
//! deduplicates the results, persists a manifest, and downloads the images.
//!
//! # Features
//!
//! - Sequential pagination bounded by the first page's reported page count
//! - Retry with exponential backoff and `Retry-After` support
//! - Dimension and aspect-ratio filtering, deduplication by identifier
//! - Tab-separated manifest plus a JSON run summary
//! - Concurrent, idempotent downloads with atomic renames
//! - Optional pruning of images outside the current set
//!
//! # Example
//!
//! ```no_run
//! use wallhaven_sync::{run_sync, Config, WallhavenApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::default();
//!     config.search.query = "landscape".to_string();
//!     config.filters.min_width = 1920;
//!
//!     let api = WallhavenApi::new(&config.http)?;
//!     let report = run_sync(&api, &config).await?;
//!     println!("{} wallpapers accepted", report.records.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod dedup;
pub mod download;
pub mod error;
pub mod fs;
pub mod manifest;
pub mod media;
pub mod output;
pub mod sync;

// Re-exports for convenience
pub use api::{RetryPolicy, WallhavenApi};
pub use config::{validate_config, Config};
pub use dedup::AcceptedSet;
pub use download::{collect_wallpapers, download_all, DownloadOutcome};
pub use error::{Error, Result};
pub use fs::prune_images;
pub use manifest::RunMetadata;
pub use media::{normalize, FilterConfig, WallpaperRecord};
pub use sync::{run_sync, SyncReport};
