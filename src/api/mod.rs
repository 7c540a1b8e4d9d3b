//! Wallhaven API module.
//!
//! This module provides:
//! - HTTP client for the search endpoint and image downloads
//! - Retry policy with exponential backoff
//! - API response types

pub mod client;
pub mod retry;
pub mod types;

#[cfg(test)]
pub(crate) mod test_server;

pub use client::{parse_retry_after, SearchRequest, WallhavenApi};
pub use retry::{with_retry, RecordingSleeper, RetryAction, RetryPolicy, Sleeper, TokioSleeper};
pub use types::{RawWallpaper, SearchMeta, SearchResponse};
