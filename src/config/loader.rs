//! Configuration structures and loading logic.

use crate::config::modes::{Order, Purity, Sorting};
use crate::error::{Error, Result};
use crate::media::FilterConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub filters: FilterConfig,

    #[serde(default)]
    pub download: DownloadConfig,

    #[serde(default)]
    pub http: HttpConfig,
}

/// What to ask the search API for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search query string.
    #[serde(default = "default_query")]
    pub query: String,

    /// Content-safety filter.
    #[serde(default)]
    pub purity: Purity,

    #[serde(default)]
    pub sorting: Sorting,

    #[serde(default)]
    pub order: Order,

    /// Maximum pages to fetch; 0 fetches every reported page.
    #[serde(default)]
    pub page_limit: u32,

    /// Seconds to wait between page requests.
    #[serde(default)]
    pub page_delay_seconds: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            query: default_query(),
            purity: Purity::default(),
            sorting: Sorting::default(),
            order: Order::default(),
            page_limit: 0,
            page_delay_seconds: 0.0,
        }
    }
}

/// Where and how to store results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Destination root for the manifest, metadata and images.
    #[serde(default = "default_destination")]
    pub destination: PathBuf,

    /// Parallel download workers.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Only write the manifest and metadata, skip image downloads.
    #[serde(default)]
    pub metadata_only: bool,

    /// Delete local images not in the accepted set.
    #[serde(default)]
    pub prune: bool,

    /// Show a progress bar while downloading.
    #[serde(default)]
    pub show_progress: bool,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            destination: default_destination(),
            workers: default_workers(),
            metadata_only: false,
            prune: false,
            show_progress: false,
        }
    }
}

/// Outbound request settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Search endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Attempts per request, including the first.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_initial_backoff_ms")]
    pub initial_backoff_ms: u64,

    #[serde(default = "default_max_backoff_ms")]
    pub max_backoff_ms: u64,

    /// Timeout for search API calls.
    #[serde(default = "default_api_timeout")]
    pub api_timeout_seconds: u64,

    /// Timeout for a single image download.
    #[serde(default = "default_download_timeout")]
    pub download_timeout_seconds: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            max_attempts: default_max_attempts(),
            initial_backoff_ms: default_initial_backoff_ms(),
            max_backoff_ms: default_max_backoff_ms(),
            api_timeout_seconds: default_api_timeout(),
            download_timeout_seconds: default_download_timeout(),
        }
    }
}

fn default_query() -> String {
    "uma musume".to_string()
}

fn default_destination() -> PathBuf {
    PathBuf::from("assets/wallpapers/wallhaven")
}

fn default_workers() -> usize {
    8
}

fn default_api_url() -> String {
    "https://wallhaven.cc/api/v1/search".to_string()
}

fn default_user_agent() -> String {
    format!("wallhaven-sync/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_attempts() -> u32 {
    8
}

fn default_initial_backoff_ms() -> u64 {
    1500
}

fn default_max_backoff_ms() -> u64 {
    30_000
}

fn default_api_timeout() -> u64 {
    60
}

fn default_download_timeout() -> u64 {
    120
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.search.query, "uma musume");
        assert_eq!(config.search.purity.as_str(), "100");
        assert_eq!(config.download.workers, 8);
        assert_eq!(config.filters.max_aspect, 999.0);
        assert_eq!(config.http.max_attempts, 8);
        assert!(config.http.user_agent.starts_with("wallhaven-sync/"));
    }

    #[test]
    fn test_load_partial_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("wallhaven-sync.toml");
        fs::write(
            &path,
            r#"
[search]
query = "landscape"
purity = "110"
sorting = "toplist"

[filters]
min_width = 1920
min_aspect = 1.5

[download]
workers = 2
prune = true
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.search.query, "landscape");
        assert_eq!(config.search.purity.as_str(), "110");
        assert_eq!(config.search.sorting, Sorting::Toplist);
        assert_eq!(config.search.order, Order::Desc);
        assert_eq!(config.filters.min_width, 1920);
        assert_eq!(config.filters.max_aspect, 999.0);
        assert_eq!(config.download.workers, 2);
        assert!(config.download.prune);
        assert_eq!(config.http.api_timeout_seconds, 60);
    }

    #[test]
    fn test_load_rejects_bad_purity() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "[search]\npurity = \"sfw\"\n").unwrap();
        assert!(matches!(Config::load(&path), Err(Error::TomlParse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/wallhaven-sync.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
