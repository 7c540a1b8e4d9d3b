//! Error types for the wallhaven-sync application.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// HTTP statuses worth another attempt: rate limiting and transient server failures.
const RETRYABLE_STATUSES: [u16; 5] = [429, 500, 502, 503, 504];

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("HTTP {status} from {url}")]
    HttpStatus {
        status: u16,
        url: String,
        retry_after: Option<Duration>,
    },

    #[error("Giving up on {target} after {attempts} attempt(s): {source}")]
    RetriesExhausted {
        target: String,
        attempts: u32,
        #[source]
        source: Box<Error>,
    },

    // Persistence errors
    #[error("Failed to write {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // File system errors
    #[error("Invalid filename: {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether the failure is transient and the request may be attempted again.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::HttpStatus { status, .. } => RETRYABLE_STATUSES.contains(status),
            // DNS failures surface as connect errors; a connection dropped before
            // the response is a request error, a truncated body a body or decode error
            Error::Http(e) => {
                e.is_connect() || e.is_timeout() || e.is_request() || e.is_body() || e.is_decode()
            }
            _ => false,
        }
    }

    /// Server-directed delay before the next attempt, if one was supplied.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Error::HttpStatus { retry_after, .. } => *retry_after,
            _ => None,
        }
    }

    /// Wrap an IO failure with the path that was being written.
    pub fn persist(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Persist {
            path: path.into(),
            source,
        }
    }
}

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const API_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const PERSIST_ERROR: i32 = 4;
    pub const UNEXPECTED_ERROR: i32 = 5;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16) -> Error {
        Error::HttpStatus {
            status: code,
            url: "https://wallhaven.cc/api/v1/search".to_string(),
            retry_after: None,
        }
    }

    #[test]
    fn test_retryable_statuses() {
        for code in [429, 500, 502, 503, 504] {
            assert!(status(code).is_retryable(), "HTTP {} should retry", code);
        }
    }

    #[test]
    fn test_permanent_statuses() {
        for code in [400, 401, 403, 404, 410] {
            assert!(!status(code).is_retryable(), "HTTP {} should not retry", code);
        }
    }

    #[test]
    fn test_non_network_errors_do_not_retry() {
        assert!(!Error::Api("bad payload".into()).is_retryable());
        assert!(!Error::Config("nope".into()).is_retryable());
        let exhausted = Error::RetriesExhausted {
            target: "x".into(),
            attempts: 8,
            source: Box::new(status(503)),
        };
        assert!(!exhausted.is_retryable());
    }

    #[test]
    fn test_retry_after_only_on_status() {
        let err = Error::HttpStatus {
            status: 429,
            url: "u".into(),
            retry_after: Some(Duration::from_secs(7)),
        };
        assert_eq!(err.retry_after(), Some(Duration::from_secs(7)));
        assert_eq!(Error::Api("x".into()).retry_after(), None);
    }
}
