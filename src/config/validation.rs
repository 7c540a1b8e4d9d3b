//! Configuration validation logic.

use std::time::Duration;

use crate::config::loader::{Config, HttpConfig};
use crate::error::{Error, Result};

/// Validate the entire configuration.
///
/// Runs before any network I/O; every failure here aborts the run.
pub fn validate_config(config: &Config) -> Result<()> {
    config.filters.validate()?;
    page_delay(config.search.page_delay_seconds)?;
    validate_http(&config.http)?;

    Ok(())
}

/// Convert the inter-page delay to a `Duration`, rejecting values it cannot hold.
pub fn page_delay(seconds: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(seconds).map_err(|_| Error::ConfigValidation {
        field: "page_delay_seconds".to_string(),
        message: format!(
            "must be a finite, non-negative number of seconds (got {})",
            seconds
        ),
    })
}

/// Validate outbound request settings.
pub fn validate_http(http: &HttpConfig) -> Result<()> {
    let api_url = url::Url::parse(&http.api_url).map_err(|e| Error::ConfigValidation {
        field: "api_url".to_string(),
        message: format!("'{}' is not a valid URL: {}", http.api_url, e),
    })?;

    if !matches!(api_url.scheme(), "http" | "https") {
        return Err(Error::ConfigValidation {
            field: "api_url".to_string(),
            message: format!("unsupported scheme '{}'", api_url.scheme()),
        });
    }

    if http.user_agent.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    if http.max_attempts == 0 {
        return Err(Error::ConfigValidation {
            field: "max_attempts".to_string(),
            message: "at least one attempt is required".to_string(),
        });
    }

    if http.max_backoff_ms < http.initial_backoff_ms {
        return Err(Error::ConfigValidation {
            field: "max_backoff_ms".to_string(),
            message: format!(
                "must be at least initial_backoff_ms ({})",
                http.initial_backoff_ms
            ),
        });
    }

    for (field, value) in [
        ("api_timeout_seconds", http.api_timeout_seconds),
        ("download_timeout_seconds", http.download_timeout_seconds),
    ] {
        if value == 0 {
            return Err(Error::ConfigValidation {
                field: field.to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_inverted_aspect_is_fatal() {
        let mut config = Config::default();
        config.filters.min_aspect = 2.0;
        config.filters.max_aspect = 1.0;
        assert!(matches!(
            validate_config(&config),
            Err(Error::ConfigValidation { .. })
        ));
    }

    #[test]
    fn test_invalid_api_url() {
        let mut config = Config::default();
        config.http.api_url = "wallhaven".to_string();
        assert!(validate_config(&config).is_err());

        config.http.api_url = "ftp://wallhaven.cc/api".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_attempts_and_timeouts() {
        let mut config = Config::default();
        config.http.max_attempts = 0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.http.download_timeout_seconds = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_page_delay_bounds() {
        assert!(page_delay(-1.0).is_err());
        assert!(page_delay(f64::INFINITY).is_err());
        assert!(page_delay(f64::NAN).is_err());
        assert_eq!(page_delay(0.5).unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn test_huge_page_delay_rejected() {
        assert!(matches!(
            page_delay(1e20),
            Err(Error::ConfigValidation { ref field, .. }) if field == "page_delay_seconds"
        ));

        let mut config = Config::default();
        config.search.page_delay_seconds = 1e20;
        assert!(validate_config(&config).is_err());
    }
}
