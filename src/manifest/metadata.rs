//! Run summary persisted next to the manifest.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::media::FilterConfig;

/// Facts about one sweep of the search API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetadata {
    pub query: String,
    pub purity: String,
    pub filters: FilterConfig,
    /// Result count the API claimed for the query.
    pub total_reported: u64,
    /// Well-formed items observed, before filtering.
    pub wallpapers_seen: u64,
    pub pages_fetched: u32,
    /// Size of the accepted set.
    pub wallpapers_unique: usize,
    pub generated_at_unix: i64,
}

impl RunMetadata {
    /// Stamp the summary with the current time.
    pub fn now(
        query: String,
        purity: String,
        filters: FilterConfig,
        total_reported: u64,
        wallpapers_seen: u64,
        pages_fetched: u32,
        wallpapers_unique: usize,
    ) -> Self {
        Self {
            query,
            purity,
            filters,
            total_reported,
            wallpapers_seen,
            pages_fetched,
            wallpapers_unique,
            generated_at_unix: Utc::now().timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_key_set() {
        let meta = RunMetadata::now(
            "uma musume".into(),
            "100".into(),
            FilterConfig::default(),
            281,
            280,
            12,
            270,
        );
        let value = serde_json::to_value(&meta).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<_> = obj.keys().cloned().collect();
        keys.sort();
        assert_eq!(
            keys,
            vec![
                "filters",
                "generated_at_unix",
                "pages_fetched",
                "purity",
                "query",
                "total_reported",
                "wallpapers_seen",
                "wallpapers_unique",
            ]
        );

        let filters = obj["filters"].as_object().unwrap();
        assert_eq!(filters["min_width"], 0);
        assert_eq!(filters["max_aspect"], 999.0);
        assert!(meta.generated_at_unix > 1_600_000_000);
    }
}
