//! API response type definitions.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One page of search results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: Vec<RawWallpaper>,
    #[serde(default)]
    pub meta: SearchMeta,
}

/// Pagination block of a search response.
///
/// The API is inconsistent about number encoding (`per_page` is sometimes a
/// string), so every field accepts either form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchMeta {
    #[serde(default, deserialize_with = "lenient_u64")]
    pub current_page: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub last_page: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub per_page: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total: Option<u64>,
}

impl SearchMeta {
    /// Reported last page; missing or zero means a single page.
    pub fn last_page(&self) -> u32 {
        self.last_page
            .filter(|&p| p > 0)
            .map(|p| u32::try_from(p).unwrap_or(u32::MAX))
            .unwrap_or(1)
    }

    pub fn total(&self) -> u64 {
        self.total.unwrap_or(0)
    }

    pub fn per_page(&self) -> u64 {
        self.per_page.filter(|&p| p > 0).unwrap_or(24)
    }
}

/// A wallpaper item exactly as the API returns it, before normalization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawWallpaper {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: Option<String>,
    /// Direct URL of the full-size image.
    #[serde(default, deserialize_with = "lenient_string")]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub dimension_x: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub dimension_y: Option<u64>,
}

fn lenient_u64<'de, D>(deserializer: D) -> std::result::Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
