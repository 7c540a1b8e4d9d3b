//! Identifier-keyed accepted set.

use std::collections::BTreeMap;

use crate::api::RawWallpaper;
use crate::media::{normalize, FilterConfig, WallpaperRecord};

/// Deduplicated, filter-passing wallpapers gathered across a paginated sweep.
///
/// Keyed by identifier; a later record with the same identifier replaces the
/// earlier one.
#[derive(Debug, Default)]
pub struct AcceptedSet {
    filters: FilterConfig,
    by_id: BTreeMap<String, WallpaperRecord>,
    seen: u64,
}

impl AcceptedSet {
    pub fn new(filters: FilterConfig) -> Self {
        Self {
            filters,
            ..Default::default()
        }
    }

    /// Normalize and filter one page of raw items.
    pub fn ingest_page(&mut self, items: &[RawWallpaper]) {
        for item in items {
            if let Some(record) = normalize(item) {
                self.seen += 1;
                self.insert(record);
            }
        }
    }

    /// Add a normalized record if it passes the filters. Returns whether it was kept.
    pub fn insert(&mut self, record: WallpaperRecord) -> bool {
        if !self.filters.accept(&record) {
            return false;
        }
        if let Some(previous) = self.by_id.insert(record.id().to_string(), record) {
            tracing::debug!("Replaced duplicate wallpaper id {}", previous.id());
        }
        true
    }

    /// Well-formed items observed, before filtering.
    pub fn seen(&self) -> u64 {
        self.seen
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Materialize the set as records sorted by identifier ascending.
    pub fn into_sorted(self) -> Vec<WallpaperRecord> {
        self.by_id.into_values().collect()
    }
}
