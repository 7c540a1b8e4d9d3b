//! Dimension and aspect-ratio acceptance rules.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::media::item::WallpaperRecord;

/// Thresholds a wallpaper must meet to enter the accepted set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub min_width: u32,

    #[serde(default)]
    pub min_height: u32,

    /// Minimum width/height ratio, inclusive.
    #[serde(default)]
    pub min_aspect: f64,

    /// Maximum width/height ratio, inclusive.
    #[serde(default = "default_max_aspect")]
    pub max_aspect: f64,
}

fn default_max_aspect() -> f64 {
    999.0
}

// NaN passes through so validation can reject it.
fn clamp_negative(value: f64) -> f64 {
    if value < 0.0 {
        0.0
    } else {
        value
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_width: 0,
            min_height: 0,
            min_aspect: 0.0,
            max_aspect: default_max_aspect(),
        }
    }
}

impl FilterConfig {
    /// Build a validated filter, clamping negative aspect bounds to zero.
    pub fn new(min_width: u32, min_height: u32, min_aspect: f64, max_aspect: f64) -> Result<Self> {
        let filters = Self {
            min_width,
            min_height,
            min_aspect,
            max_aspect,
        }
        .clamped();
        filters.validate()?;
        Ok(filters)
    }

    /// Copy with negative aspect bounds raised to zero.
    pub fn clamped(self) -> Self {
        Self {
            min_aspect: clamp_negative(self.min_aspect),
            max_aspect: clamp_negative(self.max_aspect),
            ..self
        }
    }

    /// Check the bounds are usable; an inverted aspect range is fatal.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("min_aspect", self.min_aspect),
            ("max_aspect", self.max_aspect),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::ConfigValidation {
                    field: field.to_string(),
                    message: format!("must be a finite, non-negative number (got {})", value),
                });
            }
        }

        if self.max_aspect < self.min_aspect {
            return Err(Error::ConfigValidation {
                field: "max_aspect".to_string(),
                message: format!(
                    "max-aspect ({}) must be greater than or equal to min-aspect ({})",
                    self.max_aspect, self.min_aspect
                ),
            });
        }

        Ok(())
    }

    /// Whether a record passes every threshold.
    pub fn accept(&self, record: &WallpaperRecord) -> bool {
        if record.width() < self.min_width || record.height() < self.min_height {
            return false;
        }
        if record.height() == 0 {
            return false;
        }

        let ratio = record.aspect_ratio();
        ratio >= self.min_aspect && ratio <= self.max_aspect
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::item::ImageExtension;

    fn record(id: &str, width: u32, height: u32) -> WallpaperRecord {
        WallpaperRecord::new(
            id.to_string(),
            width,
            height,
            format!("https://w.wallhaven.cc/full/xx/wallhaven-{}.jpg", id),
            ImageExtension::Jpg,
        )
    }

    #[test]
    fn test_zero_height_never_accepted() {
        let permissive = FilterConfig::default();
        assert!(!permissive.accept(&record("a", 1920, 0)));
        assert!(!permissive.accept(&record("b", 0, 0)));
    }

    #[test]
    fn test_landscape_filter_scenario() {
        let filters = FilterConfig::new(1000, 0, 1.0, 3.0).unwrap();
        assert!(filters.accept(&record("A", 2000, 1000)));
        assert!(!filters.accept(&record("B", 500, 2000)));
    }

    #[test]
    fn test_aspect_bounds_inclusive() {
        let filters = FilterConfig::new(0, 0, 1.0, 2.0).unwrap();
        assert!(filters.accept(&record("low", 1000, 1000)));
        assert!(filters.accept(&record("high", 2000, 1000)));
        assert!(!filters.accept(&record("over", 2001, 1000)));
        assert!(!filters.accept(&record("under", 999, 1000)));
    }

    #[test]
    fn test_min_dimensions() {
        let filters = FilterConfig::new(1920, 1080, 0.0, 999.0).unwrap();
        assert!(filters.accept(&record("fhd", 1920, 1080)));
        assert!(!filters.accept(&record("narrow", 1919, 1080)));
        assert!(!filters.accept(&record("short", 1920, 1079)));
    }

    #[test]
    fn test_inverted_aspect_range_rejected() {
        let err = FilterConfig::new(0, 0, 2.0, 1.0).unwrap_err();
        assert!(matches!(err, Error::ConfigValidation { ref field, .. } if field == "max_aspect"));
    }

    #[test]
    fn test_negative_aspects_clamped() {
        let filters = FilterConfig::new(0, 0, -1.0, 2.0).unwrap();
        assert_eq!(filters.min_aspect, 0.0);
        assert!(FilterConfig::new(0, 0, 0.0, f64::NAN).is_err());
    }
}
