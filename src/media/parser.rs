//! Normalization of raw API items into wallpaper records.

use crate::api::RawWallpaper;
use crate::fs::naming::validate_identifier;
use crate::media::item::{ImageExtension, WallpaperRecord};

/// Turn a raw API item into a record, or `None` if it is unusable.
///
/// Items without an identifier or URL, with an identifier that is not safe as a
/// filename component, or whose URL does not end in an allowed image extension
/// are dropped silently.
pub fn normalize(item: &RawWallpaper) -> Option<WallpaperRecord> {
    let id = item.id.as_deref().map(str::trim).unwrap_or_default();
    let url = item.path.as_deref().map(str::trim).unwrap_or_default();
    if id.is_empty() || url.is_empty() {
        return None;
    }

    if let Err(e) = validate_identifier(id) {
        tracing::debug!("Dropping item: {}", e);
        return None;
    }

    let ext = extract_extension_from_url(url).and_then(|ext| ImageExtension::from_extension(&ext))?;

    Some(WallpaperRecord::new(
        id.to_string(),
        clamp_dimension(item.dimension_x),
        clamp_dimension(item.dimension_y),
        url.to_string(),
        ext,
    ))
}

fn clamp_dimension(value: Option<u64>) -> u32 {
    value.map(|v| u32::try_from(v).unwrap_or(u32::MAX)).unwrap_or(0)
}

/// Lower-cased extension of the URL's last path segment, ignoring query and fragment.
fn extract_extension_from_url(raw: &str) -> Option<String> {
    let parsed = url::Url::parse(raw).ok()?;
    let filename = parsed.path_segments()?.next_back()?;
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_lowercase())
}
