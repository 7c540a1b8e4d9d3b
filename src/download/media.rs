//! Single wallpaper download.

use std::path::Path;

use crate::api::WallhavenApi;
use crate::download::state::DownloadStatus;
use crate::error::Result;
use crate::media::WallpaperRecord;

/// Whether a non-empty file already sits at `path`.
pub async fn is_present(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file() && m.len() > 0)
        .unwrap_or(false)
}

/// Fetch one record into `images_dir`, skipping it if already present.
///
/// Errors are those left after the client's retries; the staging file has
/// already been cleaned up when one is returned.
pub async fn download_wallpaper(
    api: &WallhavenApi,
    images_dir: &Path,
    record: &WallpaperRecord,
) -> Result<DownloadStatus> {
    let output_path = images_dir.join(record.filename());

    if is_present(&output_path).await {
        tracing::debug!("Skipping existing file: {}", output_path.display());
        return Ok(DownloadStatus::Skipped);
    }

    let bytes = api.download_file(record.url(), &output_path).await?;
    tracing::debug!("Downloaded {} ({} bytes)", record.filename(), bytes);

    Ok(DownloadStatus::Downloaded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_is_present_requires_non_empty_file() {
        let tmp = tempfile::tempdir().unwrap();
        let empty = tmp.path().join("empty.jpg");
        let full = tmp.path().join("full.jpg");
        std::fs::write(&empty, b"").unwrap();
        std::fs::write(&full, b"data").unwrap();

        assert!(!is_present(&empty).await);
        assert!(is_present(&full).await);
        assert!(!is_present(&tmp.path().join("missing.jpg")).await);
        assert!(!is_present(tmp.path()).await);
    }
}
