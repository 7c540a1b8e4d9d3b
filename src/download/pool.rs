//! Concurrent download of the accepted set.

use std::path::Path;

use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;

use crate::api::WallhavenApi;
use crate::download::media::download_wallpaper;
use crate::download::state::{DownloadOutcome, DownloadStatus};
use crate::error::Result;
use crate::fs::ensure_dir;
use crate::media::WallpaperRecord;
use crate::output::create_item_bar;

/// Log aggregate progress every this many completions.
const PROGRESS_LOG_INTERVAL: u64 = 50;

/// Download every record into `images_dir` with at most `workers` transfers in flight.
///
/// Individual failures are logged and counted, never propagated; only failing
/// to create the images directory aborts the batch.
pub async fn download_all(
    api: &WallhavenApi,
    images_dir: &Path,
    records: &[WallpaperRecord],
    workers: usize,
    show_progress: bool,
) -> Result<DownloadOutcome> {
    ensure_dir(images_dir)?;

    let total = records.len() as u64;
    let workers = workers.max(1);
    let bar = if show_progress {
        create_item_bar(total, "Downloading")
    } else {
        ProgressBar::hidden()
    };

    tracing::info!(
        workers,
        "Syncing {} wallpaper(s) into {}",
        total,
        images_dir.display()
    );

    let mut outcome = DownloadOutcome::default();
    let mut results = stream::iter(records)
        .map(move |record| async move {
            let result = download_wallpaper(api, images_dir, record).await;
            (record, result)
        })
        .buffer_unordered(workers);

    while let Some((record, result)) = results.next().await {
        let status = result.unwrap_or_else(|e| {
            bar.suspend(|| {
                tracing::warn!(file = record.filename(), "Failed {}: {}", record.filename(), e)
            });
            DownloadStatus::Failed
        });
        outcome.record(status);
        bar.inc(1);

        let done = outcome.completed();
        if done % PROGRESS_LOG_INTERVAL == 0 || done == total {
            bar.suspend(|| {
                tracing::info!(
                    "Progress {}/{} (downloaded={} skipped={} failed={})",
                    done,
                    total,
                    outcome.downloaded,
                    outcome.skipped,
                    outcome.failed
                )
            });
        }
    }

    bar.finish_and_clear();

    if outcome.is_clean() {
        tracing::info!("Download complete with no failures");
    } else {
        tracing::warn!("Download completed with {} failure(s)", outcome.failed);
    }

    Ok(outcome)
}
