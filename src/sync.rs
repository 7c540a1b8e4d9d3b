//! Run orchestration: sweep, persist, download, prune.

use crate::api::WallhavenApi;
use crate::config::Config;
use crate::download::{collect_wallpapers, download_all, DownloadOutcome};
use crate::error::Result;
use crate::fs::{prune_images, SyncPaths};
use crate::manifest::{write_manifest, write_metadata, RunMetadata};
use crate::media::{FilterConfig, WallpaperRecord};

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub paths: SyncPaths,
    pub metadata: RunMetadata,
    pub records: Vec<WallpaperRecord>,
    /// `None` when downloads were skipped.
    pub outcome: Option<DownloadOutcome>,
    /// `None` when pruning was not requested.
    pub pruned: Option<usize>,
}

/// Run the full pipeline against the configured destination.
///
/// Filter bounds are checked before any request is made. The manifest and
/// metadata are written from the complete accepted set before the first
/// download starts; failing to write either aborts the run.
pub async fn run_sync(api: &WallhavenApi, config: &Config) -> Result<SyncReport> {
    let filters = FilterConfig::new(
        config.filters.min_width,
        config.filters.min_height,
        config.filters.min_aspect,
        config.filters.max_aspect,
    )?;
    let paths = SyncPaths::new(&config.download.destination);

    let collection = collect_wallpapers(api, &config.search, filters).await?;

    write_manifest(&paths.manifest, &collection.records)?;
    tracing::info!("Wrote manifest: {}", paths.manifest.display());
    write_metadata(&paths.metadata, &collection.metadata)?;
    tracing::info!("Wrote metadata: {}", paths.metadata.display());

    let outcome = if config.download.metadata_only {
        tracing::info!("Metadata only, skipping image downloads");
        None
    } else {
        Some(
            download_all(
                api,
                &paths.images,
                &collection.records,
                config.download.workers,
                config.download.show_progress,
            )
            .await?,
        )
    };

    let pruned = if config.download.prune {
        let removed = prune_images(&paths.images, &collection.records)?;
        tracing::info!("Pruned {} image(s) not matching current filter", removed);
        Some(removed)
    } else {
        None
    };

    Ok(SyncReport {
        paths,
        metadata: collection.metadata,
        records: collection.records,
        outcome,
        pruned,
    })
}
