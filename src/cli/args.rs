//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, Order, Purity, Sorting};

/// Wallhaven wallpaper sync CLI.
#[derive(Parser, Debug)]
#[command(
    name = "wallhaven-sync",
    version,
    about = "Sync a filtered wallpaper set from Wallhaven",
    long_about = "Fetch every page of a Wallhaven search, keep the wallpapers that pass the \
                  dimension and aspect-ratio filters, write a manifest and run summary, and \
                  download the images.\n\n\
                  Re-running is idempotent: images already on disk are skipped."
)]
pub struct Args {
    /// Search query.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Purity flags (sfw/sketchy/nsfw), e.g. 100 for SFW only.
    #[arg(short, long)]
    pub purity: Option<Purity>,

    /// Result sorting.
    #[arg(long)]
    pub sorting: Option<Sorting>,

    /// Sort direction.
    #[arg(long)]
    pub order: Option<Order>,

    /// Destination root for the manifest, metadata and images.
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// Limit API pages, for testing (0 means all pages).
    #[arg(long)]
    pub max_pages: Option<u32>,

    /// Parallel download workers.
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Delay between API page requests, in seconds.
    #[arg(long)]
    pub sleep: Option<f64>,

    /// Only write the manifest and metadata, skip image downloads.
    #[arg(long)]
    pub metadata_only: bool,

    /// Minimum width to keep.
    #[arg(long)]
    pub min_width: Option<u32>,

    /// Minimum height to keep.
    #[arg(long)]
    pub min_height: Option<u32>,

    /// Minimum width/height aspect ratio.
    #[arg(long, allow_negative_numbers = true)]
    pub min_aspect: Option<f64>,

    /// Maximum width/height aspect ratio.
    #[arg(long, allow_negative_numbers = true)]
    pub max_aspect: Option<f64>,

    /// Delete local images that are not in the filtered manifest.
    #[arg(long)]
    pub prune_images: bool,

    /// Path to configuration file.
    #[arg(short, long, default_value = "wallhaven-sync.toml")]
    pub config: PathBuf,

    /// Show a download progress bar.
    #[arg(long)]
    pub progress: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(query) = self.query {
            config.search.query = query;
        }

        if let Some(purity) = self.purity {
            config.search.purity = purity;
        }

        if let Some(sorting) = self.sorting {
            config.search.sorting = sorting;
        }

        if let Some(order) = self.order {
            config.search.order = order;
        }

        if let Some(max_pages) = self.max_pages {
            config.search.page_limit = max_pages;
        }

        if let Some(sleep) = self.sleep {
            config.search.page_delay_seconds = sleep.max(0.0);
        }

        if let Some(dest) = self.dest {
            config.download.destination = dest;
        }

        if let Some(workers) = self.workers {
            config.download.workers = workers.max(1);
        }

        // Boolean flags (only override if set to non-default)
        if self.metadata_only {
            config.download.metadata_only = true;
        }

        if self.prune_images {
            config.download.prune = true;
        }

        if self.progress {
            config.download.show_progress = true;
        }

        if let Some(min_width) = self.min_width {
            config.filters.min_width = min_width;
        }

        if let Some(min_height) = self.min_height {
            config.filters.min_height = min_height;
        }

        if let Some(min_aspect) = self.min_aspect {
            config.filters.min_aspect = min_aspect;
        }

        if let Some(max_aspect) = self.max_aspect {
            config.filters.max_aspect = max_aspect;
        }

        config.filters = config.filters.clamped();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let args = Args::parse_from([
            "wallhaven-sync",
            "--query",
            "landscape",
            "--purity",
            "110",
            "--max-pages",
            "2",
            "--workers",
            "0",
            "--min-aspect",
            "-1.5",
            "--max-aspect",
            "3",
            "--prune-images",
        ]);
        let mut config = Config::default();
        args.merge_into_config(&mut config);

        assert_eq!(config.search.query, "landscape");
        assert_eq!(config.search.purity.as_str(), "110");
        assert_eq!(config.search.page_limit, 2);
        assert_eq!(config.download.workers, 1);
        assert_eq!(config.filters.min_aspect, 0.0);
        assert_eq!(config.filters.max_aspect, 3.0);
        assert!(config.download.prune);
        assert!(!config.download.metadata_only);
    }

    #[test]
    fn test_unset_flags_keep_config_values() {
        let args = Args::parse_from(["wallhaven-sync"]);
        let mut config = Config::default();
        config.search.query = "from file".to_string();
        config.download.metadata_only = true;
        args.merge_into_config(&mut config);

        assert_eq!(config.search.query, "from file");
        assert!(config.download.metadata_only);
    }

    #[test]
    fn test_invalid_purity_rejected_by_parser() {
        assert!(Args::try_parse_from(["wallhaven-sync", "--purity", "sfw"]).is_err());
    }
}
