//! Destination directory layout.

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Manifest filename under the destination root.
pub const MANIFEST_FILE: &str = "manifest.tsv";

/// Run-summary filename under the destination root.
pub const METADATA_FILE: &str = "search-meta.json";

/// Image directory name under the destination root.
pub const IMAGES_DIR: &str = "images";

/// Resolved output locations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPaths {
    pub root: PathBuf,
    pub manifest: PathBuf,
    pub metadata: PathBuf,
    pub images: PathBuf,
}

impl SyncPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            manifest: root.join(MANIFEST_FILE),
            metadata: root.join(METADATA_FILE),
            images: root.join(IMAGES_DIR),
            root,
        }
    }
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
