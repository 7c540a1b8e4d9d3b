//! Filesystem module.
//!
//! Provides:
//! - Destination layout (manifest, metadata, images)
//! - Identifier validation and staging filenames
//! - Pruning of images outside the accepted set

pub mod naming;
pub mod paths;
pub mod prune;

pub use naming::{staging_path, validate_identifier, STAGING_SUFFIX};
pub use paths::{ensure_dir, SyncPaths, IMAGES_DIR, MANIFEST_FILE, METADATA_FILE};
pub use prune::prune_images;
