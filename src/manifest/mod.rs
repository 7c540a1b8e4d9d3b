//! Manifest module.
//!
//! Persists the accepted set as a tab-separated manifest and the run
//! summary as JSON.

pub mod metadata;
pub mod writer;

pub use metadata::RunMetadata;
pub use writer::{write_manifest, write_metadata, MANIFEST_HEADER};
