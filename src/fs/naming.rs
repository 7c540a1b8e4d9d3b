//! Filename validation and staging names.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Suffix of the in-progress sibling a download streams into.
pub const STAGING_SUFFIX: &str = ".part";

/// Validate an API identifier for use inside a local filename.
///
/// Returns an error if the identifier could escape the images directory or
/// produce an unusable name.
pub fn validate_identifier(id: &str) -> Result<()> {
    // Reject path traversal attempts
    if id.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            id
        )));
    }

    if id.contains('/') || id.contains('\\') {
        return Err(Error::InvalidFilename(format!(
            "Path separators not allowed in identifier: '{}'",
            id
        )));
    }

    if id.chars().any(|c| c.is_control()) {
        return Err(Error::InvalidFilename(format!(
            "Control characters not allowed in identifier: {:?}",
            id
        )));
    }

    if id.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Identifier cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(())
}

/// Sibling path a download is written to before being renamed into place.
pub fn staging_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(STAGING_SUFFIX);
    destination.with_file_name(name)
}
