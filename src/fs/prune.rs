//! Removal of local images that fell out of the accepted set.

use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;
use crate::media::WallpaperRecord;

/// Delete every regular file directly under `dir` whose name is not an accepted filename.
///
/// Subdirectories are left alone. A missing directory is a no-op. Returns the
/// number of files removed.
pub fn prune_images(dir: &Path, accepted: &[WallpaperRecord]) -> Result<usize> {
    if !dir.exists() {
        return Ok(0);
    }

    let keep: HashSet<&str> = accepted.iter().map(|r| r.filename()).collect();
    let mut removed = 0;

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }

        let name = entry.file_name();
        if name.to_str().is_some_and(|n| keep.contains(n)) {
            continue;
        }

        match std::fs::remove_file(entry.path()) {
            Ok(()) => {
                tracing::debug!("Pruned {}", entry.path().display());
                removed += 1;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageExtension;

    fn record(id: &str) -> WallpaperRecord {
        WallpaperRecord::new(
            id.to_string(),
            1920,
            1080,
            format!("https://w.wallhaven.cc/full/xx/wallhaven-{}.jpg", id),
            ImageExtension::Jpg,
        )
    }

    #[test]
    fn test_prune_removes_only_unlisted_files() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["wh-a.jpg", "wh-b.jpg", "wh-c.jpg"] {
            std::fs::write(tmp.path().join(name), b"img").unwrap();
        }

        let removed = prune_images(tmp.path(), &[record("a"), record("c")]).unwrap();

        assert_eq!(removed, 1);
        assert!(tmp.path().join("wh-a.jpg").exists());
        assert!(!tmp.path().join("wh-b.jpg").exists());
        assert!(tmp.path().join("wh-c.jpg").exists());
    }

    #[test]
    fn test_prune_missing_directory_is_noop() {
        let tmp = tempfile::tempdir().unwrap();
        let removed = prune_images(&tmp.path().join("absent"), &[record("a")]).unwrap();
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_prune_does_not_recurse() {
        let tmp = tempfile::tempdir().unwrap();
        let sub = tmp.path().join("keepme");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("stray.jpg"), b"img").unwrap();
        std::fs::write(tmp.path().join("stale.jpg.part"), b"partial").unwrap();

        let removed = prune_images(tmp.path(), &[]).unwrap();

        assert_eq!(removed, 1);
        assert!(sub.join("stray.jpg").exists());
    }
}
