//! Manifest and run-summary persistence.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::manifest::RunMetadata;
use crate::media::WallpaperRecord;

/// Header row of the tab-separated manifest.
pub const MANIFEST_HEADER: &str = "id\twidth\theight\text\tfilename\turl";

/// Write the manifest, one row per record in the given order, replacing any previous file.
pub fn write_manifest(path: &Path, records: &[WallpaperRecord]) -> Result<()> {
    create_parent(path)?;

    let file = fs::File::create(path).map_err(|e| Error::persist(path, e))?;
    let mut out = BufWriter::new(file);

    let write_rows = |out: &mut BufWriter<fs::File>| -> std::io::Result<()> {
        writeln!(out, "{}", MANIFEST_HEADER)?;
        for record in records {
            writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}\t{}",
                record.id(),
                record.width(),
                record.height(),
                record.ext(),
                record.filename(),
                record.url()
            )?;
        }
        out.flush()
    };

    write_rows(&mut out).map_err(|e| Error::persist(path, e))
}

/// Write the run summary as pretty-printed JSON, replacing any previous file.
pub fn write_metadata(path: &Path, metadata: &RunMetadata) -> Result<()> {
    create_parent(path)?;

    let json = serde_json::to_string_pretty(metadata)?;
    fs::write(path, json).map_err(|e| Error::persist(path, e))
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::persist(parent, e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{FilterConfig, ImageExtension};

    fn record(id: &str, ext: ImageExtension) -> WallpaperRecord {
        WallpaperRecord::new(
            id.to_string(),
            2560,
            1440,
            format!("https://w.wallhaven.cc/full/xx/wallhaven-{}{}", id, ext.suffix()),
            ext,
        )
    }

    #[test]
    fn test_manifest_rows_follow_input_order() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nested/dir/manifest.tsv");
        let records = vec![
            record("a1", ImageExtension::Jpg),
            record("b2", ImageExtension::Png),
        ];

        write_manifest(&path, &records).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], MANIFEST_HEADER);
        assert_eq!(
            lines[1],
            "a1\t2560\t1440\t.jpg\twh-a1.jpg\thttps://w.wallhaven.cc/full/xx/wallhaven-a1.jpg"
        );
        assert!(lines[2].starts_with("b2\t2560\t1440\t.png\twh-b2.png\t"));
    }

    #[test]
    fn test_manifest_replaced_not_appended() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("manifest.tsv");

        write_manifest(&path, &[record("old", ImageExtension::Jpg)]).unwrap();
        write_manifest(&path, &[]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, format!("{}\n", MANIFEST_HEADER));
    }

    #[test]
    fn test_metadata_written_pretty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("search-meta.json");
        let meta = RunMetadata::now(
            "uma musume".into(),
            "100".into(),
            FilterConfig::default(),
            50,
            48,
            3,
            40,
        );

        write_metadata(&path, &meta).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  \"query\": \"uma musume\""));
        let parsed: RunMetadata = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, meta);
    }

    #[test]
    fn test_unwritable_destination_is_persist_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, b"x").unwrap();

        let err = write_manifest(&blocker.join("manifest.tsv"), &[]).unwrap_err();
        assert!(matches!(err, Error::Persist { .. }));
    }
}
