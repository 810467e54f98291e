//! ZIP extraction for Old World save archives.
//!
//! A save is a zip container holding one XML document, normally named
//! `game.xml`. Older builds used other names, so selection falls back to the
//! first `.xml` entry in archive listing order.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::ZipArchive;

use crate::error::ScanError;

const MAX_COMPRESSED_SIZE: u64 = 50 * 1024 * 1024;
const MAX_UNCOMPRESSED_SIZE: u64 = 100 * 1024 * 1024;

/// Extract the embedded save document from a `.zip` archive as UTF-8 text.
///
/// Prefers the entry named exactly `game.xml`; otherwise takes the first entry
/// whose name ends in `.xml`. Every failure (unreadable container, no XML
/// entry, oversized file, invalid UTF-8) is terminal for this archive only.
pub fn extract_save_xml(path: &Path) -> Result<String, ScanError> {
    let file = File::open(path)?;
    let file_size = file.metadata()?.len();
    if file_size > MAX_COMPRESSED_SIZE {
        return Err(ScanError::FileTooLarge {
            path: path.to_path_buf(),
            size: file_size,
            max: MAX_COMPRESSED_SIZE,
        });
    }

    let mut archive = ZipArchive::new(file)?;

    let index = select_document(&mut archive)?;
    let entry = archive.by_index(index)?;
    if entry.size() > MAX_UNCOMPRESSED_SIZE {
        return Err(ScanError::FileTooLarge {
            path: path.join(entry.name()),
            size: entry.size(),
            max: MAX_UNCOMPRESSED_SIZE,
        });
    }

    tracing::debug!(
        archive = %path.display(),
        entry = entry.name(),
        size = entry.size(),
        "extracting save document"
    );

    let mut xml = String::new();
    entry.take(MAX_UNCOMPRESSED_SIZE).read_to_string(&mut xml)?;
    Ok(xml)
}

/// Pick the entry index of the save document: exact `game.xml` wins, then the
/// first `.xml` name in listing order.
fn select_document(archive: &mut ZipArchive<File>) -> Result<usize, ScanError> {
    let mut first_xml = None;
    for i in 0..archive.len() {
        let name = archive.by_index_raw(i)?.name().to_string();
        if name == "game.xml" {
            return Ok(i);
        }
        if first_xml.is_none() && name.ends_with(".xml") {
            first_xml = Some(i);
        }
    }
    first_xml.ok_or(ScanError::MissingDocument)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use zip::write::SimpleFileOptions;

    fn write_archive(dir: &Path, name: &str, entries: &[(&str, &str)]) -> PathBuf {
        let path = dir.join(name);
        let mut writer = zip::ZipWriter::new(File::create(&path).unwrap());
        for (entry_name, content) in entries {
            writer
                .start_file(*entry_name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
        path
    }

    #[test]
    fn prefers_game_xml_over_other_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_archive(
            dir.path(),
            "save.zip",
            &[("map.xml", "<Map/>"), ("game.xml", "<Root/>")],
        );

        assert_eq!(extract_save_xml(&path).unwrap(), "<Root/>");
    }

    #[test]
    fn falls_back_to_first_xml_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_archive(
            dir.path(),
            "save.zip",
            &[("preview.png", "png"), ("world.xml", "<Root/>")],
        );

        assert_eq!(extract_save_xml(&path).unwrap(), "<Root/>");
    }

    #[test]
    fn missing_document_when_no_xml_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_archive(dir.path(), "save.zip", &[("preview.png", "png")]);

        assert!(matches!(
            extract_save_xml(&path),
            Err(ScanError::MissingDocument)
        ));
    }

    #[test]
    fn corrupt_container_is_an_archive_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.zip");
        std::fs::write(&path, b"this is not a zip file").unwrap();

        assert!(matches!(
            extract_save_xml(&path),
            Err(ScanError::Archive(_))
        ));
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("save.zip");
        let mut writer = zip::ZipWriter::new(File::create(&path).unwrap());
        writer
            .start_file("game.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();
        writer.finish().unwrap();

        assert!(matches!(extract_save_xml(&path), Err(ScanError::Io(_))));
    }
}
