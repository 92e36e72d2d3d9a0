//! Named-entry access over the document package archive.

use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::error::{Error, Result};

/// Well-known internal paths of a DOCX package.
pub mod part_names {
    /// Main document part. The only mandatory part.
    pub const DOCUMENT: &str = "word/document.xml";
    /// Named style definitions.
    pub const STYLES: &str = "word/styles.xml";
    /// Document-wide settings.
    pub const SETTINGS: &str = "word/settings.xml";
    /// List numbering definitions.
    pub const NUMBERING: &str = "word/numbering.xml";
    /// Footnote content.
    pub const FOOTNOTES: &str = "word/footnotes.xml";
    /// Relationship manifest for the document part.
    pub const RELATIONSHIPS: &str = "word/_rels/document.xml.rels";
}

/// A zip-backed document package with by-path part access.
///
/// Archive access is inherently sequential, so the parser drains the parts
/// it needs into strings up front and parses them afterwards (concurrently
/// where the parts are independent).
#[derive(Debug)]
pub struct DocxPackage {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl DocxPackage {
    /// Open a package over raw file bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let archive = ZipArchive::new(Cursor::new(data.to_vec()))
            .map_err(|e| Error::Archive(e.to_string()))?;
        Ok(Self { archive })
    }

    /// Read a mandatory part as UTF-8 text.
    pub fn read_required_part(&mut self, name: &str) -> Result<String> {
        match self.archive.by_name(name) {
            Ok(mut entry) => {
                let mut content = String::new();
                entry.read_to_string(&mut content)?;
                Ok(content)
            }
            Err(zip::result::ZipError::FileNotFound) => {
                Err(Error::MissingPart(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Read an optional part as UTF-8 text. Absence or unreadability both
    /// degrade to `None`; dependent model fields become unknown rather than
    /// the extraction failing.
    pub fn read_part(&mut self, name: &str) -> Option<String> {
        let mut entry = match self.archive.by_name(name) {
            Ok(entry) => entry,
            Err(zip::result::ZipError::FileNotFound) => return None,
            Err(e) => {
                log::warn!("skipping unreadable package part {name}: {e}");
                return None;
            }
        };
        let mut content = String::new();
        match entry.read_to_string(&mut content) {
            Ok(_) => Some(content),
            Err(e) => {
                log::warn!("skipping undecodable package part {name}: {e}");
                None
            }
        }
    }

    /// Whether a part exists in the archive, without reading it.
    pub fn has_part(&self, name: &str) -> bool {
        self.archive.index_for_name(name).is_some()
    }

    /// Header part names (`word/header1.xml`, ...), sorted by part number
    /// for stable order.
    pub fn header_part_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .archive
            .file_names()
            .filter(|n| header_part_number(n).is_some())
            .map(String::from)
            .collect();
        names.sort_by_key(|n| header_part_number(n));
        names
    }
}

/// Part number of a `word/headerN.xml` name, `None` for anything else.
fn header_part_number(name: &str) -> Option<u32> {
    name.strip_prefix("word/header")
        .and_then(|rest| rest.strip_suffix(".xml"))
        .and_then(|digits| digits.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn package_with(parts: &[(&str, &str)]) -> DocxPackage {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        let bytes = writer.finish().unwrap().into_inner();
        DocxPackage::from_bytes(&bytes).unwrap()
    }

    #[test]
    fn test_read_required_part_present() {
        let mut pkg = package_with(&[(part_names::DOCUMENT, "<doc/>")]);
        assert_eq!(
            pkg.read_required_part(part_names::DOCUMENT).unwrap(),
            "<doc/>"
        );
    }

    #[test]
    fn test_read_required_part_missing() {
        let mut pkg = package_with(&[(part_names::STYLES, "<styles/>")]);
        let err = pkg.read_required_part(part_names::DOCUMENT).unwrap_err();
        assert!(matches!(err, Error::MissingPart(name) if name == part_names::DOCUMENT));
    }

    #[test]
    fn test_read_optional_part_missing_degrades() {
        let mut pkg = package_with(&[(part_names::DOCUMENT, "<doc/>")]);
        assert!(pkg.read_part(part_names::SETTINGS).is_none());
    }

    #[test]
    fn test_header_part_names_sorted_and_filtered() {
        let pkg = package_with(&[
            (part_names::DOCUMENT, "<doc/>"),
            ("word/header10.xml", "<hdr/>"),
            ("word/header2.xml", "<hdr/>"),
            ("word/header1.xml", "<hdr/>"),
            ("word/header1.xml.rels", "<rels/>"),
            ("word/headerfoo.xml", "<hdr/>"),
        ]);
        assert_eq!(
            pkg.header_part_names(),
            vec![
                "word/header1.xml".to_string(),
                "word/header2.xml".to_string(),
                "word/header10.xml".to_string(),
            ]
        );
    }

    #[test]
    fn test_not_an_archive() {
        let err = DocxPackage::from_bytes(b"plainly not a zip").unwrap_err();
        assert!(matches!(err, Error::Archive(_)));
    }
}
