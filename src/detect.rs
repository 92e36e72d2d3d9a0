//! Package format detection.
//!
//! A DOCX document is an OPC package: a zip archive of well-known XML parts.
//! Detection only confirms the zip container signature; whether the archive
//! actually carries the mandatory `word/document.xml` part is the parser's
//! job.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Zip local-file-header magic bytes: "PK\x03\x04".
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Magic bytes of an empty zip archive ("PK\x05\x06"). An empty archive is a
/// structurally valid container; the missing document part is reported later
/// with a more useful message than "unknown format".
const ZIP_EMPTY_MAGIC: &[u8] = b"PK\x05\x06";

/// Validate the package container signature from a file path.
///
/// # Returns
/// * `Ok(())` if the file starts with a zip signature
/// * `Err(Error::UnknownFormat)` otherwise
pub fn detect_package_from_path<P: AsRef<Path>>(path: P) -> Result<()> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 4];
    reader.read_exact(&mut header)?;
    detect_package_from_bytes(&header)
}

/// Validate the package container signature from bytes.
///
/// # Arguments
/// * `data` - Byte slice containing at least the first 4 bytes of the file
pub fn detect_package_from_bytes(data: &[u8]) -> Result<()> {
    if data.len() < ZIP_MAGIC.len() {
        return Err(Error::UnknownFormat);
    }
    if data.starts_with(ZIP_MAGIC) || data.starts_with(ZIP_EMPTY_MAGIC) {
        Ok(())
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Check if a file looks like a zip-based document package.
pub fn is_package<P: AsRef<Path>>(path: P) -> bool {
    detect_package_from_path(path).is_ok()
}

/// Check if bytes look like a zip-based document package.
pub fn is_package_bytes(data: &[u8]) -> bool {
    detect_package_from_bytes(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_zip_signature() {
        let data = b"PK\x03\x04\x14\x00\x00\x00";
        assert!(detect_package_from_bytes(data).is_ok());
    }

    #[test]
    fn test_detect_empty_archive_signature() {
        let data = b"PK\x05\x06\x00\x00\x00\x00";
        assert!(detect_package_from_bytes(data).is_ok());
    }

    #[test]
    fn test_detect_invalid_format() {
        let result = detect_package_from_bytes(b"<!DOCTYPE html>");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_too_short() {
        let result = detect_package_from_bytes(b"PK");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_is_package_bytes() {
        assert!(is_package_bytes(b"PK\x03\x04rest"));
        assert!(!is_package_bytes(b"%PDF-1.7"));
        assert!(!is_package_bytes(b""));
    }
}
