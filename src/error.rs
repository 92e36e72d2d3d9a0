//! Error types for the mlacheck library.

use std::io;
use thiserror::Error;

/// Result type alias for mlacheck operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while processing a document package.
///
/// Only extraction can fail. Every variant here is fatal: the archive was
/// unreadable or the mandatory document part was missing or malformed.
/// Missing *optional* parts never surface as errors; they degrade to
/// "unknown" fields in the model, which the rule engine reports as
/// `unable_to_verify` outcomes.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a zip-based document package.
    #[error("Unknown file format: not a DOCX package")]
    UnknownFormat,

    /// The archive could not be opened or traversed.
    #[error("Corrupted package archive: {0}")]
    Archive(String),

    /// A mandatory package part is absent.
    #[error("Missing required document part: {0}")]
    MissingPart(String),

    /// A mandatory XML part failed to parse.
    #[error("Malformed XML in {part}: {message}")]
    Xml {
        /// Package part that failed to parse.
        part: String,
        /// Underlying parser message.
        message: String,
    },

    /// The document part parsed but lacks the expected body structure.
    #[error("Invalid document structure: {0}")]
    InvalidDocument(String),
}

impl Error {
    pub(crate) fn xml(part: &str, err: roxmltree::Error) -> Self {
        Error::Xml {
            part: part.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => {
                Error::MissingPart("unnamed package part".to_string())
            }
            _ => Error::Archive(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(err.to_string(), "Unknown file format: not a DOCX package");

        let err = Error::MissingPart("word/document.xml".to_string());
        assert_eq!(
            err.to_string(),
            "Missing required document part: word/document.xml"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_zip_error_conversion() {
        let err: Error = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, Error::MissingPart(_)));
    }
}
