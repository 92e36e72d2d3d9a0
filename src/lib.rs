//! # mlacheck
//!
//! MLA formatting compliance checker for DOCX documents.
//!
//! This library extracts a structural model from a `.docx` package and
//! evaluates it against the MLA formatting rules (Times New Roman 12pt,
//! double spacing, 1-inch margins, the heading block, Works Cited, and so
//! on), producing a JSON-serializable compliance report.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mlacheck::analyze_file;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = analyze_file("essay.docx")?;
//!     println!("score: {}", report.overall_score);
//!     println!("{}", report.to_json(true)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Structural extraction**: paragraphs, runs, styles, page geometry and
//!   headers from the DOCX parts
//! - **Three-valued rule outcomes**: passed, failed, or unable to verify,
//!   so sparse documents are flagged as inconclusive rather than punished
//! - **Deterministic reports**: the same document always yields the same
//!   JSON, byte for byte
//! - **Parallel evaluation**: Rayon drives both part parsing and the rule
//!   battery

pub mod detect;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;

// Re-export commonly used types
pub use detect::{detect_package_from_bytes, detect_package_from_path, is_package, is_package_bytes};
pub use engine::{AnalysisReport, Category, CheckResult, Engine, Rule, RuleStatus, Severity};
pub use error::{Error, Result};
pub use model::{
    Alignment, DocumentModel, Header, Indentation, LineRule, Orientation, PageSettings, Paragraph,
    Run, Spacing, Style, StyleKind,
};
pub use parser::DocxParser;

use std::io::Read;
use std::path::Path;

/// Extract the structural model from a `.docx` file.
///
/// # Example
///
/// ```no_run
/// use mlacheck::extract_file;
///
/// let model = extract_file("essay.docx").unwrap();
/// println!("paragraphs: {}", model.paragraphs.len());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<DocumentModel> {
    let parser = DocxParser::open(path)?;
    parser.parse()
}

/// Extract the structural model from DOCX bytes.
pub fn extract_bytes(data: &[u8]) -> Result<DocumentModel> {
    let parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Extract the structural model from a reader.
pub fn extract_reader<R: Read>(reader: R) -> Result<DocumentModel> {
    let parser = DocxParser::from_reader(reader)?;
    parser.parse()
}

/// Extract and analyze a `.docx` file in one step.
///
/// # Example
///
/// ```no_run
/// use mlacheck::analyze_file;
///
/// let report = analyze_file("essay.docx").unwrap();
/// for result in &report.results {
///     println!("{}: {:?}", result.rule_id, result.status);
/// }
/// ```
pub fn analyze_file<P: AsRef<Path>>(path: P) -> Result<AnalysisReport> {
    let model = extract_file(path)?;
    Ok(Engine::new().analyze(&model))
}

/// Extract and analyze DOCX bytes in one step.
pub fn analyze_bytes(data: &[u8]) -> Result<AnalysisReport> {
    let model = extract_bytes(data)?;
    Ok(Engine::new().analyze(&model))
}

/// Analyze an already-extracted model.
///
/// Useful when the model came from somewhere other than a live package,
/// e.g. deserialized from JSON in a test fixture.
pub fn analyze_model(model: &DocumentModel) -> AnalysisReport {
    Engine::new().analyze(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_extract_bytes_empty_data() {
        let data: [u8; 0] = [];
        let result = extract_bytes(&data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_extract_bytes_too_short() {
        let data = b"PK";
        let result = extract_bytes(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_extract_bytes_unknown_magic() {
        let data = b"<!DOCTYPE html><html></html>";
        let result = extract_bytes(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_analyze_bytes_propagates_format_error() {
        let result = analyze_bytes(b"not a docx");
        assert!(result.is_err());
    }

    #[test]
    fn test_analyze_model_on_empty_model() {
        let report = analyze_model(&DocumentModel::new());
        assert_eq!(report.results.len(), engine::RULES.len());
    }

    #[test]
    fn test_detect_rejects_pdf_magic() {
        assert!(!is_package_bytes(b"%PDF-1.7\n"));
        assert!(matches!(
            detect_package_from_bytes(b"%PDF-1.7\n"),
            Err(Error::UnknownFormat)
        ));
    }
}
