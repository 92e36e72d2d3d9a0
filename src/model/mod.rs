//! Document model types for normalized DOCX content.
//!
//! This module defines the intermediate representation that bridges package
//! extraction and rule evaluation. The model is an immutable snapshot:
//! extraction builds it once per analyzed file and no component mutates it
//! afterwards. Absence of a formatting attribute is represented as `None`
//! ("unknown"), which is distinct from an explicit value that fails a rule —
//! the rule engine depends on this to produce `unable_to_verify` outcomes.

mod document;
mod paragraph;
mod style;

pub use document::{DocumentModel, Header, Orientation, PageSettings};
pub use paragraph::{Alignment, Indentation, LineRule, Paragraph, Run, Spacing};
pub use style::{Style, StyleKind};

/// Twentieths-of-a-point per inch. Margins, indentation, spacing and page
/// geometry are all measured in this unit (1440/inch, 20/point).
pub const TWIPS_PER_INCH: i32 = 1440;
