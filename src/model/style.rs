//! Named style definitions.

use serde::{Deserialize, Serialize};

/// A named formatting template from the package's styles part.
///
/// Carries the same formatting attributes as a run so the engine can fall
/// back to a document default when a run has no explicit value. Full
/// style-inheritance resolution is out of scope; only a direct
/// default-paragraph-style lookup is supported (see
/// [`DocumentModel::default_style`](super::DocumentModel::default_style)).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Style {
    /// Style id (e.g. "Normal", "Heading1").
    pub id: String,

    /// Human-readable style name, if present.
    pub name: Option<String>,

    /// Whether this is a paragraph or character style.
    pub kind: StyleKind,

    /// Font family from the style's run properties.
    pub font_family: Option<String>,

    /// Font size in points.
    pub font_size: Option<f32>,

    /// Bold toggle, when explicitly set by the style.
    pub bold: Option<bool>,

    /// Italic toggle, when explicitly set by the style.
    pub italic: Option<bool>,

    /// Underline toggle, when explicitly set by the style.
    pub underline: Option<bool>,
}

impl Style {
    /// Create a style with no formatting attributes.
    pub fn new(id: impl Into<String>, kind: StyleKind) -> Self {
        Self {
            id: id.into(),
            name: None,
            kind,
            font_family: None,
            font_size: None,
            bold: None,
            italic: None,
            underline: None,
        }
    }
}

/// Kind of a named style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleKind {
    /// Applies to whole paragraphs.
    Paragraph,
    /// Applies to runs within a paragraph.
    Character,
}
