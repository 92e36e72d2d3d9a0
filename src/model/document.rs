//! Document-level types.

use super::{Paragraph, Style, StyleKind, TWIPS_PER_INCH};
use serde::{Deserialize, Serialize};

/// A normalized document: the extractor's output and the rule engine's sole
/// input. Serializable so extraction and evaluation can be implemented and
/// tested independently.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentModel {
    /// Paragraphs in stable document order.
    pub paragraphs: Vec<Paragraph>,

    /// Flat list of named styles from the styles part.
    pub styles: Vec<Style>,

    /// Page geometry. `None` when the package carries no section properties
    /// and no settings part at all — margin and paper-size rules then report
    /// `unable_to_verify` instead of failing.
    pub page_settings: Option<PageSettings>,

    /// Page headers, in part order.
    pub headers: Vec<Header>,
}

impl DocumentModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Paragraphs carrying visible text, in document order.
    pub fn non_empty_paragraphs(&self) -> Vec<&Paragraph> {
        self.paragraphs.iter().filter(|p| !p.is_empty()).collect()
    }

    /// The document-default paragraph style: "Normal" when present, else the
    /// first paragraph-kind style. No multi-level cascading is performed.
    pub fn default_style(&self) -> Option<&Style> {
        self.styles
            .iter()
            .find(|s| s.kind == StyleKind::Paragraph && s.id.eq_ignore_ascii_case("normal"))
            .or_else(|| self.styles.iter().find(|s| s.kind == StyleKind::Paragraph))
    }

    /// Plain text of the whole document, one line per paragraph.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Page geometry in twentieths of a point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageSettings {
    /// Top margin.
    pub margin_top: i32,
    /// Bottom margin.
    pub margin_bottom: i32,
    /// Left margin.
    pub margin_left: i32,
    /// Right margin.
    pub margin_right: i32,
    /// Page width.
    pub page_width: i32,
    /// Page height.
    pub page_height: i32,
    /// Page orientation.
    pub orientation: Orientation,
}

impl PageSettings {
    /// US Letter page width (8.5 inches).
    pub const LETTER_WIDTH: i32 = 12240;
    /// US Letter page height (11 inches).
    pub const LETTER_HEIGHT: i32 = 15840;

    /// Margins as (top, bottom, left, right) label/value pairs, for rule
    /// reporting.
    pub fn margins(&self) -> [(&'static str, i32); 4] {
        [
            ("top", self.margin_top),
            ("bottom", self.margin_bottom),
            ("left", self.margin_left),
            ("right", self.margin_right),
        ]
    }
}

impl Default for PageSettings {
    /// US Letter with 1-inch margins, portrait.
    fn default() -> Self {
        Self {
            margin_top: TWIPS_PER_INCH,
            margin_bottom: TWIPS_PER_INCH,
            margin_left: TWIPS_PER_INCH,
            margin_right: TWIPS_PER_INCH,
            page_width: Self::LETTER_WIDTH,
            page_height: Self::LETTER_HEIGHT,
            orientation: Orientation::Portrait,
        }
    }
}

/// Page orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Portrait (the default).
    #[default]
    Portrait,
    /// Landscape.
    Landscape,
}

/// A page header: free text plus its constituent paragraphs, kept for
/// alignment checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Header {
    /// Concatenated header text.
    pub text: String,

    /// Header paragraphs in order.
    pub paragraphs: Vec<Paragraph>,
}

impl Header {
    /// Whether any header paragraph is right-aligned.
    pub fn is_right_aligned(&self) -> bool {
        self.paragraphs
            .iter()
            .any(|p| p.alignment == super::Alignment::Right)
    }
}
