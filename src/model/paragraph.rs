//! Paragraph and run-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of document text with its resolved (not style-cascaded)
/// formatting attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    /// Position in document order (0-based, stable).
    pub index: usize,

    /// Plain text: the ordered concatenation of run texts. Empty when the
    /// paragraph has no runs.
    pub text: String,

    /// Named style id from the paragraph properties, if any.
    pub style_id: Option<String>,

    /// Text alignment. Absence of an explicit alignment in the source is a
    /// legitimate structural default, not an unknown, so this is `Left`
    /// rather than `Option` when unset.
    pub alignment: Alignment,

    /// Indentation, present only when the source carries an `ind` element.
    pub indentation: Option<Indentation>,

    /// Spacing, present only when the source carries a `spacing` element.
    pub spacing: Option<Spacing>,

    /// Text runs in document order.
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create an empty paragraph at a document position.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            text: String::new(),
            style_id: None,
            alignment: Alignment::Left,
            indentation: None,
            spacing: None,
            runs: Vec::new(),
        }
    }

    /// Whether the paragraph carries no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Whether the paragraph is centered.
    pub fn is_centered(&self) -> bool {
        self.alignment == Alignment::Center
    }

    /// Whether any run carries bold, italic or underline formatting.
    pub fn has_emphasis(&self) -> bool {
        self.runs.iter().any(Run::has_emphasis)
    }

    /// Number of runs carrying bold, italic or underline formatting.
    pub fn emphasis_run_count(&self) -> usize {
        self.runs.iter().filter(|r| r.has_emphasis()).count()
    }

    /// Display label used in report affected-element lists (1-based).
    pub fn label(&self) -> String {
        format!("Paragraph {}", self.index + 1)
    }
}

/// A maximal span of text within a paragraph sharing one formatting set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Run {
    /// The text content.
    pub text: String,

    /// Font family name. Prefers the ascii-range family over the high-ansi
    /// fallback when the source carries both. `None` when not specified.
    pub font_family: Option<String>,

    /// Font size in points, converted from half-point source units. Values
    /// outside [4, 72] points are rejected back to `None` during extraction.
    pub font_size: Option<f32>,

    /// Bold toggle.
    pub bold: bool,

    /// Italic toggle.
    pub italic: bool,

    /// Underline toggle.
    pub underline: bool,

    /// Text color as a hex string (e.g. "FF0000"), if specified.
    pub color: Option<String>,
}

impl Run {
    /// Create a plain run with default formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Whether this run carries bold, italic or underline formatting.
    pub fn has_emphasis(&self) -> bool {
        self.bold || self.italic || self.underline
    }

    /// Whether this run carries no visible text.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Paragraph text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (the structural default).
    #[default]
    Left,
    /// Center alignment.
    Center,
    /// Right alignment.
    Right,
    /// Justified alignment.
    Justify,
}

/// Paragraph indentation in twentieths of a point. Each field is a signed
/// distance; `None` means the source did not specify it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Indentation {
    /// Left indent.
    pub left: Option<i32>,

    /// Right indent.
    pub right: Option<i32>,

    /// First-line indent (first line pushed in).
    pub first_line: Option<i32>,

    /// Hanging indent (first line flush, following lines pushed in).
    pub hanging: Option<i32>,
}

impl Indentation {
    /// Whether no field carries a value.
    pub fn is_unset(&self) -> bool {
        self.left.is_none()
            && self.right.is_none()
            && self.first_line.is_none()
            && self.hanging.is_none()
    }
}

/// Paragraph spacing in twentieths of a point (240 = one line at single
/// spacing).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Spacing {
    /// Space before the paragraph.
    pub before: Option<i32>,

    /// Space after the paragraph.
    pub after: Option<i32>,

    /// Line spacing value, interpreted per `line_rule`.
    pub line: Option<i32>,

    /// How the `line` value is interpreted. `None` when the source gave a
    /// line value without a rule.
    pub line_rule: Option<LineRule>,
}

/// Line-spacing rule discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineRule {
    /// `line` is a multiple of single spacing (240 twips per line).
    Auto,
    /// `line` is an exact line height.
    Exact,
}
