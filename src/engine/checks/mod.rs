//! The rule check battery.
//!
//! Each check is a pure, total function over the immutable document model:
//! it never fails, and sparse input degrades to an `UnableToVerify` status
//! rather than an error. Checks share no mutable state, so the engine may
//! evaluate them in any order or in parallel with identical results.

pub(crate) mod citations;
pub(crate) mod fonts;
pub(crate) mod layout;
pub(crate) mod structure;

use crate::engine::report::CheckResult;
use crate::model::{DocumentModel, Paragraph};

/// A rule check: model in, one or more results out (most rules produce
/// exactly one; the combined font walker produces two).
pub(crate) type CheckFn = fn(&DocumentModel) -> Vec<CheckResult>;

/// All checks, in catalog order.
pub(crate) const CHECKS: &[CheckFn] = &[
    fonts::check_fonts,
    layout::check_line_spacing,
    layout::check_margins,
    layout::check_first_line_indent,
    layout::check_alignment,
    structure::check_header_format,
    structure::check_heading_block,
    structure::check_title_format,
    structure::check_excessive_formatting,
    citations::check_works_cited_presence,
    citations::check_works_cited_indent,
    citations::check_in_text_citations,
    layout::check_paper_size,
];

/// Indices of paragraphs classified as *potential titles*: among the first
/// 3 non-empty paragraphs and either centered or under 100 characters.
/// Shared by the alignment and excessive-formatting checks so a legitimate
/// title is not penalized as body text.
pub(crate) fn potential_title_indices(model: &DocumentModel) -> Vec<usize> {
    model
        .non_empty_paragraphs()
        .into_iter()
        .take(3)
        .filter(|p| p.is_centered() || p.text.chars().count() < 100)
        .map(|p| p.index)
        .collect()
}

/// Potential titles plus the paragraph the title rule itself identifies.
/// An MLA title sits after the four heading lines, outside the first-3
/// window, and must not be failed for being centered.
pub(crate) fn title_exempt_indices(model: &DocumentModel) -> Vec<usize> {
    let mut indices = potential_title_indices(model);
    if let Some(title) = structure::find_title(model) {
        if !indices.contains(&title.index) {
            indices.push(title.index);
        }
    }
    indices
}

/// Record a paragraph label, deduplicated in first-seen order.
pub(crate) fn note_affected(labels: &mut Vec<String>, paragraph: &Paragraph) {
    let label = paragraph.label();
    if !labels.contains(&label) {
        labels.push(label);
    }
}
