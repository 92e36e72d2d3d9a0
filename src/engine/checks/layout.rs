//! Layout checks: spacing, margins, indentation, alignment and paper size.

use crate::engine::catalog::rule;
use crate::engine::report::CheckResult;
use crate::model::{Alignment, DocumentModel, LineRule, Spacing, TWIPS_PER_INCH};

use super::citations::works_cited_heading_index;
use super::{note_affected, title_exempt_indices};

/// Half an inch in twips, the MLA first-line and hanging indent distance.
const HALF_INCH: i32 = TWIPS_PER_INCH / 2;

/// Tolerance for margin and indent comparisons (0.05 inch).
const TWIPS_TOLERANCE: i32 = 72;

/// Double spacing as an auto-rule line value (2 x 240), with the band of
/// values word processors emit for "2.0" spacing.
const DOUBLE_LINE: i32 = 480;
const DOUBLE_AUTO_MIN: i32 = 450;
const DOUBLE_AUTO_MAX: i32 = 520;
const DOUBLE_EXACT_TOLERANCE: i32 = 50;

/// Judge whether a spacing block encodes double spacing. `None` when the
/// block carries no line value at all.
fn is_double_spaced(spacing: &Spacing) -> Option<bool> {
    let line = spacing.line?;
    let double = match spacing.line_rule {
        Some(LineRule::Auto) | None => (DOUBLE_AUTO_MIN..=DOUBLE_AUTO_MAX).contains(&line),
        Some(LineRule::Exact) => (line - DOUBLE_LINE).abs() <= DOUBLE_EXACT_TOLERANCE,
    };
    Some(double)
}

pub(crate) fn check_line_spacing(model: &DocumentModel) -> Vec<CheckResult> {
    let spec = rule("line-spacing");
    let paragraphs = model.non_empty_paragraphs();
    if paragraphs.is_empty() {
        return vec![CheckResult::unable_to_verify(
            spec,
            "The document contains no text to measure",
        )];
    }

    let missing = paragraphs
        .iter()
        .filter(|p| p.spacing.and_then(|s| s.line).is_none())
        .count();
    if missing * 2 > paragraphs.len() {
        return vec![CheckResult::unable_to_verify(
            spec,
            format!(
                "{missing} of {} paragraphs carry no line-spacing value",
                paragraphs.len()
            ),
        )];
    }

    let mut affected = Vec::new();
    for paragraph in &paragraphs {
        let double = paragraph.spacing.as_ref().and_then(is_double_spaced);
        if double == Some(false) {
            note_affected(&mut affected, paragraph);
        }
    }

    if affected.is_empty() {
        vec![CheckResult::passed(spec, "Paragraphs are double-spaced")]
    } else {
        vec![CheckResult::failed(
            spec,
            format!("{} paragraphs are not double-spaced", affected.len()),
        )
        .with_suggestion("Set line spacing to 2.0 for all paragraphs")
        .with_affected(affected)]
    }
}

pub(crate) fn check_margins(model: &DocumentModel) -> Vec<CheckResult> {
    let spec = rule("margins");
    let Some(page) = model.page_settings else {
        return vec![CheckResult::unable_to_verify(
            spec,
            "The document carries no page settings",
        )];
    };

    let off: Vec<String> = page
        .margins()
        .iter()
        .filter(|&&(_, value)| (value - TWIPS_PER_INCH).abs() > TWIPS_TOLERANCE)
        .map(|&(name, value)| {
            format!("{name} margin is {:.2}\"", value as f64 / TWIPS_PER_INCH as f64)
        })
        .collect();

    if off.is_empty() {
        vec![CheckResult::passed(spec, "All margins are 1 inch")]
    } else {
        vec![
            CheckResult::failed(spec, format!("Margins deviate from 1\": {}", off.join(", ")))
                .with_suggestion("Set all four margins to 1 inch"),
        ]
    }
}

pub(crate) fn check_first_line_indent(model: &DocumentModel) -> Vec<CheckResult> {
    let spec = rule("first-line-indent");
    // Works Cited entries use a hanging indent instead; they are judged by
    // their own rule.
    let boundary = works_cited_heading_index(model);
    let eligible: Vec<_> = model
        .non_empty_paragraphs()
        .into_iter()
        .filter(|p| !p.is_centered())
        .filter(|p| boundary.map_or(true, |h| p.index < h))
        .collect();
    if eligible.is_empty() {
        return vec![CheckResult::unable_to_verify(
            spec,
            "No left-aligned body paragraphs to measure",
        )];
    }

    let missing = eligible.iter().filter(|p| p.indentation.is_none()).count();
    if missing * 2 > eligible.len() {
        return vec![CheckResult::unable_to_verify(
            spec,
            format!(
                "{missing} of {} paragraphs carry no indentation data",
                eligible.len()
            ),
        )];
    }

    let mut affected = Vec::new();
    for paragraph in &eligible {
        if let Some(ind) = paragraph.indentation {
            let first = ind.first_line.unwrap_or(0);
            if (first - HALF_INCH).abs() > TWIPS_TOLERANCE {
                note_affected(&mut affected, paragraph);
            }
        }
    }

    if affected.is_empty() {
        vec![CheckResult::passed(
            spec,
            "Body paragraphs carry a half-inch first-line indent",
        )]
    } else {
        vec![CheckResult::failed(
            spec,
            format!(
                "{} paragraphs lack the half-inch first-line indent",
                affected.len()
            ),
        )
        .with_suggestion("Indent the first line of each body paragraph by 0.5\"")
        .with_affected(affected)]
    }
}

pub(crate) fn check_alignment(model: &DocumentModel) -> Vec<CheckResult> {
    let spec = rule("paragraph-alignment");
    let exempt = title_exempt_indices(model);
    // The Works Cited heading is conventionally centered.
    let heading = works_cited_heading_index(model);

    let mut affected = Vec::new();
    for paragraph in model.non_empty_paragraphs() {
        if exempt.contains(&paragraph.index) || heading == Some(paragraph.index) {
            continue;
        }
        if paragraph.alignment != Alignment::Left {
            note_affected(&mut affected, paragraph);
        }
    }

    if affected.is_empty() {
        vec![CheckResult::passed(spec, "Body paragraphs are left-aligned")]
    } else {
        vec![CheckResult::failed(
            spec,
            format!("{} body paragraphs are not left-aligned", affected.len()),
        )
        .with_suggestion("Left-align body paragraphs; only the title is centered")
        .with_affected(affected)]
    }
}

pub(crate) fn check_paper_size(model: &DocumentModel) -> Vec<CheckResult> {
    let spec = rule("paper-size");
    let Some(page) = model.page_settings else {
        return vec![CheckResult::unable_to_verify(
            spec,
            "The document carries no page settings",
        )];
    };

    // 0.1" slack absorbs rounding in converted documents.
    let letter = (page.page_width - crate::model::PageSettings::LETTER_WIDTH).abs() <= 144
        && (page.page_height - crate::model::PageSettings::LETTER_HEIGHT).abs() <= 144;

    if letter {
        vec![CheckResult::passed(spec, "The page is US Letter")]
    } else {
        vec![CheckResult::failed(
            spec,
            format!(
                "Page is {:.2}\" x {:.2}\", not US Letter (8.5\" x 11\")",
                page.page_width as f64 / TWIPS_PER_INCH as f64,
                page.page_height as f64 / TWIPS_PER_INCH as f64,
            ),
        )
        .with_suggestion("Set the paper size to US Letter")]
    }
}
