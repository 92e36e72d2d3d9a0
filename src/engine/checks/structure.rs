//! Structural checks: page header, MLA heading block, title, emphasis.

use regex::Regex;

use crate::engine::catalog::rule;
use crate::engine::report::CheckResult;
use crate::model::{Alignment, DocumentModel, Paragraph};

use super::citations::works_cited_heading_index;
use super::{note_affected, title_exempt_indices};

/// Emphasis runs tolerated across the body before the document is flagged
/// as over-formatted.
const EMPHASIS_RUN_LIMIT: usize = 5;

pub(crate) fn check_header_format(model: &DocumentModel) -> Vec<CheckResult> {
    let spec = rule("header-format");
    if model.headers.is_empty() {
        return vec![CheckResult::unable_to_verify(
            spec,
            "The document carries no header parts",
        )];
    }

    // "Lastname 1", possibly with multi-word surnames.
    let name_page = Regex::new(r"^[A-Za-z]+(?:\s+[A-Za-z]+)*\s+\d+$").unwrap();

    let mut issues = Vec::new();
    for (i, header) in model.headers.iter().enumerate() {
        let text = header.text.trim();
        let mut problems = Vec::new();
        if text.is_empty() {
            problems.push("is empty".to_string());
        } else {
            if !text.chars().any(|c| c.is_ascii_digit()) {
                problems.push("is missing a page number".to_string());
            }
            if !name_page.is_match(text) {
                problems.push(format!("does not read \"Lastname N\" (found \"{text}\")"));
            }
        }
        if !header.is_right_aligned() {
            problems.push("is not right-aligned".to_string());
        }

        if problems.is_empty() {
            return vec![CheckResult::passed(
                spec,
                "A right-aligned last-name-and-page-number header is present",
            )];
        }
        issues.push(format!("Header {}: {}", i + 1, problems.join(", ")));
    }

    vec![
        CheckResult::failed(spec, issues.join("; ")).with_suggestion(
            "Add a right-aligned running header with your last name and the page number",
        ),
    ]
}

pub(crate) fn check_heading_block(model: &DocumentModel) -> Vec<CheckResult> {
    let spec = rule("heading-block");
    let slots: Vec<&Paragraph> = model
        .paragraphs
        .iter()
        .take(8)
        .filter(|p| !p.is_empty())
        .collect();
    if slots.len() < 4 {
        return vec![CheckResult::failed(
            spec,
            format!(
                "Only {} lines of text precede the body; the MLA heading needs four",
                slots.len()
            ),
        )
        .with_suggestion(
            "Begin the paper with your name, instructor, course and date on separate lines",
        )];
    }

    let name = Regex::new(r"^[A-Z][a-z]+\s+[A-Z][a-z]+").unwrap();
    let instructor = Regex::new(r"\b(Dr\.|Mr\.|Ms\.|Mrs\.|Professor)\s+[A-Z][a-z]+").unwrap();
    let date = Regex::new(
        r"\b\d{1,2}\s+[A-Z][a-z]+\.?\s+\d{4}\b|\b[A-Z][a-z]+\.?\s+\d{1,2},?\s+\d{4}\b",
    )
    .unwrap();

    let first_four = &slots[..4];
    let mut missing = Vec::new();
    if !name.is_match(first_four[0].text.trim()) {
        missing.push("a student name on the first line");
    }
    if !instructor.is_match(&first_four[1].text) {
        missing.push("an instructor name on the second line");
    }
    if !first_four.iter().any(|p| date.is_match(&p.text)) {
        missing.push("a date");
    }
    if !first_four.iter().all(|p| p.alignment == Alignment::Left) {
        missing.push("left alignment of the heading lines");
    }

    // A single weak signal is tolerated: the heuristics cannot distinguish
    // an unusual-but-valid heading from a missing one.
    if missing.len() <= 1 {
        vec![CheckResult::passed(
            spec,
            "The first page carries an MLA heading block",
        )]
    } else {
        vec![CheckResult::failed(
            spec,
            format!("The heading block is missing {}", missing.join(", ")),
        )
        .with_suggestion(
            "Use four left-aligned lines: your name, instructor, course, and date",
        )]
    }
}

/// Locate the paper's title: the first centered paragraph among the first
/// five, else the first non-empty paragraph among the first three.
pub(crate) fn find_title(model: &DocumentModel) -> Option<&Paragraph> {
    model
        .paragraphs
        .iter()
        .take(5)
        .find(|p| !p.is_empty() && p.is_centered())
        .or_else(|| model.paragraphs.iter().take(3).find(|p| !p.is_empty()))
}

pub(crate) fn check_title_format(model: &DocumentModel) -> Vec<CheckResult> {
    let spec = rule("title-format");
    let Some(title) = find_title(model) else {
        return vec![CheckResult::failed(spec, "No title paragraph was found")
            .with_suggestion("Add a centered title after the heading block")];
    };

    let mut problems = Vec::new();
    if !title.is_centered() {
        problems.push("is not centered");
    }
    if title.has_emphasis() {
        problems.push("carries bold, italic or underline formatting");
    }

    if problems.is_empty() {
        vec![CheckResult::passed(spec, "The title is centered, plain text")]
    } else {
        vec![CheckResult::failed(
            spec,
            format!("The title {}", problems.join(" and ")),
        )
        .with_suggestion("Center the title and remove any extra formatting")
        .with_affected(vec![title.label()])]
    }
}

pub(crate) fn check_excessive_formatting(model: &DocumentModel) -> Vec<CheckResult> {
    let spec = rule("excessive-formatting");
    let exempt = title_exempt_indices(model);
    // Works Cited entries italicize titles of works; only body text counts.
    let boundary = works_cited_heading_index(model);

    let mut affected = Vec::new();
    let mut total = 0;
    for paragraph in &model.paragraphs {
        if exempt.contains(&paragraph.index) || boundary.map_or(false, |h| paragraph.index >= h) {
            continue;
        }
        let count = paragraph.emphasis_run_count();
        if count > 0 {
            total += count;
            note_affected(&mut affected, paragraph);
        }
    }

    if total <= EMPHASIS_RUN_LIMIT {
        vec![CheckResult::passed(
            spec,
            "Body text is free of heavy decoration",
        )]
    } else {
        vec![CheckResult::failed(
            spec,
            format!("{total} text runs carry bold, italic or underline formatting"),
        )
        .with_suggestion("Reserve italics for titles of works; avoid bold and underline")
        .with_affected(affected)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::report::RuleStatus;
    use crate::model::{Header, Run};

    fn paragraph(index: usize, text: &str) -> Paragraph {
        let mut p = Paragraph::new(index);
        p.text = text.to_string();
        p
    }

    fn header(text: &str, right: bool) -> Header {
        let mut p = paragraph(0, text);
        if right {
            p.alignment = Alignment::Right;
        }
        Header {
            text: text.to_string(),
            paragraphs: vec![p],
        }
    }

    fn heading_model() -> DocumentModel {
        let mut model = DocumentModel::new();
        for (i, text) in [
            "Jane Doe",
            "Dr. Smith",
            "English 101",
            "12 May 2024",
        ]
        .iter()
        .enumerate()
        {
            model.paragraphs.push(paragraph(i, text));
        }
        model
    }

    #[test]
    fn test_header_well_formed() {
        let mut model = DocumentModel::new();
        model.headers.push(header("Doe 1", true));
        assert_eq!(check_header_format(&model)[0].status, RuleStatus::Passed);
    }

    #[test]
    fn test_header_missing_page_number() {
        let mut model = DocumentModel::new();
        model.headers.push(header("Doe", true));
        let results = check_header_format(&model);
        assert_eq!(results[0].status, RuleStatus::Failed);
        assert!(results[0].details.contains("missing a page number"));
    }

    #[test]
    fn test_header_not_right_aligned() {
        let mut model = DocumentModel::new();
        model.headers.push(header("Doe 1", false));
        let results = check_header_format(&model);
        assert_eq!(results[0].status, RuleStatus::Failed);
        assert!(results[0].details.contains("not right-aligned"));
    }

    #[test]
    fn test_any_passing_header_suffices() {
        let mut model = DocumentModel::new();
        model.headers.push(header("", false));
        model.headers.push(header("Doe 2", true));
        assert_eq!(check_header_format(&model)[0].status, RuleStatus::Passed);
    }

    #[test]
    fn test_no_headers_is_unverifiable() {
        let model = DocumentModel::new();
        assert_eq!(
            check_header_format(&model)[0].status,
            RuleStatus::UnableToVerify
        );
    }

    #[test]
    fn test_heading_block_complete() {
        let model = heading_model();
        assert_eq!(check_heading_block(&model)[0].status, RuleStatus::Passed);
    }

    #[test]
    fn test_heading_block_tolerates_one_weak_signal() {
        let mut model = heading_model();
        model.paragraphs[1].text = "Smith".to_string();
        assert_eq!(check_heading_block(&model)[0].status, RuleStatus::Passed);
    }

    #[test]
    fn test_heading_block_fails_on_two_missing_signals() {
        let mut model = heading_model();
        model.paragraphs[1].text = "Smith".to_string();
        model.paragraphs[3].text = "Spring term".to_string();
        let results = check_heading_block(&model);
        assert_eq!(results[0].status, RuleStatus::Failed);
        assert!(results[0].details.contains("instructor"));
        assert!(results[0].details.contains("date"));
    }

    #[test]
    fn test_heading_block_too_short() {
        let mut model = DocumentModel::new();
        model.paragraphs.push(paragraph(0, "Just a title"));
        let results = check_heading_block(&model);
        assert_eq!(results[0].status, RuleStatus::Failed);
        assert!(results[0].details.contains("needs four"));
    }

    #[test]
    fn test_find_title_prefers_centered() {
        let mut model = heading_model();
        let mut title = paragraph(4, "The Title");
        title.alignment = Alignment::Center;
        model.paragraphs.push(title);
        assert_eq!(find_title(&model).unwrap().index, 4);
    }

    #[test]
    fn test_find_title_falls_back_to_first_text() {
        let mut model = DocumentModel::new();
        model.paragraphs.push(paragraph(0, ""));
        model.paragraphs.push(paragraph(1, "An Uncentered Title"));
        assert_eq!(find_title(&model).unwrap().index, 1);
    }

    #[test]
    fn test_title_with_emphasis_fails() {
        let mut model = heading_model();
        let mut title = paragraph(4, "The Title");
        title.alignment = Alignment::Center;
        title.runs.push(Run {
            bold: true,
            ..Run::new("The Title")
        });
        model.paragraphs.push(title);

        let results = check_title_format(&model);
        assert_eq!(results[0].status, RuleStatus::Failed);
        assert_eq!(results[0].affected, vec!["Paragraph 5"]);
    }

    #[test]
    fn test_excessive_formatting_limit() {
        let mut model = heading_model();
        let mut body = paragraph(4, "body");
        for _ in 0..6 {
            body.runs.push(Run {
                italic: true,
                ..Run::new("decorated ")
            });
        }
        model.paragraphs.push(body);

        let results = check_excessive_formatting(&model);
        assert_eq!(results[0].status, RuleStatus::Failed);
        assert!(results[0].details.contains("6 text runs"));
    }

    #[test]
    fn test_emphasis_on_title_is_exempt() {
        let mut model = heading_model();
        let mut title = paragraph(4, "The Title");
        title.alignment = Alignment::Center;
        for _ in 0..6 {
            title.runs.push(Run {
                bold: true,
                ..Run::new("x")
            });
        }
        model.paragraphs.push(title);

        assert_eq!(
            check_excessive_formatting(&model)[0].status,
            RuleStatus::Passed
        );
    }
}
