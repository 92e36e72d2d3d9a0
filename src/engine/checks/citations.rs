//! Citation checks: Works Cited page, hanging indents, in-text citations.

use regex::Regex;

use crate::engine::catalog::rule;
use crate::engine::report::CheckResult;
use crate::model::{DocumentModel, Paragraph, TWIPS_PER_INCH};

use super::title_exempt_indices;

/// Half an inch in twips, the MLA hanging-indent distance.
const HALF_INCH: i32 = TWIPS_PER_INCH / 2;

/// Tolerance for the hanging-indent comparison (0.05 inch).
const TWIPS_TOLERANCE: i32 = 72;

/// Case-insensitive substrings that mark the reference-list heading.
const WORKS_CITED_MARKERS: &[&str] = &["works cited", "bibliography"];

/// Index of the paragraph introducing the reference list, if any. Body
/// rules use this as a scope boundary: the reference list follows its own
/// indentation, alignment and emphasis conventions.
pub(crate) fn works_cited_heading_index(model: &DocumentModel) -> Option<usize> {
    model.paragraphs.iter().find_map(|p| {
        let text = p.text.to_lowercase();
        WORKS_CITED_MARKERS
            .iter()
            .any(|marker| text.contains(marker))
            .then_some(p.index)
    })
}

pub(crate) fn check_works_cited_presence(model: &DocumentModel) -> Vec<CheckResult> {
    let spec = rule("works-cited");
    if works_cited_heading_index(model).is_some() {
        vec![CheckResult::passed(spec, "A Works Cited section is present")]
    } else {
        vec![
            CheckResult::failed(spec, "No Works Cited section was found").with_suggestion(
                "End the paper with a Works Cited page listing every source",
            ),
        ]
    }
}

pub(crate) fn check_works_cited_indent(model: &DocumentModel) -> Vec<CheckResult> {
    let spec = rule("works-cited-indent");
    let Some(heading) = works_cited_heading_index(model) else {
        return vec![CheckResult::unable_to_verify(
            spec,
            "No Works Cited section to inspect",
        )];
    };

    let entries: Vec<&Paragraph> = model
        .paragraphs
        .iter()
        .filter(|p| p.index > heading && !p.is_empty())
        .collect();
    if entries.is_empty() {
        return vec![CheckResult::failed(
            spec,
            "The Works Cited heading is followed by no citations",
        )
        .with_suggestion("List your sources under the Works Cited heading")];
    }

    let hanging = entries
        .iter()
        .filter(|p| {
            p.indentation
                .and_then(|ind| ind.hanging)
                .is_some_and(|h| (h - HALF_INCH).abs() <= TWIPS_TOLERANCE)
        })
        .count();

    if hanging == entries.len() {
        vec![CheckResult::passed(
            spec,
            "Works Cited entries carry a half-inch hanging indent",
        )]
    } else if hanging == 0 {
        vec![CheckResult::failed(
            spec,
            "Works Cited entries carry no hanging indent",
        )
        .with_suggestion("Apply a 0.5\" hanging indent to every Works Cited entry")]
    } else {
        vec![CheckResult::failed(
            spec,
            format!(
                "Only {hanging} of {} Works Cited entries carry a hanging indent",
                entries.len()
            ),
        )
        .with_suggestion("Apply a 0.5\" hanging indent to every Works Cited entry")]
    }
}

/// Compiled parenthetical-citation patterns. Together they cover the common
/// MLA in-text forms: (Author 12), (Author), ("Short Title" 12), and
/// (Author et al. 12).
struct CitationPatterns {
    author_page: Regex,
    author_only: Regex,
    quoted_title: Regex,
    et_al: Regex,
}

impl CitationPatterns {
    fn new() -> Self {
        Self {
            author_page: Regex::new(r"\(\s*[A-Z][A-Za-z'-]+\s+\d+\s*\)").unwrap(),
            author_only: Regex::new(r"\(\s*[A-Z][A-Za-z'-]+\s*\)").unwrap(),
            quoted_title: Regex::new(r#"\(\s*["“][^"”]+["”](?:\s+\d+)?\s*\)"#).unwrap(),
            et_al: Regex::new(r"\(\s*[A-Z][A-Za-z'-]+\s+et\s+al\.(?:\s+\d+)?\s*\)").unwrap(),
        }
    }

    fn count(&self, text: &str) -> usize {
        self.author_page.find_iter(text).count()
            + self.author_only.find_iter(text).count()
            + self.quoted_title.find_iter(text).count()
            + self.et_al.find_iter(text).count()
    }
}

pub(crate) fn check_in_text_citations(model: &DocumentModel) -> Vec<CheckResult> {
    let spec = rule("in-text-citations");
    let patterns = CitationPatterns::new();
    let heading = works_cited_heading_index(model);
    let exempt = title_exempt_indices(model);

    // Count citations in the body only: the reference list itself and the
    // title would otherwise inflate the tally.
    let total: usize = model
        .paragraphs
        .iter()
        .filter(|p| !p.is_empty())
        .filter(|p| heading.map_or(true, |h| p.index < h))
        .filter(|p| !exempt.contains(&p.index))
        .map(|p| patterns.count(&p.text))
        .sum();

    if total >= 3 {
        vec![CheckResult::passed(
            spec,
            format!("{total} parenthetical citations found"),
        )]
    } else if total > 0 {
        vec![CheckResult::failed(
            spec,
            format!("Only {total} parenthetical citations found"),
        )
        .with_suggestion("Cite each borrowed idea in the text, e.g. (Smith 23)")]
    } else {
        vec![
            CheckResult::failed(spec, "No parenthetical citations found").with_suggestion(
                "Cite sources in the text with the author's last name and page, e.g. (Smith 23)",
            ),
        ]
    }
}
