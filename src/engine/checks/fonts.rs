//! Font family and font size checks.
//!
//! One walk over the document's runs yields both results. A run's effective
//! value is its explicit value, falling back to the document-default style;
//! a rule is unverifiable only when neither exists anywhere.

use crate::engine::catalog::rule;
use crate::engine::report::CheckResult;
use crate::model::DocumentModel;

use super::note_affected;

/// Case-insensitive substring aliases accepted as Times New Roman
/// (metric-compatible families included).
const TIMES_ALIASES: &[&str] = &[
    "times new roman",
    "times",
    "liberation serif",
    "nimbus roman",
    "tinos",
];

/// Required body size in points, with measurement tolerance.
const REQUIRED_SIZE_PT: f32 = 12.0;
const SIZE_TOLERANCE_PT: f32 = 0.1;

fn is_times_family(family: &str) -> bool {
    let family = family.to_lowercase();
    TIMES_ALIASES.iter().any(|alias| family.contains(alias))
}

pub(crate) fn check_fonts(model: &DocumentModel) -> Vec<CheckResult> {
    let family_rule = rule("font-family");
    let size_rule = rule("font-size");

    let default_style = model.default_style();
    let default_family = default_style.and_then(|s| s.font_family.as_deref());
    let default_size = default_style.and_then(|s| s.font_size);

    let mut family_known = default_family.is_some();
    let mut size_known = default_size.is_some();
    let mut bad_family: Vec<String> = Vec::new();
    let mut bad_size: Vec<String> = Vec::new();
    let mut wrong_families: Vec<String> = Vec::new();

    for paragraph in &model.paragraphs {
        for run in paragraph.runs.iter().filter(|r| !r.is_blank()) {
            if run.font_family.is_some() {
                family_known = true;
            }
            if let Some(family) = run.font_family.as_deref().or(default_family) {
                if !is_times_family(family) {
                    note_affected(&mut bad_family, paragraph);
                    if !wrong_families.iter().any(|f| f == family) {
                        wrong_families.push(family.to_string());
                    }
                }
            }

            if run.font_size.is_some() {
                size_known = true;
            }
            if let Some(size) = run.font_size.or(default_size) {
                if (size - REQUIRED_SIZE_PT).abs() > SIZE_TOLERANCE_PT {
                    note_affected(&mut bad_size, paragraph);
                }
            }
        }
    }

    let family_result = if !family_known {
        CheckResult::unable_to_verify(
            family_rule,
            "No font family information is present anywhere in the document",
        )
    } else if bad_family.is_empty() {
        CheckResult::passed(family_rule, "All text resolves to a Times New Roman family")
    } else {
        CheckResult::failed(
            family_rule,
            format!(
                "Text uses non-MLA font families: {}",
                wrong_families.join(", ")
            ),
        )
        .with_suggestion("Set the document font to Times New Roman")
        .with_affected(bad_family)
    };

    let size_result = if !size_known {
        CheckResult::unable_to_verify(
            size_rule,
            "No font size information is present anywhere in the document",
        )
    } else if bad_size.is_empty() {
        CheckResult::passed(size_rule, "All text resolves to 12pt")
    } else {
        CheckResult::failed(size_rule, "Text deviates from the required 12pt size")
            .with_suggestion("Set the font size to 12pt throughout")
            .with_affected(bad_size)
    };

    vec![family_result, size_result]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::report::RuleStatus;
    use crate::model::{Paragraph, Run, Style, StyleKind};

    fn model_with_runs(runs: Vec<Run>) -> DocumentModel {
        let mut paragraph = Paragraph::new(0);
        for run in &runs {
            paragraph.text.push_str(&run.text);
        }
        paragraph.runs = runs;
        let mut model = DocumentModel::new();
        model.paragraphs.push(paragraph);
        model
    }

    #[test]
    fn test_alias_matching() {
        assert!(is_times_family("Times New Roman"));
        assert!(is_times_family("times"));
        assert!(is_times_family("Liberation Serif"));
        assert!(!is_times_family("Arial"));
        assert!(!is_times_family("Calibri"));
    }

    #[test]
    fn test_no_font_info_is_unverifiable() {
        let model = model_with_runs(vec![Run::new("plain text")]);
        let results = check_fonts(&model);
        assert_eq!(results[0].status, RuleStatus::UnableToVerify);
        assert_eq!(results[1].status, RuleStatus::UnableToVerify);
    }

    #[test]
    fn test_default_style_fallback() {
        let mut model = model_with_runs(vec![Run::new("body text")]);
        let mut normal = Style::new("Normal", StyleKind::Paragraph);
        normal.font_family = Some("Times New Roman".to_string());
        normal.font_size = Some(12.0);
        model.styles.push(normal);

        let results = check_fonts(&model);
        assert_eq!(results[0].status, RuleStatus::Passed);
        assert_eq!(results[1].status, RuleStatus::Passed);
    }

    #[test]
    fn test_wrong_family_lists_affected_paragraph() {
        let model = model_with_runs(vec![Run {
            font_family: Some("Comic Sans MS".to_string()),
            ..Run::new("body")
        }]);
        let results = check_fonts(&model);
        assert_eq!(results[0].status, RuleStatus::Failed);
        assert_eq!(results[0].affected, vec!["Paragraph 1"]);
        assert!(results[0].details.contains("Comic Sans MS"));
    }

    #[test]
    fn test_oversized_run_fails_size_only() {
        let model = model_with_runs(vec![
            Run {
                font_family: Some("Times New Roman".to_string()),
                font_size: Some(12.0),
                ..Run::new("fine ")
            },
            Run {
                font_family: Some("Times New Roman".to_string()),
                font_size: Some(14.0),
                ..Run::new("too big")
            },
        ]);
        let results = check_fonts(&model);
        assert_eq!(results[0].status, RuleStatus::Passed);
        assert_eq!(results[1].status, RuleStatus::Failed);
        assert_eq!(results[1].affected, vec!["Paragraph 1"]);
    }

    #[test]
    fn test_size_tolerance_boundary() {
        let model = model_with_runs(vec![Run {
            font_size: Some(12.1),
            ..Run::new("just inside")
        }]);
        assert_eq!(check_fonts(&model)[1].status, RuleStatus::Passed);

        let model = model_with_runs(vec![Run {
            font_size: Some(12.25),
            ..Run::new("outside")
        }]);
        assert_eq!(check_fonts(&model)[1].status, RuleStatus::Failed);
    }

    #[test]
    fn test_blank_runs_are_ignored() {
        let model = model_with_runs(vec![Run {
            font_family: Some("Arial".to_string()),
            ..Run::new("   ")
        }]);
        let results = check_fonts(&model);
        assert_eq!(results[0].status, RuleStatus::UnableToVerify);
    }
}
