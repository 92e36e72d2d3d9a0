//! The rule engine: evaluates the fixed MLA catalog against a document
//! model and aggregates results into an [`AnalysisReport`].
//!
//! Checks are pure functions over the immutable model, so the engine runs
//! them in parallel and collects results back into catalog order. The same
//! model always yields the same report.

mod catalog;
mod checks;
mod report;

pub use catalog::{Category, Rule, Severity, RULES};
pub use report::{AnalysisReport, CheckResult, RuleStatus, Summary};

use rayon::prelude::*;

use crate::model::DocumentModel;

/// Evaluates the MLA rule catalog against document models.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine;

impl Engine {
    /// Create an engine.
    pub fn new() -> Self {
        Self
    }

    /// Run every rule check and aggregate the outcomes.
    pub fn analyze(&self, model: &DocumentModel) -> AnalysisReport {
        let results: Vec<CheckResult> = checks::CHECKS
            .par_iter()
            .map(|check| check(model))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect();
        let report = AnalysisReport::from_results(results);
        log::debug!(
            "evaluated {} rules: score {}",
            report.summary.total_rules,
            report.overall_score
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_catalog_rule_produces_one_result() {
        let report = Engine::new().analyze(&DocumentModel::new());
        assert_eq!(report.results.len(), RULES.len());
        for (result, rule) in report.results.iter().zip(RULES) {
            assert_eq!(result.rule_id, rule.id);
        }
    }

    #[test]
    fn test_summary_partitions_results() {
        let report = Engine::new().analyze(&DocumentModel::new());
        let s = report.summary;
        assert_eq!(s.passed + s.failed + s.unable_to_verify, s.total_rules);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let mut model = DocumentModel::new();
        let mut p = crate::model::Paragraph::new(0);
        p.text = "Some body text without much metadata.".to_string();
        model.paragraphs.push(p);

        let engine = Engine::new();
        let a = engine.analyze(&model).to_json(false).unwrap();
        let b = engine.analyze(&model).to_json(false).unwrap();
        assert_eq!(a, b);
    }
}
