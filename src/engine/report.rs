//! Analysis report types and score aggregation.

use serde::{Deserialize, Serialize};

use super::catalog::{Category, Rule, Severity};

/// Three-valued outcome of a rule check.
///
/// `UnableToVerify` means the model lacks the data needed to judge the rule.
/// It is a distinct variant rather than an absent boolean so the "no data"
/// case can never be silently coerced to a failure: absence of evidence is
/// not evidence of non-compliance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    /// The rule's predicate held.
    Passed,
    /// The rule's predicate failed on verifiable data.
    Failed,
    /// The document carries no data to judge the rule.
    UnableToVerify,
}

/// Outcome of one rule check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Catalog rule id.
    pub rule_id: String,
    /// Catalog display name.
    pub rule_name: String,
    /// Severity a failure carries.
    pub severity: Severity,
    /// Report category.
    pub category: Category,
    /// Outcome.
    pub status: RuleStatus,
    /// Human-readable explanation of the outcome.
    pub details: String,
    /// Remediation suggestions, when failing.
    pub suggestions: Vec<String>,
    /// Labels of affected elements (e.g. "Paragraph 7"), deduplicated in
    /// first-seen order.
    pub affected: Vec<String>,
}

impl CheckResult {
    /// Build a result for a catalog rule.
    pub fn new(rule: &Rule, status: RuleStatus, details: impl Into<String>) -> Self {
        Self {
            rule_id: rule.id.to_string(),
            rule_name: rule.name.to_string(),
            severity: rule.severity,
            category: rule.category,
            status,
            details: details.into(),
            suggestions: Vec::new(),
            affected: Vec::new(),
        }
    }

    /// Shorthand for a passing result.
    pub fn passed(rule: &Rule, details: impl Into<String>) -> Self {
        Self::new(rule, RuleStatus::Passed, details)
    }

    /// Shorthand for a failing result.
    pub fn failed(rule: &Rule, details: impl Into<String>) -> Self {
        Self::new(rule, RuleStatus::Failed, details)
    }

    /// Shorthand for an unverifiable result.
    pub fn unable_to_verify(rule: &Rule, details: impl Into<String>) -> Self {
        Self::new(rule, RuleStatus::UnableToVerify, details)
    }

    /// Add a remediation suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    /// Attach affected-element labels.
    pub fn with_affected(mut self, affected: Vec<String>) -> Self {
        self.affected = affected;
        self
    }
}

/// Aggregate counts over all rule results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of rules checked.
    pub total_rules: usize,
    /// Rules that passed.
    pub passed: usize,
    /// Rules that failed (any severity).
    pub failed: usize,
    /// Failed rules with error severity.
    pub errors: usize,
    /// Failed rules with warning severity.
    pub warnings: usize,
    /// Rules the document carried no data for.
    pub unable_to_verify: usize,
}

/// The full compliance report: per-rule results plus aggregates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Per-rule results in catalog order.
    pub results: Vec<CheckResult>,
    /// Aggregate counts.
    pub summary: Summary,
    /// Compliance score in [0, 100], computed over verifiable rules only so
    /// documents lacking metadata are flagged as inconclusive, not punished.
    pub overall_score: u8,
}

impl AnalysisReport {
    /// Aggregate per-rule results into a report.
    pub fn from_results(results: Vec<CheckResult>) -> Self {
        let mut summary = Summary {
            total_rules: results.len(),
            ..Default::default()
        };
        for result in &results {
            match result.status {
                RuleStatus::Passed => summary.passed += 1,
                RuleStatus::Failed => {
                    summary.failed += 1;
                    match result.severity {
                        Severity::Error => summary.errors += 1,
                        Severity::Warning => summary.warnings += 1,
                        Severity::Info => {}
                    }
                }
                RuleStatus::UnableToVerify => summary.unable_to_verify += 1,
            }
        }

        let verifiable = summary.passed + summary.failed;
        let overall_score = if verifiable == 0 {
            0
        } else {
            ((summary.passed as f64 / verifiable as f64) * 100.0).round() as u8
        };

        Self {
            results,
            summary,
            overall_score,
        }
    }

    /// Results with a given status.
    pub fn with_status(&self, status: RuleStatus) -> Vec<&CheckResult> {
        self.results.iter().filter(|r| r.status == status).collect()
    }

    /// Serialize the report to JSON for the presentation layer.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
