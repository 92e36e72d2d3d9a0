//! Static rule catalog.
//!
//! The catalog is engine-owned configuration: fixed at initialization and
//! never mutated by analysis. Order here is report order.

use serde::{Deserialize, Serialize};

/// A compliance rule definition.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Rule {
    /// Stable rule identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// What the rule requires.
    pub description: &'static str,
    /// How serious a failure is.
    pub severity: Severity,
    /// Report grouping.
    pub category: Category,
}

/// Severity of a rule failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational.
    Info,
    /// Should be fixed but minor.
    Warning,
    /// Clear standard violation.
    Error,
}

impl Severity {
    /// String form for display.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Report category a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Fonts, spacing, emphasis.
    Formatting,
    /// Headers, heading block, title.
    Structure,
    /// Works Cited and in-text citations.
    Citations,
    /// Margins and paper size.
    PageSetup,
}

/// The fixed MLA rule catalog.
pub const RULES: &[Rule] = &[
    Rule {
        id: "font-family",
        name: "Font family",
        description: "Body text uses Times New Roman",
        severity: Severity::Error,
        category: Category::Formatting,
    },
    Rule {
        id: "font-size",
        name: "Font size",
        description: "Body text is 12 point",
        severity: Severity::Error,
        category: Category::Formatting,
    },
    Rule {
        id: "line-spacing",
        name: "Line spacing",
        description: "Paragraphs are double-spaced",
        severity: Severity::Error,
        category: Category::Formatting,
    },
    Rule {
        id: "margins",
        name: "Margins",
        description: "All four margins are 1 inch",
        severity: Severity::Error,
        category: Category::PageSetup,
    },
    Rule {
        id: "first-line-indent",
        name: "First-line indent",
        description: "Body paragraphs begin with a half-inch first-line indent",
        severity: Severity::Warning,
        category: Category::Formatting,
    },
    Rule {
        id: "paragraph-alignment",
        name: "Paragraph alignment",
        description: "Body paragraphs are left-aligned",
        severity: Severity::Warning,
        category: Category::Formatting,
    },
    Rule {
        id: "header-format",
        name: "Page header",
        description: "A right-aligned header shows the last name and page number",
        severity: Severity::Error,
        category: Category::Structure,
    },
    Rule {
        id: "heading-block",
        name: "MLA heading block",
        description: "The first page identifies student, instructor, course and date",
        severity: Severity::Error,
        category: Category::Structure,
    },
    Rule {
        id: "title-format",
        name: "Title formatting",
        description: "The title is centered and carries no extra formatting",
        severity: Severity::Warning,
        category: Category::Structure,
    },
    Rule {
        id: "excessive-formatting",
        name: "Excessive formatting",
        description: "Body text avoids bold, italic and underline decoration",
        severity: Severity::Warning,
        category: Category::Formatting,
    },
    Rule {
        id: "works-cited",
        name: "Works Cited page",
        description: "The document contains a Works Cited section",
        severity: Severity::Error,
        category: Category::Citations,
    },
    Rule {
        id: "works-cited-indent",
        name: "Works Cited hanging indent",
        description: "Works Cited entries use a half-inch hanging indent",
        severity: Severity::Warning,
        category: Category::Citations,
    },
    Rule {
        id: "in-text-citations",
        name: "In-text citations",
        description: "The paper cites sources parenthetically in MLA form",
        severity: Severity::Warning,
        category: Category::Citations,
    },
    Rule {
        id: "paper-size",
        name: "Paper size",
        description: "The page is US Letter (8.5 by 11 inches)",
        severity: Severity::Warning,
        category: Category::PageSetup,
    },
];

/// Look up a rule definition by id.
///
/// A check asking for an unregistered rule is a programming-contract
/// violation (rule registration and rule execution drifted apart), not a
/// user-facing condition, so this panics rather than degrading.
pub fn rule(id: &str) -> &'static Rule {
    RULES
        .iter()
        .find(|r| r.id == id)
        .unwrap_or_else(|| panic!("rule '{id}' is not registered in the catalog"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in RULES.iter().enumerate() {
            for b in &RULES[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_rule_lookup() {
        assert_eq!(rule("margins").name, "Margins");
    }

    #[test]
    #[should_panic(expected = "not registered")]
    fn test_unknown_rule_panics() {
        rule("no-such-rule");
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }
}
