//! String-level checks for class attributes, as an editor lint would run them.

use crate::drift::rules::{matching_rules, suggestions};
use std::fmt;

const MESSAGE_PREFIX: &str = "Neo-Analog: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintRule {
    /// Arbitrary values where a semantic class or scale token exists. An error.
    NoArbitraryValues,
    /// Utility combinations that already have a semantic class. A suggestion.
    PreferSemanticClasses,
}

impl LintRule {
    pub fn name(self) -> &'static str {
        match self {
            LintRule::NoArbitraryValues => "no-arbitrary-values",
            LintRule::PreferSemanticClasses => "prefer-semantic-classes",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintDiagnostic {
    pub rule: LintRule,
    pub message: String,
}

impl fmt::Display for LintDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.rule.name())
    }
}

/// `no-arbitrary-values`: one diagnostic per forbidden pattern present.
pub fn no_arbitrary_values(text: &str) -> Vec<LintDiagnostic> {
    matching_rules(text)
        .filter_map(|rule| rule.lint_message)
        .map(|message| LintDiagnostic {
            rule: LintRule::NoArbitraryValues,
            message: format!("{MESSAGE_PREFIX}{message}"),
        })
        .collect()
}

/// `prefer-semantic-classes`: one diagnostic per known utility combination.
pub fn prefer_semantic_classes(text: &str) -> Vec<LintDiagnostic> {
    suggestions()
        .iter()
        .filter(|s| s.pattern.is_match(text))
        .map(|s| LintDiagnostic {
            rule: LintRule::PreferSemanticClasses,
            message: format!(
                "{MESSAGE_PREFIX}Consider using semantic classes ({}) instead of utility combinations",
                s.suggest
            ),
        })
        .collect()
}

/// Both rules against a plain string literal.
pub fn check_class_string(text: &str) -> Vec<LintDiagnostic> {
    let mut diagnostics = no_arbitrary_values(text);
    diagnostics.extend(prefer_semantic_classes(text));
    diagnostics
}

/// A template literal: the static parts are joined and only checked for
/// arbitrary values.
pub fn check_template(quasis: &[&str]) -> Vec<LintDiagnostic> {
    no_arbitrary_values(&quasis.concat())
}
