//! Drift detection: arbitrary utility values used where a semantic class exists.

pub mod lint;
pub mod rules;
pub mod scanner;

pub use lint::{check_class_string, check_template, LintDiagnostic, LintRule};
pub use rules::{drift_rules, suggestions, DriftRule, Suggestion};
pub use scanner::{scan_project, scan_source, DriftReport, FileViolations, Violation};
