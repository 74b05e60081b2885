use regex::Regex;
use std::sync::LazyLock;

/// One forbidden pattern: an arbitrary value standing in for a semantic class.
#[derive(Debug)]
pub struct DriftRule {
    pub id: &'static str,
    pub pattern: Regex,
    /// Shown by the project scanner.
    pub message: &'static str,
    /// Shown by `no-arbitrary-values`. `None` for scanner-only rules.
    pub lint_message: Option<&'static str>,
}

/// A utility combination that already has a semantic class.
#[derive(Debug)]
pub struct Suggestion {
    pub pattern: Regex,
    pub suggest: &'static str,
}

impl DriftRule {
    fn new(
        id: &'static str,
        pattern: &str,
        message: &'static str,
        lint_message: Option<&'static str>,
    ) -> Self {
        DriftRule {
            id,
            pattern: Regex::new(pattern).expect("drift patterns are static"),
            message,
            lint_message,
        }
    }
}

static DRIFT_RULES: LazyLock<Vec<DriftRule>> = LazyLock::new(|| {
    vec![
        DriftRule::new(
            "arbitrary-font-size",
            r"text-\[\d+px\]",
            "Hardcoded font size detected. Use .na-h* or .na-data classes.",
            Some("Use semantic typography classes (.na-h*, .na-data) instead of arbitrary font sizes"),
        ),
        DriftRule::new(
            "arbitrary-padding",
            r"p-\[\d+px\]",
            "Arbitrary padding detected. Use standard spacing tokens (p-4, p-6).",
            Some("Use standard spacing tokens (p-4, p-6) instead of arbitrary padding"),
        ),
        DriftRule::new(
            "arbitrary-margin",
            r"m-\[\d+px\]",
            "Arbitrary margin detected. Use standard spacing tokens (m-4, m-6).",
            Some("Use standard spacing tokens (m-4, m-6) instead of arbitrary margin"),
        ),
        DriftRule::new(
            "hex-background",
            r"bg-\[#.*?\]",
            "Hardcoded hex background. Use semantic bg-* classes.",
            Some("Use semantic color classes (bg-paper, bg-void) instead of hardcoded hex colors"),
        ),
        DriftRule::new(
            "hex-text-color",
            r"text-\[#.*?\]",
            "Hardcoded hex text color. Use semantic text-* classes.",
            Some("Use semantic color classes (text-lux, text-clay) instead of hardcoded hex colors"),
        ),
        DriftRule::new(
            "arbitrary-radius",
            r"rounded-\[\d+px\]",
            "Hardcoded radius. Use .rounded-card, .rounded-panel.",
            Some("Use semantic radius classes (rounded-card, rounded-panel) instead of arbitrary border-radius"),
        ),
        DriftRule::new(
            "direct-font-family",
            r"font-(sans|serif|mono)",
            "Direct font-family usage. Use .na-h*, .na-data, or .na-editorial.",
            None,
        ),
    ]
});

static SUGGESTIONS: LazyLock<Vec<Suggestion>> = LazyLock::new(|| {
    [
        (r"text-(xl|2xl|3xl)\s+font-(bold|semibold)", "na-h1, na-h2, or na-h3"),
        (r"text-(sm|base)\s+font-mono", "na-data"),
        (r"bg-(gray|zinc)-(900|950)", "na-card or na-panel"),
    ]
    .into_iter()
    .map(|(pattern, suggest)| Suggestion {
        pattern: Regex::new(pattern).expect("suggestion patterns are static"),
        suggest,
    })
    .collect()
});

/// Every forbidden pattern, in reporting order.
pub fn drift_rules() -> &'static [DriftRule] {
    &DRIFT_RULES
}

pub fn suggestions() -> &'static [Suggestion] {
    &SUGGESTIONS
}

/// Rules matching anywhere in `text`, each at most once.
pub fn matching_rules(text: &str) -> impl Iterator<Item = &'static DriftRule> + '_ {
    drift_rules()
        .iter()
        .filter(move |rule| rule.pattern.is_match(text))
}
