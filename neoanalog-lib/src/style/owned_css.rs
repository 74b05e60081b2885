// src/style/owned_css.rs (owned parse units, detached from the source text)
use std::fmt;

/// One `.na-name { ... }` block as it appeared in the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticClassBlock {
    /// Full class name including the prefix, e.g. "na-card".
    pub class_name: String,
    /// Raw text between the braces, untrimmed.
    pub body: String,
}

/// A single `property: value;` pair with both sides trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedDeclaration {
    pub property: String,
    pub value: String,
}

impl fmt::Display for OwnedDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}
