//! Fixed names and paths, resolved against a project root.

use std::path::{Path, PathBuf};

/// Class prefix marking the design system's semantic vocabulary.
pub const SEMANTIC_PREFIX: &str = "na-";

pub const SYSTEM_NAME: &str = "Neo-Analog";
pub const MAP_VERSION: &str = "2.0";
pub const MAP_PHILOSOPHY: &str = "Headless Semantic Protocol";

pub const DEFAULT_INPUT: &str = "input.css";
pub const DEFAULT_OUTPUT: &str = "dist/headless-map.json";

/// File types the drift scanner reads.
pub const SCAN_EXTENSIONS: &[&str] = &["html", "js", "jsx", "ts", "tsx", "vue", "svelte"];

/// Paths, relative to the project root, the drift scanner never reads.
pub const SCAN_IGNORE: &[&str] = &[
    "node_modules/**",
    "dist/**",
    ".git/**",
    "scripts/**",
    "input.css",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub prefix: String,
}

impl ExtractConfig {
    pub fn for_project(root: &Path) -> Self {
        ExtractConfig {
            input: root.join(DEFAULT_INPUT),
            output: root.join(DEFAULT_OUTPUT),
            prefix: SEMANTIC_PREFIX.to_string(),
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self::for_project(Path::new("."))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriftConfig {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub ignore: Vec<String>,
}

impl DriftConfig {
    pub fn for_project(root: &Path) -> Self {
        DriftConfig {
            root: root.to_path_buf(),
            extensions: SCAN_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignore: SCAN_IGNORE.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self::for_project(Path::new("."))
    }
}
