//! Project-wide drift scan: every source line checked against every rule.

use crate::config::DriftConfig;
use crate::drift::rules::matching_rules;
use crate::error::{Error, Result};
use glob::{MatchOptions, Pattern};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Longest code excerpt kept per violation, in characters.
const EXCERPT_CHARS: usize = 80;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: true,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// 1-based.
    pub line: usize,
    pub rule_id: &'static str,
    pub message: &'static str,
    /// Trimmed source line, cut to 80 characters.
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileViolations {
    /// Relative to the scanned root.
    pub path: PathBuf,
    pub violations: Vec<Violation>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriftReport {
    pub files_scanned: usize,
    /// Only files with at least one violation, sorted by path.
    pub files: Vec<FileViolations>,
}

impl DriftReport {
    pub fn violation_count(&self) -> usize {
        self.files.iter().map(|f| f.violations.len()).sum()
    }

    pub fn is_clean(&self) -> bool {
        self.files.is_empty()
    }
}

impl fmt::Display for DriftReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for file in &self.files {
            writeln!(f, "\n📄 {}", file.path.display())?;
            for v in &file.violations {
                writeln!(f, "   Line {}: ❌ {}", v.line, v.message)?;
                writeln!(f, "     Code: {}...", v.code)?;
            }
        }
        writeln!(f, "\n--------------------------------------------------")?;
        if self.is_clean() {
            write!(f, "✅ PASS: System is 100% Semantic. No drift detected.")
        } else {
            write!(
                f,
                "🚨 FAIL: Found {} drift violations.",
                self.violation_count()
            )
        }
    }
}

/// Check each line of `text`. A line breaking several rules is reported once
/// per rule, in rule order.
pub fn scan_source(text: &str) -> Vec<Violation> {
    let mut violations = Vec::new();
    for (index, line) in text.lines().enumerate() {
        for rule in matching_rules(line) {
            violations.push(Violation {
                line: index + 1,
                rule_id: rule.id,
                message: rule.message,
                code: excerpt(line),
            });
        }
    }
    violations
}

/// Every scannable file under the root, relative to it, sorted.
pub fn collect_files(config: &DriftConfig) -> Result<Vec<PathBuf>> {
    if !config.root.is_dir() {
        return Err(Error::BadRoot(config.root.clone()));
    }

    let ignore = config
        .ignore
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| Error::Pattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let root = Pattern::escape(&config.root.to_string_lossy());
    let mut files = BTreeSet::new();

    for ext in &config.extensions {
        let pattern = format!("{root}/**/*.{ext}");
        let entries = glob::glob_with(&pattern, MATCH_OPTIONS)
            .map_err(|source| Error::Pattern { pattern, source })?;

        for entry in entries {
            let path = entry?;
            if !path.is_file() {
                continue;
            }
            let relative = path.strip_prefix(&config.root).unwrap_or(path.as_path());
            if ignore
                .iter()
                .any(|p| p.matches_path_with(relative, MATCH_OPTIONS))
            {
                log::debug!("ignoring {}", relative.display());
                continue;
            }
            files.insert(relative.to_path_buf());
        }
    }
    Ok(files.into_iter().collect())
}

/// Scan the whole project. Files are read in parallel; the report order is
/// still sorted by path.
pub fn scan_project(config: &DriftConfig) -> Result<DriftReport> {
    let files = collect_files(config)?;

    let scanned = files
        .par_iter()
        .map(|relative| scan_file(&config.root, relative))
        .collect::<Result<Vec<_>>>()?;

    Ok(DriftReport {
        files_scanned: files.len(),
        files: scanned
            .into_iter()
            .filter(|file| !file.violations.is_empty())
            .collect(),
    })
}

fn scan_file(root: &Path, relative: &Path) -> Result<FileViolations> {
    let full = root.join(relative);
    let bytes = fs::read(&full).map_err(|source| Error::Read {
        path: full.clone(),
        source,
    })?;
    let text = String::from_utf8_lossy(&bytes);

    Ok(FileViolations {
        path: relative.to_path_buf(),
        violations: scan_source(&text),
    })
}

fn excerpt(line: &str) -> String {
    line.trim().chars().take(EXCERPT_CHARS).collect()
}
