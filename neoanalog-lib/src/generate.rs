use crate::config::{DriftConfig, ExtractConfig};
use crate::drift::scanner::{self, DriftReport};
use crate::error::{Error, Result};
use crate::headless::{extract, HeadlessMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod headless_map {
    use super::*;

    /// What a successful extraction run produced.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Summary {
        pub output: PathBuf,
        pub class_count: usize,
        pub skipped_bytes: usize,
    }

    /// Read the stylesheet, build the map and overwrite the output file.
    ///
    /// Nothing is written unless the whole document is ready, and the output
    /// is replaced by rename so a failed write leaves the old file intact.
    pub fn generate(config: &ExtractConfig) -> Result<Summary> {
        let css = fs::read_to_string(&config.input)
            .map_err(|e| Error::from_read(config.input.clone(), e))?;
        log::info!("read {} bytes from {}", css.len(), config.input.display());

        let extraction = extract(&css, &config.prefix);
        if extraction.skipped_bytes > 0 {
            log::warn!(
                "{} bytes inside semantic blocks were not valid declarations",
                extraction.skipped_bytes
            );
        }

        let class_count = extraction.classes.len();
        let json = HeadlessMap::new(extraction.classes).to_json()?;

        if let Some(parent) = config.output.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        write_atomic(&config.output, &json).map_err(|source| Error::Write {
            path: config.output.clone(),
            source,
        })?;

        Ok(Summary {
            output: config.output.clone(),
            class_count,
            skipped_bytes: extraction.skipped_bytes,
        })
    }
}

pub mod drift_police {
    use super::*;

    /// Scan the project for drift. The caller decides how to report it.
    pub fn run(config: &DriftConfig) -> Result<DriftReport> {
        let report = scanner::scan_project(config)?;
        log::info!(
            "scanned {} files, {} violations",
            report.files_scanned,
            report.violation_count()
        );
        Ok(report)
    }
}

/// Write to a sibling temp file, then rename over `path`.
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = PathBuf::from(temp_name);

    let result = fs::File::create(&temp_path)
        .and_then(|mut file| {
            file.write_all(content.as_bytes())?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&temp_path, path));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.json");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, "new").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!dir.path().join("map.json.tmp").exists());
    }

    #[test]
    fn test_write_atomic_into_missing_dir_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("map.json");
        assert!(write_atomic(&path, "{}").is_err());
        assert!(!path.exists());
    }
}
