use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use parrot_core::config::{has_extension, load_config, ScanConfig};
use walkdir::WalkDir;

use crate::canonicalize_or_current;

/// Resolve command-line inputs into the list of files to analyze.
///
/// Files named directly are always taken. Directories contribute files whose
/// extension is in `extensions`, descending only when `recursive` is set.
/// Results are sorted per directory for stable output.
pub fn collect_candidates(
    inputs: &[String],
    extensions: &[String],
    recursive: bool,
) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();
    for input in inputs {
        let path = canonicalize_or_current(input)?;
        if path.is_file() {
            candidates.push(path);
            continue;
        }
        if !path.is_dir() {
            return Err(anyhow!("Input does not exist: {}", path.display()));
        }

        let max_depth = if recursive { usize::MAX } else { 1 };
        for entry in WalkDir::new(&path).min_depth(1).max_depth(max_depth).sort_by_file_name() {
            let entry = entry.with_context(|| format!("Failed to read {}", path.display()))?;
            if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                candidates.push(entry.into_path());
            }
        }
    }
    Ok(candidates)
}

/// Load the config at `path`, or defaults when none is given.
pub fn load_config_or_default(path: Option<&Path>) -> Result<ScanConfig> {
    match path {
        Some(path) => load_config(path),
        None => Ok(ScanConfig::default()),
    }
}
