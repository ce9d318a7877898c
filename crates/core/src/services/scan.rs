use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;

use crate::analysis::{analyze_with_trace, Analysis, Verdict, VerdictKind};
use crate::model::DisassemblyDump;
use crate::services::disassembler::Disassembler;

/// Result of scanning one file: an analysis, or the disassembler failure.
#[derive(Debug, Clone, Serialize)]
pub struct ScanOutcome {
    pub path: PathBuf,
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScanOutcome {
    pub fn verdict(&self) -> Option<&Verdict> {
        self.analysis.as_ref().map(|a| &a.verdict)
    }

    pub fn is_vulnerable(&self) -> bool {
        self.verdict().is_some_and(Verdict::is_vulnerable)
    }
}

/// Disassemble and classify a single file.
pub fn scan_file(backend: &dyn Disassembler, path: &Path) -> ScanOutcome {
    log::debug!("disassembling {} with {}", path.display(), backend.name());
    let (analysis, error) = match backend.disassemble(path) {
        Ok(text) => (Some(analyze_with_trace(&DisassemblyDump::from_text(&text))), None),
        Err(err) => {
            log::warn!("{}: {}", path.display(), err);
            (None, Some(err.to_string()))
        }
    };
    ScanOutcome { path: path.to_path_buf(), backend: backend.name().to_string(), analysis, error }
}

/// Scan files in parallel. Results come back in input order.
///
/// `jobs` caps the worker count; `None` or `Some(0)` uses the global pool.
pub fn scan_all(
    backend: &dyn Disassembler,
    paths: &[PathBuf],
    jobs: Option<usize>,
) -> Result<Vec<ScanOutcome>> {
    let run = || paths.par_iter().map(|path| scan_file(backend, path)).collect::<Vec<_>>();
    match jobs {
        Some(n) if n > 0 => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .context("Failed to build scan worker pool")?;
            Ok(pool.install(run))
        }
        _ => Ok(run()),
    }
}

/// Tally of a batch scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub scanned: usize,
    pub vulnerable: usize,
    pub not_vulnerable: usize,
    pub indeterminate: usize,
    pub errors: usize,
}

impl ScanSummary {
    pub fn from_outcomes(outcomes: &[ScanOutcome]) -> Self {
        let mut summary = Self { scanned: outcomes.len(), ..Self::default() };
        for outcome in outcomes {
            match outcome.verdict().map(|v| v.kind) {
                Some(VerdictKind::Vulnerable) => summary.vulnerable += 1,
                Some(VerdictKind::NotVulnerable) => summary.not_vulnerable += 1,
                Some(VerdictKind::Indeterminate) => summary.indeterminate += 1,
                None => summary.errors += 1,
            }
        }
        summary
    }

    pub fn any_vulnerable(&self) -> bool {
        self.vulnerable > 0
    }
}
