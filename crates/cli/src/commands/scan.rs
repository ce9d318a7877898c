use std::path::{Path, PathBuf};

use anyhow::Result;
use parrot_core::services::disassembler::{default_registry, Disassembler};
use parrot_core::services::scan::{scan_all, ScanOutcome, ScanSummary};

use crate::commands::util::{collect_candidates, load_config_or_default};
use crate::report::{banner, render_outcome, render_summary, ScanReport};

/// Options for `parrotng scan`.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub inputs: Vec<String>,
    pub config: Option<PathBuf>,
    /// Backend name override (`swfdump`, `dump-file`).
    pub backend: Option<String>,
    /// Disassembler executable override.
    pub disassembler: Option<String>,
    pub recursive: bool,
    pub jobs: Option<usize>,
    pub json: bool,
    pub quiet: bool,
}

/// Disassemble and classify every candidate binary.
pub fn scan_command(opts: &ScanOptions) -> Result<ScanSummary> {
    let mut config = load_config_or_default(opts.config.as_deref())?;
    if let Some(backend) = &opts.backend {
        config.disassembler.backend = backend.clone();
    }
    if let Some(program) = &opts.disassembler {
        config.disassembler.program = Some(program.clone());
    }
    if opts.jobs.is_some() {
        config.jobs = opts.jobs;
    }
    let recursive = opts.recursive || config.recursive;

    let registry = default_registry(&config.disassembler);
    let backend = registry.resolve(&config.disassembler.backend)?;
    let paths = collect_candidates(&opts.inputs, &config.extensions, recursive)?;
    log::info!("scanning {} file(s) with {}", paths.len(), backend.name());

    run_and_report(backend, &paths, config.jobs, opts.json, opts.quiet)
}

/// Scan `paths` and print the results in the requested format.
pub fn run_and_report(
    backend: &dyn Disassembler,
    paths: &[PathBuf],
    jobs: Option<usize>,
    json: bool,
    quiet: bool,
) -> Result<ScanSummary> {
    let outcomes = scan_all(backend, paths, jobs)?;
    let summary = ScanSummary::from_outcomes(&outcomes);

    if json {
        let report = ScanReport::new(&outcomes);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if quiet {
        for path in vulnerable_paths(&outcomes) {
            println!("{}", path.display());
        }
    } else {
        print_outcomes(&outcomes, &summary);
    }

    Ok(summary)
}

fn print_outcomes(outcomes: &[ScanOutcome], summary: &ScanSummary) {
    println!("{}", banner());
    if outcomes.is_empty() {
        println!("\nNo candidate files found.");
        return;
    }
    for outcome in outcomes {
        println!();
        print!("{}", render_outcome(outcome));
    }
    println!();
    println!("{}", render_summary(summary));
}

/// Paths of vulnerable files, for callers that only need the hit list.
pub fn vulnerable_paths(outcomes: &[ScanOutcome]) -> Vec<&Path> {
    outcomes.iter().filter(|o| o.is_vulnerable()).map(|o| o.path.as_path()).collect()
}
