use anyhow::Result;
use parrot_core::services::backends::DumpFileBackend;
use parrot_core::services::scan::ScanSummary;

use crate::commands::scan::run_and_report;
use crate::commands::util::collect_candidates;

/// Extensions picked up when `analyze-dump` is pointed at a directory.
pub const DUMP_EXTENSIONS: [&str; 2] = ["txt", "dump"];

/// Classify disassembly text that was produced ahead of time.
pub fn analyze_dump_command(
    inputs: &[String],
    recursive: bool,
    json: bool,
    quiet: bool,
) -> Result<ScanSummary> {
    let extensions: Vec<String> = DUMP_EXTENSIONS.iter().map(|e| e.to_string()).collect();
    let paths = collect_candidates(inputs, &extensions, recursive)?;
    run_and_report(&DumpFileBackend, &paths, None, json, quiet)
}
