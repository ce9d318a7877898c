//! Rendering scan outcomes for people and for machines.

use chrono::Utc;
use serde::Serialize;

use parrot_core::analysis::{TraceEntry, TraceLevel, Verdict, VerdictKind};
use parrot_core::services::scan::{ScanOutcome, ScanSummary};

use crate::sha256_file;

/// User-facing description of the CVE-2011-2461 finding.
#[derive(Debug, Clone, Serialize)]
pub struct IssueDescription {
    pub id: &'static str,
    pub name: &'static str,
    pub severity: &'static str,
    pub background: &'static str,
    pub detail: &'static str,
    pub remediation: &'static [&'static str],
}

pub const CVE_2011_2461: IssueDescription = IssueDescription {
    id: "CVE-2011-2461",
    name: "Adobe Flex resourceModuleURLs SOP Bypass (CVE-2011-2461)",
    severity: "High",
    background: "Starting with Flex 3 the ResourceManager can load localization resources at \
runtime from modules named in the resourceModuleURLs FlashVar. SWF files compiled with \
Flex SDK 3.x through 4.5.1 do not validate the security domain of the loaded resource \
module, allowing same-origin requests from an attacker-supplied module.",
    detail: "An attacker can pass a malicious resource module through the resourceModuleURLs \
FlashVar. The module inherits the security domain of the vulnerable SWF and can read HTTP \
responses from the hosting domain, an indirect same-origin-policy bypass in fully patched \
browsers and plugins.",
    remediation: &[
        "Recompile the SWF with the latest Apache Flex SDK, including static libraries",
        "Patch the SWF with the official Adobe patch tool (APSB11-25 technical advisory)",
        "Delete the SWF if it is not used",
    ],
};

/// Report record for one scanned file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub sha256: Option<String>,
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<Verdict>,
    pub trace: Vec<TraceEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<IssueDescription>,
}

impl FileReport {
    pub fn from_outcome(outcome: &ScanOutcome) -> Self {
        let sha256 = match sha256_file(&outcome.path) {
            Ok(hash) => Some(hash),
            Err(err) => {
                log::debug!("{err:#}");
                None
            }
        };
        Self {
            path: outcome.path.display().to_string(),
            sha256,
            backend: outcome.backend.clone(),
            verdict: outcome.verdict().cloned(),
            trace: outcome
                .analysis
                .as_ref()
                .map(|a| a.trace.entries().to_vec())
                .unwrap_or_default(),
            error: outcome.error.clone(),
            issue: outcome.is_vulnerable().then_some(CVE_2011_2461),
        }
    }
}

/// Whole-run report emitted with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub tool: String,
    pub version: String,
    pub scanned_at: String,
    pub summary: ScanSummary,
    pub files: Vec<FileReport>,
}

impl ScanReport {
    pub fn new(outcomes: &[ScanOutcome]) -> Self {
        Self {
            tool: "parrotng".to_string(),
            version: parrot_core::version().to_string(),
            scanned_at: Utc::now().to_rfc3339(),
            summary: ScanSummary::from_outcomes(outcomes),
            files: outcomes.iter().map(FileReport::from_outcome).collect(),
        }
    }
}

pub fn banner() -> String {
    format!(":: parrotng v{} ::", parrot_core::version())
}

fn trace_prefix(level: TraceLevel) -> &'static str {
    match level {
        TraceLevel::Info => "[*]",
        TraceLevel::Warn => "[!]",
    }
}

/// Human-readable block for one file: the analysis trace and the result line.
pub fn render_outcome(outcome: &ScanOutcome) -> String {
    let mut out = format!("[*] Analyzing {}\n", outcome.path.display());
    if let Some(err) = &outcome.error {
        out.push_str(&format!("[!] {err}\n"));
        return out;
    }
    let Some(analysis) = &outcome.analysis else {
        return out;
    };
    for entry in analysis.trace.entries() {
        out.push_str(&format!("{} {}\n", trace_prefix(entry.level), entry.message));
    }
    let verdict = &analysis.verdict;
    let label = match verdict.kind {
        VerdictKind::Vulnerable => "VULNERABLE",
        VerdictKind::NotVulnerable => "not vulnerable",
        VerdictKind::Indeterminate => "indeterminate (not vulnerable)",
    };
    out.push_str(&format!("Result: {label} - {}\n", verdict.rationale));
    if verdict.is_vulnerable() {
        let issue = &CVE_2011_2461;
        out.push_str(&format!("  Issue: {} [{}]\n", issue.name, issue.severity));
        out.push_str("  Remediation:\n");
        for step in issue.remediation {
            out.push_str(&format!("    - {step}\n"));
        }
    }
    out
}

pub fn render_summary(summary: &ScanSummary) -> String {
    format!(
        "Scanned {} file(s): {} vulnerable, {} not vulnerable, {} indeterminate, {} error(s)",
        summary.scanned,
        summary.vulnerable,
        summary.not_vulnerable,
        summary.indeterminate,
        summary.errors
    )
}
