//! CVE-2011-2461 detection pipeline.
//!
//! Four stages run over one [`DisassemblyDump`]:
//! - the application-type gate (is this Flex at all),
//! - the load-hook check (is there a `ModuleInfo::load` body),
//! - the bytecode matcher when the body is present,
//! - the SDK version heuristic when it is not.
//!
//! The pipeline is a pure function of the dump text. Malformed input degrades
//! to `Indeterminate` or `NotVulnerable`; nothing here returns an error.

pub mod bytecode;
pub mod classifier;
pub mod markers;
pub mod sdk;
pub mod trace;
pub mod verdict;

use serde::{Deserialize, Serialize};

pub use bytecode::{check_code_block_vulnerable, extract_code_block};
pub use classifier::{contains_module_load, is_flex_application};
pub use sdk::{check_sdk_version_vulnerable, SdkVersion, SdkVersionError};
pub use trace::{Trace, TraceEntry, TraceLevel};
pub use verdict::{Anomaly, Basis, Verdict, VerdictKind};

use crate::model::DisassemblyDump;

/// Verdict plus the stage-by-stage trace that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    pub verdict: Verdict,
    pub trace: Trace,
}

/// Classify a dump.
pub fn analyze(dump: &DisassemblyDump) -> Verdict {
    analyze_with_trace(dump).verdict
}

/// Classify raw disassembler text.
pub fn analyze_text(text: &str) -> Analysis {
    analyze_with_trace(&DisassemblyDump::from_text(text))
}

/// Classify a dump and keep the trace.
pub fn analyze_with_trace(dump: &DisassemblyDump) -> Analysis {
    let mut trace = Trace::new();
    let verdict = run_pipeline(dump, &mut trace);
    Analysis { verdict, trace }
}

fn run_pipeline(dump: &DisassemblyDump, trace: &mut Trace) -> Verdict {
    if !is_flex_application(dump) {
        trace.info("NOT a Flex application");
        let verdict = Verdict::not_vulnerable(Basis::ApplicationType, "not a Flex application");
        return if dump.lines().iter().all(|line| line.trim().is_empty()) {
            verdict.with_anomaly(Anomaly::EmptyDump)
        } else {
            verdict
        };
    }
    trace.info("Flex application detected");

    if contains_module_load(dump) {
        trace.info("It contains ModuleInfo::load");
        let verdict = bytecode::check_code_block_traced(dump, trace);
        if verdict.kind == VerdictKind::NotVulnerable {
            trace.info("=> NOT vulnerable");
        }
        verdict
    } else {
        trace.info("It does NOT contain ModuleInfo::load");
        sdk::check_sdk_version_traced(dump, trace)
    }
}
