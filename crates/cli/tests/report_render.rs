use std::path::PathBuf;

use parrot_core::analysis::analyze_text;
use parrot_core::services::scan::{ScanOutcome, ScanSummary};
use parrotng::report::{render_outcome, render_summary, FileReport, ScanReport, CVE_2011_2461};

const VULNERABLE_DUMP: &str = concat!(
    "var resourceModuleURLs:String\n",
    "function mx.modules:ModuleInfo:::load(Object,Object,Object,mx.core:IFlexModuleFactory)::void\n",
    "        getproperty   \t:currentDomain\n",
    "        setproperty   \t:securityDomain\n",
    "0 Traits Entries\n",
);

fn outcome(text: &str) -> ScanOutcome {
    ScanOutcome {
        path: PathBuf::from("/does/not/exist/app.swf"),
        backend: "dump-file".into(),
        analysis: Some(analyze_text(text)),
        error: None,
    }
}

#[test]
fn vulnerable_outcome_renders_trace_and_issue() {
    let rendered = render_outcome(&outcome(VULNERABLE_DUMP));
    assert!(rendered.starts_with("[*] Analyzing /does/not/exist/app.swf\n"));
    assert!(rendered.contains("[*] Flex application detected\n"));
    assert!(rendered.contains("[*] => VULNERABLE!\n"));
    assert!(rendered.contains("Result: VULNERABLE - "));
    assert!(rendered.contains(CVE_2011_2461.name));
    assert!(rendered.contains("[High]"));
}

#[test]
fn warnings_render_with_bang_prefix() {
    let rendered = render_outcome(&outcome("resourceModuleURLs"));
    assert!(rendered.contains("[!] Unable to identify the SDK version\n"));
    assert!(rendered.contains("Result: indeterminate (not vulnerable)"));
    assert!(!rendered.contains("Remediation"));
}

#[test]
fn errored_outcome_renders_error_only() {
    let errored = ScanOutcome {
        path: PathBuf::from("broken.swf"),
        backend: "swfdump".into(),
        analysis: None,
        error: Some("swfdump exited with exit status: 1: bad header".into()),
    };
    let rendered = render_outcome(&errored);
    assert_eq!(
        rendered,
        "[*] Analyzing broken.swf\n[!] swfdump exited with exit status: 1: bad header\n"
    );
}

#[test]
fn file_report_attaches_issue_only_when_vulnerable() {
    let vulnerable = FileReport::from_outcome(&outcome(VULNERABLE_DUMP));
    assert!(vulnerable.issue.is_some());
    assert!(vulnerable.sha256.is_none());
    assert_eq!(vulnerable.trace.len(), 5);

    let clean = FileReport::from_outcome(&outcome(""));
    assert!(clean.issue.is_none());
}

#[test]
fn scan_report_serializes_summary_and_verdicts() {
    let report = ScanReport::new(&[outcome(VULNERABLE_DUMP), outcome("")]);
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["tool"], "parrotng");
    assert_eq!(value["summary"]["vulnerable"], 1);
    assert_eq!(value["summary"]["not_vulnerable"], 1);
    assert_eq!(value["files"][0]["verdict"]["kind"], "vulnerable");
    assert_eq!(value["files"][0]["verdict"]["basis"], "bytecode");
    assert_eq!(value["files"][0]["issue"]["id"], "CVE-2011-2461");
    assert_eq!(value["files"][1]["verdict"]["anomaly"], "empty_dump");
}

#[test]
fn summary_line_lists_every_count() {
    let summary =
        ScanSummary { scanned: 4, vulnerable: 1, not_vulnerable: 1, indeterminate: 1, errors: 1 };
    assert_eq!(
        render_summary(&summary),
        "Scanned 4 file(s): 1 vulnerable, 1 not vulnerable, 1 indeterminate, 1 error(s)"
    );
}
