use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of one analyzed dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictKind {
    Vulnerable,
    NotVulnerable,
    /// Not enough information to decide; reported as not vulnerable.
    Indeterminate,
}

impl VerdictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictKind::Vulnerable => "vulnerable",
            VerdictKind::NotVulnerable => "not_vulnerable",
            VerdictKind::Indeterminate => "indeterminate",
        }
    }
}

/// Which stage of the pipeline settled the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Basis {
    /// Application-type gate (not a Flex application).
    ApplicationType,
    /// SDK version heuristic; a vulnerable result here is a likely finding.
    SdkVersion,
    /// Bytecode signature match inside `ModuleInfo::load`.
    Bytecode,
}

/// Input anomalies that degrade a verdict instead of failing the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anomaly {
    #[error("malformed SDK version string '{0}'")]
    MalformedVersionString(String),
    #[error("no SDK version record in dump")]
    MissingProductInfo,
    #[error("ModuleInfo::load reported present but no block start found")]
    MissingStartMarker,
    #[error("empty dump")]
    EmptyDump,
}

/// Verdict plus the short rationale shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub kind: VerdictKind,
    pub basis: Basis,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anomaly: Option<Anomaly>,
}

impl Verdict {
    pub fn vulnerable(basis: Basis, rationale: impl Into<String>) -> Self {
        Self { kind: VerdictKind::Vulnerable, basis, rationale: rationale.into(), anomaly: None }
    }

    pub fn not_vulnerable(basis: Basis, rationale: impl Into<String>) -> Self {
        Self { kind: VerdictKind::NotVulnerable, basis, rationale: rationale.into(), anomaly: None }
    }

    pub fn indeterminate(basis: Basis, rationale: impl Into<String>, anomaly: Anomaly) -> Self {
        Self {
            kind: VerdictKind::Indeterminate,
            basis,
            rationale: rationale.into(),
            anomaly: Some(anomaly),
        }
    }

    pub fn with_anomaly(mut self, anomaly: Anomaly) -> Self {
        self.anomaly = Some(anomaly);
        self
    }

    /// Reporting view: only `Vulnerable` counts, `Indeterminate` does not.
    pub fn is_vulnerable(&self) -> bool {
        self.kind == VerdictKind::Vulnerable
    }
}
