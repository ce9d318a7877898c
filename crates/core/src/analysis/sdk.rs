//! Fallback classification from the Flex SDK version recorded in the SWF.
//!
//! Used when the dump has no `ModuleInfo::load` body to inspect. A vulnerable
//! result is only a likely finding: the bytecode itself is never checked.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::markers::{version_attribute, Marker, VersionAttr};
use crate::analysis::trace::Trace;
use crate::analysis::verdict::{Anomaly, Basis, Verdict};
use crate::model::DisassemblyDump;

/// Flex SDK version as (major, minor, patch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SdkVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdkVersionError {
    #[error("non-digit '{found}' at position {position} of SDK version '{raw}'")]
    NonDigit { raw: String, position: usize, found: char },
}

impl SdkVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch }
    }

    /// Parse a version string one character per component.
    ///
    /// Dots are removed first, then the first three characters are read as the
    /// major, minor and patch digits. Missing positions are 0 and anything past
    /// the third character is ignored, so `"4.10.0"` reads as 4.1.0.
    pub fn parse(raw: &str) -> Result<Self, SdkVersionError> {
        let digits: Vec<char> = raw.chars().filter(|c| *c != '.').collect();
        let mut parts = [0u32; 3];
        for (position, slot) in parts.iter_mut().enumerate() {
            if let Some(&found) = digits.get(position) {
                *slot = found.to_digit(10).ok_or_else(|| SdkVersionError::NonDigit {
                    raw: raw.to_string(),
                    position,
                    found,
                })?;
            }
        }
        Ok(Self::new(parts[0], parts[1], parts[2]))
    }

    /// Affected releases: the whole 3.x line and 4.x up to 4.5.1.
    ///
    /// 4.4.x is not in the affected set; minor 4 only matches neither arm.
    pub fn is_affected(&self) -> bool {
        match self.major {
            0..=2 => false,
            3 => true,
            4 => self.minor < 4 || (self.minor == 5 && self.patch <= 1),
            _ => false,
        }
    }
}

impl FromStr for SdkVersion {
    type Err = SdkVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SdkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Classify a dump by the SDK version in its first `<ProductInfo ` record.
pub fn check_sdk_version_vulnerable(dump: &DisassemblyDump) -> Verdict {
    check_sdk_version_traced(dump, &mut Trace::new())
}

pub fn check_sdk_version_traced(dump: &DisassemblyDump, trace: &mut Trace) -> Verdict {
    let Some(line) = dump.lines().iter().find(|line| Marker::ProductInfo.found_in(line)) else {
        return unidentified(trace, "no ProductInfo record in dump", Anomaly::MissingProductInfo);
    };

    let raw = match version_attribute(line) {
        VersionAttr::Value(raw) => raw,
        VersionAttr::MissingAttribute => {
            return unidentified(
                trace,
                "ProductInfo record has no version attribute",
                Anomaly::MissingProductInfo,
            );
        }
        VersionAttr::Unterminated => {
            return unidentified(
                trace,
                "ProductInfo version attribute is not terminated",
                Anomaly::MalformedVersionString(line.trim().to_string()),
            );
        }
    };

    trace.info(format!("It was compiled with Flex SDK {raw}"));

    let version = match SdkVersion::parse(raw) {
        Ok(version) => version,
        Err(err) => {
            return unidentified(
                trace,
                &err.to_string(),
                Anomaly::MalformedVersionString(raw.to_string()),
            );
        }
    };

    if version.is_affected() {
        trace.info("=> LIKELY vulnerable");
        Verdict::vulnerable(
            Basis::SdkVersion,
            format!("likely vulnerable: compiled with affected Flex SDK {raw}"),
        )
    } else {
        trace.info("=> Code pattern NOT found. Not vulnerable");
        Verdict::not_vulnerable(
            Basis::SdkVersion,
            format!("Flex SDK {raw} is outside the affected range"),
        )
    }
}

fn unidentified(trace: &mut Trace, detail: &str, anomaly: Anomaly) -> Verdict {
    trace.warn("Unable to identify the SDK version");
    Verdict::indeterminate(
        Basis::SdkVersion,
        format!("unable to identify SDK version: {detail}"),
        anomaly,
    )
}
