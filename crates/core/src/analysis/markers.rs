//! Literal markers emitted by the SWF disassembler (`swfdump -abc`).
//!
//! Every string the pipeline matches against lives here. Detection is coupled
//! to the exact spelling and whitespace of the dumper's output: instruction
//! lines are an 8-space indent, the mnemonic padded to 14 columns, a literal tab,
//! then the operand. A dumper that formats differently breaks matching.

use crate::model::CodeBlock;

/// Structural markers searched for in dump lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// FlashVar handled only by the Flex framework's resource manager.
    FlexApplication,
    /// Method signature of `mx.modules::ModuleInfo.load` in dumper naming.
    ModuleLoad,
    /// Trailer closing the method body listing.
    BlockEnd,
    /// SWF metadata record naming the compiler.
    ProductInfo,
}

impl Marker {
    pub const fn literal(self) -> &'static str {
        match self {
            Marker::FlexApplication => "resourceModuleURLs",
            Marker::ModuleLoad => "ModuleInfo:::load(",
            Marker::BlockEnd => "0 Traits Entries",
            Marker::ProductInfo => "<ProductInfo ",
        }
    }

    pub fn found_in(self, line: &str) -> bool {
        line.contains(self.literal())
    }
}

/// Attribute holding the SDK version inside a `<ProductInfo ...>` record.
pub const VERSION_ATTRIBUTE: &str = "version='";

/// Outcome of reading the `version='...'` attribute from a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionAttr<'a> {
    /// Raw attribute value, quotes excluded.
    Value(&'a str),
    MissingAttribute,
    /// `version='` present but never closed on the same line.
    Unterminated,
}

/// Extract the `version='...'` attribute value from a single line.
pub fn version_attribute(line: &str) -> VersionAttr<'_> {
    let Some(start) = line.find(VERSION_ATTRIBUTE) else {
        return VersionAttr::MissingAttribute;
    };
    let rest = &line[start + VERSION_ATTRIBUTE.len()..];
    match rest.find('\'') {
        Some(end) => VersionAttr::Value(&rest[..end]),
        None => VersionAttr::Unterminated,
    }
}

/// Structural event a single dump line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent<'a> {
    BlockStart,
    BlockEnd,
    SdkVersion(VersionAttr<'a>),
    FlexMarker,
    Other,
}

/// Classify one line. A line carrying several markers resolves in the order
/// block start, block end, SDK version, Flex marker.
pub fn classify_line(line: &str) -> LineEvent<'_> {
    if Marker::ModuleLoad.found_in(line) {
        LineEvent::BlockStart
    } else if Marker::BlockEnd.found_in(line) {
        LineEvent::BlockEnd
    } else if Marker::ProductInfo.found_in(line) {
        LineEvent::SdkVersion(version_attribute(line))
    } else if Marker::FlexApplication.found_in(line) {
        LineEvent::FlexMarker
    } else {
        LineEvent::Other
    }
}

/// Two instructions that must appear on consecutive lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionPair {
    pub first: &'static str,
    pub second: &'static str,
}

impl InstructionPair {
    /// True when some line ends with `first` and the next line starts with
    /// `second`, i.e. `first` + line break + `second` occurs in the block text.
    pub fn found_in(&self, block: &CodeBlock<'_>) -> bool {
        block.line_pairs().any(|(a, b)| a.ends_with(self.first) && b.starts_with(self.second))
    }
}

/// Unchecked assignment of the loader's security domain from the current
/// domain, compiled in by affected SDKs.
pub const SECURITY_DOMAIN_ASSIGNMENT: InstructionPair = InstructionPair {
    first: "        getproperty   \t:currentDomain",
    second: "        setproperty   \t:securityDomain",
};

/// Instruction pair introduced by the APSB11-25 patch tool.
pub const SECURITY_DOMAIN_PATCH: InstructionPair =
    InstructionPair { first: "        pushfalse     \t", second: "        pushtrue" };

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn module_load_wins_over_other_markers() {
        assert_eq!(
            classify_line("function mx.modules:ModuleInfo:::load(0 Traits Entries"),
            LineEvent::BlockStart
        );
    }

    #[test]
    fn product_info_line_carries_version() {
        let line = "    <ProductInfo product='Flex' edition='' version='4.5.1' build='21328'/>";
        assert_eq!(classify_line(line), LineEvent::SdkVersion(VersionAttr::Value("4.5.1")));
    }

    #[test]
    fn version_attribute_reports_missing_and_unterminated() {
        assert_eq!(version_attribute("<ProductInfo product='Flex'/>"), VersionAttr::MissingAttribute);
        assert_eq!(version_attribute("<ProductInfo version='3.0.0"), VersionAttr::Unterminated);
        assert_eq!(version_attribute("<ProductInfo version=''/>"), VersionAttr::Value(""));
    }

    #[test]
    fn instruction_pair_needs_adjacent_lines() {
        let adjacent = vec![
            "        getproperty   \t:currentDomain".to_string(),
            "        setproperty   \t:securityDomain".to_string(),
        ];
        let block = CodeBlock { start_line: 0, lines: &adjacent, closed: false };
        assert!(SECURITY_DOMAIN_ASSIGNMENT.found_in(&block));

        let split = vec![
            "        getproperty   \t:currentDomain".to_string(),
            "        nop".to_string(),
            "        setproperty   \t:securityDomain".to_string(),
        ];
        let block = CodeBlock { start_line: 0, lines: &split, closed: false };
        assert!(!SECURITY_DOMAIN_ASSIGNMENT.found_in(&block));
    }

    #[test]
    fn instruction_pair_is_whitespace_sensitive() {
        let spaces = vec![
            "        getproperty    :currentDomain".to_string(),
            "        setproperty    :securityDomain".to_string(),
        ];
        let block = CodeBlock { start_line: 0, lines: &spaces, closed: false };
        assert!(!SECURITY_DOMAIN_ASSIGNMENT.found_in(&block));
    }
}
