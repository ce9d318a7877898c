//! parrot-core
//!
//! Core library for detecting Flex applications vulnerable to CVE-2011-2461
//! (APSB11-25), the `resourceModuleURLs` same-origin-policy bypass.
//!
//! Detection works on the text disassembly of a SWF's ActionScript bytecode.
//! This crate holds the dump model, the classification pipeline, the adapters
//! that obtain disassembly from an external dumper, and batch scanning, so that
//! every frontend (CLI, scanner plugins, tests) shares the same logic.

pub mod analysis;
pub mod config;
pub mod model;
pub mod services;

pub use analysis::{analyze, analyze_text, analyze_with_trace, Analysis, Verdict, VerdictKind};
pub use model::{CodeBlock, DisassemblyDump};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
