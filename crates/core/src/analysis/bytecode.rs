//! Primary classification from the `ModuleInfo::load` method body.

use crate::analysis::markers::{
    classify_line, LineEvent, SECURITY_DOMAIN_ASSIGNMENT, SECURITY_DOMAIN_PATCH,
};
use crate::analysis::trace::Trace;
use crate::analysis::verdict::{Anomaly, Basis, Verdict};
use crate::model::{CodeBlock, DisassemblyDump};

/// Carve the first `ModuleInfo::load` block out of the dump.
///
/// Capture starts at the first block-start line and ends, inclusive, at the
/// first block-end line after it. Without an end marker the block runs to the
/// end of the dump.
pub fn extract_code_block(dump: &DisassemblyDump) -> Option<CodeBlock<'_>> {
    let lines = dump.lines();
    let start = lines.iter().position(|line| classify_line(line) == LineEvent::BlockStart)?;
    let end = lines[start + 1..]
        .iter()
        .position(|line| classify_line(line) == LineEvent::BlockEnd)
        .map(|offset| start + 1 + offset);

    Some(match end {
        Some(end) => CodeBlock { start_line: start, lines: &lines[start..=end], closed: true },
        None => CodeBlock { start_line: start, lines: &lines[start..], closed: false },
    })
}

/// Classify a dump by the instructions in its `ModuleInfo::load` block.
pub fn check_code_block_vulnerable(dump: &DisassemblyDump) -> Verdict {
    check_code_block_traced(dump, &mut Trace::new())
}

pub fn check_code_block_traced(dump: &DisassemblyDump, trace: &mut Trace) -> Verdict {
    let Some(block) = extract_code_block(dump) else {
        trace.warn("ModuleInfo::load block not found; disassembler output may have changed format");
        return Verdict::indeterminate(
            Basis::Bytecode,
            "ModuleInfo::load block could not be extracted",
            Anomaly::MissingStartMarker,
        );
    };
    if !block.closed {
        log::debug!(
            "ModuleInfo::load block starting at line {} has no trailer; using {} lines to end of dump",
            block.start_line + 1,
            block.len()
        );
    }

    if !SECURITY_DOMAIN_ASSIGNMENT.found_in(&block) {
        trace.info("It was compiled with a 'recent' Flex SDK");
        return Verdict::not_vulnerable(
            Basis::Bytecode,
            "compiled with a recent Flex SDK that never had the issue",
        );
    }
    trace.info("It was compiled with an old SDK version");

    if SECURITY_DOMAIN_PATCH.found_in(&block) {
        trace.info("=> It was PATCHED");
        return Verdict::not_vulnerable(
            Basis::Bytecode,
            "ModuleInfo::load carries the APSB11-25 patch",
        );
    }

    trace.info("It was not patched");
    trace.info("=> VULNERABLE!");
    Verdict::vulnerable(
        Basis::Bytecode,
        "ModuleInfo::load assigns currentDomain to securityDomain without the patch",
    )
}
