//! Core data model: the disassembly text being classified and the code block
//! carved out of it.
//!
//! Both types are read-only views. A dump is built once per analyzed binary and
//! every stage of the pipeline only borrows it.

use std::fmt;

/// Full disassembler output for one binary, split into lines.
///
/// Lines are split on `\n`, `\r\n` and a lone `\r`; terminators are not part of
/// the stored lines and a trailing terminator does not produce an empty line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisassemblyDump {
    lines: Vec<String>,
}

impl DisassemblyDump {
    /// Build a dump from raw disassembler text.
    pub fn from_text(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut rest = text;
        while !rest.is_empty() {
            match rest.find(|c| c == '\r' || c == '\n') {
                Some(idx) => {
                    lines.push(rest[..idx].to_string());
                    let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                    rest = &rest[idx + skip..];
                }
                None => {
                    lines.push(rest.to_string());
                    break;
                }
            }
        }
        Self { lines }
    }

    /// Build a dump from already-split lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { lines: lines.into_iter().map(Into::into).collect() }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the dump has no lines at all (empty input).
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether any line contains `needle`. Markers never span lines, so this is
    /// equivalent to a search over the concatenated text.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl From<&str> for DisassemblyDump {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<String> for DisassemblyDump {
    fn from(text: String) -> Self {
        Self::from_text(&text)
    }
}

/// A contiguous run of dump lines, from the block-start line through the
/// block-end line (inclusive).
///
/// When the dump ends before an end marker is seen the block runs to the last
/// line and `closed` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeBlock<'a> {
    /// Zero-based index of the first block line within the dump.
    pub start_line: usize,
    /// Lines of the block, start and end markers included.
    pub lines: &'a [String],
    /// Whether the end marker terminated the block.
    pub closed: bool,
}

impl<'a> CodeBlock<'a> {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consecutive line pairs, in order.
    pub fn line_pairs(&self) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.lines.windows(2).map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }

    /// Block text joined with `\n`, each line terminated.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for line in self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for CodeBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
