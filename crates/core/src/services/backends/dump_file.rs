use std::fs;
use std::path::Path;

use crate::services::disassembler::{Disassembler, DisassemblyError};

/// Reads disassembly that was produced ahead of time and saved as text.
pub struct DumpFileBackend;

impl Disassembler for DumpFileBackend {
    fn disassemble(&self, binary: &Path) -> Result<String, DisassemblyError> {
        if !binary.is_file() {
            return Err(DisassemblyError::MissingBinary(binary.to_path_buf()));
        }
        let bytes = fs::read(binary)
            .map_err(|source| DisassemblyError::Io { path: binary.to_path_buf(), source })?;
        Ok(String::from_utf8_lossy(&bytes).to_string())
    }

    fn name(&self) -> &'static str {
        "dump-file"
    }
}
