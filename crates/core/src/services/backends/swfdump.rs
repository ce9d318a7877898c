use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::DisassemblerConfig;
use crate::services::disassembler::{Disassembler, DisassemblyError};

/// Shells out to the Flex SDK `swfdump` (ABC mode) and captures stdout.
///
/// Any tool works as long as it prints the same text layout, e.g.
/// `java -cp swfutils.jar flash.swf.tools.SwfxPrinter -abc`.
#[derive(Debug, Clone)]
pub struct SwfDumpBackend {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl SwfDumpBackend {
    pub fn new(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self { program: program.into(), args }
    }

    pub fn from_config(config: &DisassemblerConfig) -> Self {
        Self::new(config.resolve_program(), config.args.clone())
    }
}

impl Disassembler for SwfDumpBackend {
    fn disassemble(&self, binary: &Path) -> Result<String, DisassemblyError> {
        if !binary.is_file() {
            return Err(DisassemblyError::MissingBinary(binary.to_path_buf()));
        }

        let program = self.program.display().to_string();
        log::debug!("running {} {} {}", program, self.args.join(" "), binary.display());
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(binary)
            .output()
            .map_err(|source| DisassemblyError::Spawn { program: program.clone(), source })?;

        if !output.status.success() {
            return Err(DisassemblyError::Failed {
                program,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn name(&self) -> &'static str {
        "swfdump"
    }
}
