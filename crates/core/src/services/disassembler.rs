use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::DisassemblerConfig;
use crate::services::backends::{DumpFileBackend, SwfDumpBackend};

#[derive(Debug, Error)]
pub enum DisassemblyError {
    #[error("Binary not found at {0}")]
    MissingBinary(PathBuf),
    #[error("Disassembler not found: {0}")]
    MissingBackend(String),
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with {status}: {stderr}")]
    Failed { program: String, status: String, stderr: String },
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Produces disassembly text for a binary.
///
/// Output is treated as opaque text by the pipeline; only the marker lines
/// described in [`crate::analysis::markers`] are interpreted.
pub trait Disassembler: Send + Sync {
    fn disassemble(&self, binary: &Path) -> Result<String, DisassemblyError>;
    fn name(&self) -> &'static str;
}

/// Registry for disassemblers; callers select by name.
#[derive(Default)]
pub struct DisassemblerRegistry {
    backends: HashMap<String, Box<dyn Disassembler>>,
}

impl DisassemblerRegistry {
    pub fn new() -> Self {
        Self { backends: HashMap::new() }
    }

    pub fn register<D: Disassembler + 'static>(&mut self, backend: D) -> &mut Self {
        self.backends.insert(backend.name().to_string(), Box::new(backend));
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn Disassembler> {
        self.backends.get(name).map(|b| &**b)
    }

    /// Look up a backend, failing with the list of known names.
    pub fn resolve(&self, name: &str) -> Result<&dyn Disassembler, DisassemblyError> {
        self.get(name).ok_or_else(|| {
            DisassemblyError::MissingBackend(format!(
                "{name} (available: {})",
                self.names().join(", ")
            ))
        })
    }

    /// Return a sorted list of registered backend names for error messages/help.
    pub fn names(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.backends.keys().cloned().collect();
        keys.sort();
        keys
    }
}

/// Registry with the subprocess dumper (configured from `config`) and the
/// pre-dumped text reader.
pub fn default_registry(config: &DisassemblerConfig) -> DisassemblerRegistry {
    let mut registry = DisassemblerRegistry::new();
    registry.register(SwfDumpBackend::from_config(config));
    registry.register(DumpFileBackend);
    registry
}
