use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// File name `init-config` writes when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "parrotng.json";

/// Environment variable naming the disassembler executable when the config
/// does not.
pub const SWFDUMP_ENV: &str = "PARROTNG_SWFDUMP";

/// How to invoke the external disassembler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisassemblerConfig {
    /// Registered backend name (`swfdump` or `dump-file`).
    pub backend: String,
    /// Executable path; falls back to `PARROTNG_SWFDUMP`, then `swfdump` on PATH.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
    /// Arguments placed before the binary path.
    pub args: Vec<String>,
}

impl Default for DisassemblerConfig {
    fn default() -> Self {
        Self { backend: "swfdump".to_string(), program: None, args: vec!["-abc".to_string()] }
    }
}

impl DisassemblerConfig {
    pub fn resolve_program(&self) -> PathBuf {
        self.program
            .as_ref()
            .map(PathBuf::from)
            .or_else(|| env::var_os(SWFDUMP_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("swfdump"))
    }
}

/// Serializable scan configuration, stored as JSON or YAML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub disassembler: DisassemblerConfig,
    /// File extensions picked up when scanning directories (no leading dot).
    pub extensions: Vec<String>,
    /// Descend into subdirectories when scanning a directory.
    pub recursive: bool,
    /// Worker threads for batch scans; `None` uses every core.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            disassembler: DisassemblerConfig::default(),
            extensions: vec!["swf".to_string()],
            recursive: false,
            jobs: None,
        }
    }
}

impl ScanConfig {
    /// Case-insensitive extension filter used for directory scans.
    pub fn matches_extension(&self, path: &Path) -> bool {
        has_extension(path, &self.extensions)
    }
}

/// Whether `path` ends in one of `extensions` (case-insensitive, leading dot optional).
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions.iter().any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Pick a format from a file extension (`json`, `yaml`, `yml`).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        Self::from_name(ext)
            .ok_or_else(|| anyhow!("Unsupported config format for {}", path.display()))
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "json" => Some(ConfigFormat::Json),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }
}

/// Load a scan config from disk. Missing fields take their defaults.
pub fn load_config(path: &Path) -> Result<ScanConfig> {
    let format = ConfigFormat::from_path(path)?;
    let body = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;
    let config: ScanConfig = match format {
        ConfigFormat::Json => serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse config JSON at {}", path.display()))?,
        ConfigFormat::Yaml => serde_yaml::from_str(&body)
            .with_context(|| format!("Failed to parse config YAML at {}", path.display()))?,
    };
    Ok(config)
}

/// Serialize a config in the requested format.
pub fn render_config(config: &ScanConfig, format: ConfigFormat) -> Result<String> {
    Ok(match format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    })
}
