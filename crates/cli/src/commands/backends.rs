use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use parrot_core::config::DisassemblerConfig;
use parrot_core::services::disassembler::default_registry;

use crate::commands::util::load_config_or_default;

#[derive(Debug, Serialize)]
pub struct BackendInfo {
    pub name: String,
    pub description: String,
    pub default: bool,
}

/// Describe the registered disassemblers for the given config.
pub fn backend_infos(config: &DisassemblerConfig) -> Vec<BackendInfo> {
    let registry = default_registry(config);
    registry
        .names()
        .into_iter()
        .map(|name| {
            let description = match name.as_str() {
                "swfdump" => format!(
                    "Runs {} {} <file> and analyzes its output",
                    config.resolve_program().display(),
                    config.args.join(" ")
                ),
                "dump-file" => "Reads disassembly text saved ahead of time".to_string(),
                other => format!("Disassembler '{}'", other),
            };
            let default = name == config.backend;
            BackendInfo { name, description, default }
        })
        .collect()
}

/// List available disassemblers known to this binary.
pub fn list_disassemblers_command(config_path: Option<&Path>, json: bool) -> Result<()> {
    let config = load_config_or_default(config_path)?;
    let entries = backend_infos(&config.disassembler);

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Disassemblers:");
    for entry in entries {
        let marker = if entry.default { " (default)" } else { "" };
        println!("- {}{}: {}", entry.name, marker, entry.description);
    }

    Ok(())
}
