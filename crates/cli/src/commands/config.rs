use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use parrot_core::config::{render_config, ConfigFormat, ScanConfig, DEFAULT_CONFIG_FILE};

/// Write a default scan config.
///
/// The format comes from `format`, else from the path's extension, else JSON.
/// An existing file is only replaced with `force`.
pub fn init_config_command(
    path: Option<&Path>,
    format: Option<&str>,
    force: bool,
) -> Result<PathBuf> {
    let format = match format {
        Some(name) => ConfigFormat::from_name(name)
            .ok_or_else(|| anyhow!("Unsupported config format '{}'", name))?,
        None => path.and_then(|p| ConfigFormat::from_path(p).ok()).unwrap_or(ConfigFormat::Json),
    };
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match format {
            ConfigFormat::Json => PathBuf::from(DEFAULT_CONFIG_FILE),
            ConfigFormat::Yaml => Path::new(DEFAULT_CONFIG_FILE).with_extension("yaml"),
        },
    };

    if path.exists() && !force {
        return Err(anyhow!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }

    let body = render_config(&ScanConfig::default(), format)?;
    fs::write(&path, body)
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    println!("Wrote config: {}", path.display());

    Ok(path)
}
