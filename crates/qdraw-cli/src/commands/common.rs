//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use qdraw_ir::Circuit;
use qdraw_plot::DrawConfig;

/// Load a circuit from a JSON file.
pub fn load_circuit(path: &str) -> Result<Circuit> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let ext = path_obj.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext.to_lowercase().as_str() {
        "json" | "" => {
            Circuit::from_json(&source).map_err(|e| anyhow::anyhow!("Parse error: {e}"))
        }
        other => anyhow::bail!("Unsupported circuit format: '.{other}' (expected .json)"),
    }
}

/// Built-in style registry and symbols, optionally extended from user files.
pub fn load_config(styles_file: Option<&str>, symbols_file: Option<&str>) -> Result<DrawConfig> {
    let mut config = DrawConfig::builtin().context("Built-in drawing tables are corrupt")?;

    if let Some(path) = styles_file {
        config = config
            .with_styles_file(path)
            .with_context(|| format!("Failed to load styles from {path}"))?;
    }
    if let Some(path) = symbols_file {
        config = config
            .with_symbols_file(path)
            .with_context(|| format!("Failed to load symbols from {path}"))?;
    }

    Ok(config)
}
