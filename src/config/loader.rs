//! Config file loading

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Defaults applied before CLI options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Extension suffixes to skip, leading dot included (e.g. ".pyc").
    pub ignored_extensions: Vec<String>,
    /// Exact file or directory names to skip.
    pub ignored_names: Vec<String>,
}

pub fn load_config(working_dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(working_dir),
    };

    let Some(config_file) = discovered else {
        return Ok(Config::default());
    };

    let content = fs::read_to_string(&config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;

    let ext = config_file.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    // An explicitly given file must parse; an auto-discovered one falls back
    // to defaults with a warning.
    let parsed = match ext.as_str() {
        "toml" => match parse_toml_config(&content, &config_file) {
            Ok(cfg) => cfg,
            Err(e) => {
                if config_path_provided {
                    return Err(e);
                }
                tracing::warn!(
                    "Failed to parse auto-discovered config {}: {}",
                    config_file.display(),
                    e
                );
                return Ok(Config::default());
            }
        },
        "yaml" | "yml" => match parse_yaml_config(&content, &config_file) {
            Ok(cfg) => cfg,
            Err(e) => {
                if config_path_provided {
                    return Err(e);
                }
                tracing::warn!(
                    "Failed to parse auto-discovered config {}: {}",
                    config_file.display(),
                    e
                );
                return Ok(Config::default());
            }
        },
        other => {
            let err = anyhow::anyhow!(
                "Unsupported config extension '.{}' for file {}",
                other,
                config_file.display()
            );
            if config_path_provided {
                return Err(err);
            }
            tracing::warn!("{}", err);
            return Ok(Config::default());
        }
    };

    Ok(parsed)
}

/// Parse TOML config, supporting a nested [tree-tally] section so the file
/// can live inside a larger tool config.
fn parse_toml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: toml::Value = toml::from_str(content)
        .with_context(|| format!("Invalid TOML syntax: {}", config_file.display()))?;

    let config_val = if let Some(nested) = raw.get("tree-tally") { nested.clone() } else { raw };

    config_val.try_into().with_context(|| format!("Invalid TOML config: {}", config_file.display()))
}

/// Parse YAML config, supporting a nested tree-tally section.
fn parse_yaml_config(content: &str, config_file: &Path) -> Result<Config> {
    let raw: serde_yaml::Value = serde_yaml::from_str(content)
        .with_context(|| format!("Invalid YAML syntax: {}", config_file.display()))?;

    let config_val = if let Some(nested) = raw.get("tree-tally") { nested.clone() } else { raw };

    serde_yaml::from_value(config_val)
        .with_context(|| format!("Invalid YAML config: {}", config_file.display()))
}

fn discover_config(working_dir: &Path) -> Option<PathBuf> {
    let candidates = [
        "tree-tally.toml",
        ".tree-tally.toml",
        "tree-tally.yml",
        ".tree-tally.yml",
        "tree-tally.yaml",
        ".tree-tally.yaml",
    ];

    for candidate in candidates {
        let path = working_dir.join(candidate);
        if path.exists() {
            return Some(path);
        }
    }

    None
}
