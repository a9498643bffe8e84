//! Configuration file support for pom-recommender.
//!
//! Provides YAML-based configuration through `pom-recommender.config.yml`
//! files: the schema, loading and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "pom-recommender.config.yml";

/// Top-level configuration file schema.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Corpus file or directory. Relative paths are resolved against the
    /// directory holding the config file.
    pub corpus: Option<PathBuf>,
    pub format: Option<String>,
    pub neighbors: Option<usize>,
    pub exclude_coordinates: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, if any
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(OutputFormat::from_str)
            .transpose()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let mut config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    if let (Some(corpus), Some(base)) = (config.corpus.as_ref(), path.parent()) {
        if corpus.is_relative() {
            config.corpus = Some(base.join(corpus));
        }
    }

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.neighbors == Some(0) {
        bail!(
            "Invalid config: neighbors must be at least 1.\n\n\
             💡 Hint: The default is 2 nearest corpus manifests."
        );
    }

    if config
        .corpus
        .as_ref()
        .is_some_and(|corpus| corpus.as_os_str().is_empty())
    {
        bail!("Invalid config: corpus must not be empty.");
    }

    if let Some(ref patterns) = config.exclude_coordinates {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!(
                    "Invalid config: exclude_coordinates[{}] must not be empty.\n\n\
                     💡 Hint: Use a group:artifact pattern such as \"junit:*\".",
                    i
                );
            }
        }
    }

    config.output_format()?;
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
