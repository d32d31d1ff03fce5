//! Configuration system for datadig.
//!
//! This module provides the configuration structure for the `datadig` binary
//! with sensible defaults and support for serialization/deserialization via
//! serde. Configuration is loaded from a TOML file and overridden by
//! command-line arguments.
//!
//! # Example
//!
//! ```
//! use datadig::config::Config;
//! use datadig::file::writer::OutputFormat;
//!
//! let config = Config::default();
//! assert_eq!(config.output_format, OutputFormat::Yaml);
//!
//! let custom = Config {
//!     output_format: OutputFormat::Json,
//!     ..Config::default()
//! };
//! assert!(!custom.pretty);
//! ```

use crate::file::writer::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for the datadig binary.
///
/// # Fields
///
/// * `output_format` - Format results are printed in (default: yaml)
/// * `pretty` - Pretty-print JSON output (default: false)
/// * `strings` - Treat every accessor token as a string key (default: false)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Format results are printed in
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,

    /// Never turn integer-looking tokens into indices
    #[serde(default)]
    pub strings: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::default(),
            pretty: false,
            strings: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/datadig/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("datadig");
            path.push("config.toml");
            path
        })
    }

    /// Parses configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Invalid configuration")
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to the defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents).unwrap_or_else(|err| {
                log::warn!("ignoring {}: {:#}", path.display(), err);
                Self::default()
            }),
            Err(err) => {
                log::warn!("cannot read {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to `path`.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        Ok(())
    }
}
