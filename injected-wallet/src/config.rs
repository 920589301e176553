//! Configuration loading and default template generation.
//!
//! This module provides:
//!
//! - [`Config`] — the command-line front-end's settings.
//! - [`load_config`] — reads and parses a TOML configuration file.
//! - [`generate_default_config`] — produces a commented TOML template.
//!
//! # Configuration File Format
//!
//! ```toml
//! log_level = "info"
//!
//! [chains."0x89"]
//! name = "Polygon Mainnet"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chain::ChainNames;
use crate::error::Error;

/// Front-end configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Log filter used when neither `RUST_LOG` nor `--log-level` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Extra chain names keyed by hex chain id.
    #[serde(default)]
    pub chains: BTreeMap<String, ChainEntry>,
}

/// One `[chains."<id>"]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChainEntry {
    /// Display name.
    pub name: String,
}

impl Config {
    /// Chain-name lookup layering the configured names over the registry.
    #[must_use]
    pub fn chain_names(&self) -> ChainNames {
        self.chains
            .iter()
            .map(|(chain_id, entry)| (chain_id, entry.name.clone()))
            .collect()
    }

    /// Log filter to fall back on: the command-line level if given, else the
    /// configured one. `RUST_LOG` still overrides both at subscriber setup.
    #[must_use]
    pub fn log_level<'a>(&'a self, cli: Option<&'a str>) -> Option<&'a str> {
        cli.or(self.log_level.as_deref())
    }
}

/// Load configuration from a TOML file at the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be resolved, read, or parsed.
pub fn load_config(path: &Path) -> Result<Config, Error> {
    let config_path = path.canonicalize().map_err(|e| {
        Error::config_with(
            format!("failed to resolve config path '{}'", path.display()),
            e,
        )
    })?;
    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::config_with(
            format!("failed to read config file '{}'", config_path.display()),
            e,
        )
    })?;
    let config: Config = toml::from_str(&content).map_err(|e| {
        Error::config_with(
            format!("failed to parse TOML config '{}'", config_path.display()),
            e,
        )
    })?;
    tracing::debug!(path = %config_path.display(), chains = config.chains.len(), "config loaded");
    Ok(config)
}

/// Generate a default TOML configuration template.
#[must_use]
pub fn generate_default_config() -> String {
    String::from(
        r#"# injected-wallet configuration

# Log filter when neither RUST_LOG nor --log-level is set.
log_level = "info"

# ── Extra chain names ────────────────────────────────────────────────
# Key format: hex chain id as reported by eth_chainId (case-insensitive).
# Built-in names for 0x1, 0x3, 0x4, 0x5 and 0x2a always take precedence.

[chains."0x89"]
name = "Polygon Mainnet"

[chains."0xaa36a7"]
name = "Sepolia Test Network"
"#,
    )
}
