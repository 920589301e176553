//! CLI definitions and command implementations.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

pub mod chains;
pub mod init;
pub mod name;
pub mod request;
pub mod typed_data;

/// Injected wallet provider toolkit: chain names and EIP-1193 / EIP-712 shapes.
#[derive(Debug, Parser)]
#[command(name = "injected-wallet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log filter used when `RUST_LOG` is not set (e.g. `debug`).
    #[arg(long, global = true, env = "LOG_LEVEL")]
    #[cfg_attr(not(feature = "telemetry"), allow(dead_code))]
    pub log_level: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a default TOML configuration file.
    Init {
        /// Output path for the configuration file.
        #[arg(short, long, default_value = "config.toml")]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// List the built-in chains.
    Chains,

    /// Print the display name for a hex chain id.
    Name {
        /// Chain id as reported by `eth_chainId`, e.g. `0x1`.
        chain_id: String,

        /// TOML configuration with extra chain names.
        #[arg(short, long, env = "CONFIG")]
        config: Option<PathBuf>,
    },

    /// Summarise an EIP-712 typed-data JSON document.
    TypedData {
        /// Path to the JSON document.
        file: PathBuf,

        /// TOML configuration with extra chain names.
        #[arg(short, long, env = "CONFIG")]
        config: Option<PathBuf>,
    },

    /// Print the EIP-1193 request argument for a method.
    Request {
        /// JSON-RPC method name, e.g. `eth_requestAccounts`.
        method: String,

        /// Parameters as a JSON array or object.
        params: Option<String>,
    },
}

impl Commands {
    /// Configuration file the command reads, if it takes one.
    pub fn config_path(&self) -> Option<&Path> {
        match self {
            Self::Name { config, .. } | Self::TypedData { config, .. } => config.as_deref(),
            Self::Init { .. } | Self::Chains | Self::Request { .. } => None,
        }
    }
}
