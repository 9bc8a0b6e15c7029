//! CLI definitions and command implementations for chainreg.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod chains;
pub mod check;
pub mod init;
pub mod resolve;

/// chainreg — chain registry inspection and app configuration tooling.
#[derive(Debug, Parser)]
#[command(name = "chainreg")]
#[command(version, about, long_about = None)]
pub struct Cli {
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

    /// List every registered chain.
    Chains {
        /// Emit JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Resolve a chain id to its configuration (unknown ids fall back).
    Resolve {
        /// Chain id to resolve; omitted means the default network.
        chain_id: Option<u64>,

        /// Emit JSON instead of a table.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Load and validate a configuration file.
    Check {
        /// Path to the TOML configuration file.
        #[arg(short, long, env = "CONFIG", default_value = "config.toml")]
        config: PathBuf,
    },
}
