//! chainreg CLI
//!
//! Inspect the built-in chain registry and manage the app configuration
//! file consumed by the easyfaucet web stack.
//!
//! ```sh
//! chainreg init            # Generate default config.toml
//! chainreg chains          # List registered chains
//! chainreg resolve 97      # Resolve a chain id (with default fallback)
//! chainreg check           # Validate a config file
//! ```

mod cmd;

use clap::Parser;
use cmd::{Cli, Commands};

#[allow(clippy::print_stderr)]
fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "telemetry")]
    chainreg::telemetry::init_tracing("info");

    let result = match cli.command {
        Commands::Init { output, force } => cmd::init::run(&output, force),
        Commands::Chains { json } => cmd::chains::run(json),
        Commands::Resolve { chain_id, json } => cmd::resolve::run(chain_id, json),
        Commands::Check { config } => cmd::check::run(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
