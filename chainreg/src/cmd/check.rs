//! `chainreg check` command — load and validate a configuration file.

use std::path::Path;

use chainreg::config::load_config;
use chainreg::error::Error;
use chainreg::locale::{self, Locale};
use chainreg::registry::ChainRegistry;

/// Execute the `check` command.
///
/// Loads the configuration file and reports the effective default chain and
/// the locale the app would start with.
///
/// # Errors
///
/// Returns an error if configuration loading or validation fails.
#[allow(clippy::print_stderr)]
pub fn run(config_path: &Path) -> Result<(), Error> {
    // Load .env variables before resolving $VAR references
    dotenvy::dotenv().ok();

    let registry = ChainRegistry::builtin();
    let config = load_config(config_path, &registry)?;

    let chain = registry.current(config.default_chain);
    let detected = locale::detect_system();
    let effective = Locale::resolve(config.locale.initial.as_deref(), detected.as_deref());

    eprintln!("Config OK: {}", config_path.display());
    eprintln!("  wallet project  {}", config.wallet.name);
    eprintln!("  default chain   {} ({})", chain.chain_id, chain.chain_name);
    eprintln!("  initial locale  {effective}");
    Ok(())
}
