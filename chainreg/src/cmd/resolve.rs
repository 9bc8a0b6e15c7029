//! `chainreg resolve` command — resolve a chain id to its configuration.
//!
//! Unknown or omitted ids resolve to the default network, matching what the
//! wallet bootstrap does at runtime.

use chainreg::error::Error;
use chainreg::registry::ChainRegistry;

/// Execute the `resolve` command.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
#[allow(clippy::print_stdout)]
pub fn run(chain_id: Option<u64>, json: bool) -> Result<(), Error> {
    let registry = ChainRegistry::builtin();
    let config = registry.current(chain_id);

    if let Some(id) = chain_id
        && !registry.is_supported(id)
    {
        #[cfg(feature = "telemetry")]
        tracing::warn!(chain_id = id, "unknown chain id, falling back to {}", config.chain_name);
        #[cfg(not(feature = "telemetry"))]
        let _ = id;
    }

    if json {
        let rendered = serde_json::to_string_pretty(config)
            .map_err(|e| Error::chain(format!("JSON encoding failed: {e}")))?;
        println!("{rendered}");
    } else {
        println!("{}  {}", config.chain_id, config.chain_name);
        println!("  beacon   {}", config.beacon_address);
        println!("  factory  {}", config.factory_address);
        println!("  deployed at block {}", config.deploy_block);
    }
    Ok(())
}
