//! `chainreg chains` command — list every registered chain.

use chainreg::error::Error;
use chainreg::registry::ChainRegistry;

/// Execute the `chains` command.
///
/// Prints one line per registered chain, marking the default network with
/// `*`. With `--json`, emits the full records as a JSON array.
///
/// # Errors
///
/// Returns an error if JSON encoding fails.
#[allow(clippy::print_stdout)]
pub fn run(json: bool) -> Result<(), Error> {
    let registry = ChainRegistry::builtin();

    if json {
        let entries: Vec<_> = registry.iter().collect();
        let rendered = serde_json::to_string_pretty(&entries)
            .map_err(|e| Error::chain(format!("JSON encoding failed: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }

    let default_id = registry.default_chain().chain_id;
    for config in registry.iter() {
        let marker = if config.chain_id == default_id { "*" } else { " " };
        println!(
            "{marker} {:>10}  {:<12}  beacon={}  factory={}  deploy_block={}",
            config.chain_id,
            config.chain_name,
            config.beacon_address,
            config.factory_address,
            config.deploy_block
        );
    }
    Ok(())
}
