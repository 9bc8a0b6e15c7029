//! `chainreg init` command — write a starter configuration file.
//!
//! The template is rendered from the built-in chain registry, so its
//! `default_chain` value and network comments always match what `resolve`
//! will actually return.

use std::fs;
use std::path::Path;

use chainreg::config::generate_default_config;
use chainreg::error::Error;
use chainreg::registry::ChainRegistry;

/// Execute the `init` command.
///
/// Renders the configuration template for the built-in registry and writes
/// it to `output`, then reports the default chain and the registered
/// networks it templated. An existing file is left untouched unless `force`
/// is set.
///
/// # Errors
///
/// Returns an error when `output` exists without `--force`, or when the
/// template cannot be written.
#[allow(clippy::print_stderr)]
pub fn run(output: &Path, force: bool) -> Result<(), Error> {
    if !force && output.exists() {
        return Err(Error::config(format!(
            "refusing to overwrite '{}' (pass --force to replace it)",
            output.display()
        )));
    }

    let registry = ChainRegistry::builtin();
    fs::write(output, generate_default_config(&registry))
        .map_err(|e| Error::config_with(format!("failed to write '{}'", output.display()), e))?;

    let default = registry.default_chain();
    let networks: Vec<_> = registry.iter().map(|c| c.chain_name).collect();
    eprintln!(
        "Wrote {}: default chain {} ({}); registered networks: {}",
        output.display(),
        default.chain_id,
        default.chain_name,
        networks.join(", ")
    );
    Ok(())
}
