//! Configuration loading and default template generation.
//!
//! This module provides:
//!
//! - [`Config`] — wallet-connect project metadata, default-chain override,
//!   and locale bootstrap settings (matches the TOML structure).
//! - [`load_config`] — reads, parses, and validates a TOML configuration file.
//! - [`generate_default_config`] — produces a commented TOML template.
//!
//! # Configuration File Format
//!
//! ```toml
//! default_chain = 97
//!
//! [wallet]
//! project_id = "$WALLETCONNECT_PROJECT_ID"
//! name = "easyfaucet"
//! url = "https://easyfaucet.example.org"
//!
//! [locale]
//! initial = "en"
//! ```

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::Error;
use crate::locale::Locale;
use crate::registry::ChainRegistry;

/// Wallet-connect project metadata (the `[wallet]` table).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    /// WalletConnect Cloud project id. Supports `$VAR` / `${VAR}`
    /// environment references.
    pub project_id: String,
    /// App name shown in wallet prompts.
    pub name: String,
    /// App description shown in wallet prompts.
    #[serde(default)]
    pub description: String,
    /// Canonical app URL.
    pub url: String,
    /// Icon URLs shown in wallet prompts.
    #[serde(default)]
    pub icons: Vec<String>,
}

/// Locale bootstrap settings (the `[locale]` table).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Saved locale preference; unset means detect from the environment.
    #[serde(default)]
    pub initial: Option<String>,
}

/// Top-level application configuration (matches the TOML structure).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Chain id handed to the registry resolver at startup; unset or
    /// unregistered values resolve to the built-in default network.
    #[serde(default)]
    pub default_chain: Option<u64>,
    /// Wallet-connect project metadata.
    pub wallet: WalletConfig,
    /// Locale bootstrap settings.
    #[serde(default)]
    pub locale: LocaleConfig,
}

impl Config {
    /// Parses the configured initial locale, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured tag names no registered locale.
    pub fn initial_locale(&self) -> Result<Option<Locale>, Error> {
        self.locale.initial.as_deref().map(Locale::from_str).transpose()
    }
}

/// Load configuration from a TOML file at the given path.
///
/// The `project_id` value may reference an environment variable (`$VAR` or
/// `${VAR}`); references are resolved before validation.
///
/// # Errors
///
/// Returns an error if the file cannot be resolved, read, or parsed, or if
/// validation fails (unset project id, malformed URL, unknown locale tag).
pub fn load_config(path: &Path, registry: &ChainRegistry) -> Result<Config, Error> {
    let config_path = path.canonicalize().map_err(|e| {
        Error::config(format!(
            "failed to resolve config path '{}': {e}",
            path.display()
        ))
    })?;
    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::config(format!(
            "failed to read config file '{}': {e}",
            config_path.display()
        ))
    })?;
    let mut config: Config = toml::from_str(&content).map_err(|e| {
        Error::config(format!(
            "failed to parse TOML config '{}': {e}",
            config_path.display()
        ))
    })?;

    config.wallet.project_id = resolve_env(&config.wallet.project_id)?;
    validate(&config, registry)?;
    Ok(config)
}

fn validate(config: &Config, registry: &ChainRegistry) -> Result<(), Error> {
    if config.wallet.project_id.trim().is_empty() {
        return Err(Error::config("wallet.project_id is not set"));
    }
    Url::parse(&config.wallet.url).map_err(|e| {
        Error::config_with(format!("invalid wallet.url '{}'", config.wallet.url), e)
    })?;
    for icon in &config.wallet.icons {
        Url::parse(icon)
            .map_err(|e| Error::config_with(format!("invalid wallet icon URL '{icon}'"), e))?;
    }
    config.initial_locale()?;

    if let Some(id) = config.default_chain
        && !registry.is_supported(id)
    {
        // Lookups fall back silently; surface the likely typo here instead
        // of failing startup.
        #[cfg(feature = "telemetry")]
        tracing::warn!(
            chain_id = id,
            "default_chain is not registered, lookups will use {}",
            registry.default_chain().chain_name
        );
        #[cfg(not(feature = "telemetry"))]
        let _ = id;
    }
    Ok(())
}

/// Expand an environment reference in a config value.
///
/// `"${NAME}"` and `"$NAME"` read the named variable; any other string,
/// including `$` followed by non-identifier characters, passes through
/// unchanged.
fn resolve_env(value: &str) -> Result<String, Error> {
    let var_name = if let Some(inner) = value.strip_prefix("${").and_then(|v| v.strip_suffix('}')) {
        inner
    } else if let Some(name) = value.strip_prefix('$') {
        if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Ok(value.to_owned());
        }
        name
    } else {
        return Ok(value.to_owned());
    };
    std::env::var(var_name).map_err(|_| {
        Error::config(format!(
            "env var '{var_name}' is not set (referenced as '{value}')"
        ))
    })
}

/// Generate a commented TOML configuration template for `registry`.
///
/// The `default_chain` value and the network list in the leading comments
/// are rendered from the registry contents, so the template only names
/// chains that actually resolve.
#[must_use]
pub fn generate_default_config(registry: &ChainRegistry) -> String {
    use std::fmt::Write as _;

    let default = registry.default_chain();
    let mut out = String::from(
        "# easyfaucet chain/app configuration\n\n\
         # Chain id handed to the registry resolver at startup. Registered networks:\n",
    );
    for config in registry.iter() {
        let _ = writeln!(out, "#   {:>10}  {}", config.chain_id, config.chain_name);
    }
    let _ = writeln!(
        out,
        "# Unset or unregistered values resolve to {}.\ndefault_chain = {}",
        default.chain_name, default.chain_id
    );
    out.push_str(
        r#"
# ── Wallet-connect project metadata ─────────────────────────────────
# project_id supports environment variable references: "$VAR" or "${VAR}"

[wallet]
project_id = "$WALLETCONNECT_PROJECT_ID"
name = "easyfaucet"
description = "easyfaucet web"
url = "https://easyfaucet.example.org"
icons = ["https://avatars.githubusercontent.com/u/179229932?s=200&v=4"]

# ── Locale bootstrap ────────────────────────────────────────────────
# Unset means detect from LC_ALL / LC_MESSAGES / LANG; "en" and "zh"
# are the registered locales.

[locale]
initial = "en"
"#,
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Config {
        toml::from_str(raw).unwrap()
    }

    #[test]
    fn default_template_parses_and_validates() {
        // load_config resolves the env reference before validation;
        // substitute a literal here.
        let registry = ChainRegistry::builtin();
        let raw =
            generate_default_config(&registry).replace("$WALLETCONNECT_PROJECT_ID", "test-project");
        let config = parse(&raw);
        assert_eq!(config.default_chain, Some(97));
        assert_eq!(config.initial_locale().unwrap(), Some(Locale::En));
        validate(&config, &registry).unwrap();
    }

    #[test]
    fn template_reflects_registry_contents() {
        use crate::registry::SEPOLIA;

        let registry = ChainRegistry::new([SEPOLIA], SEPOLIA.chain_id).unwrap();
        let raw = generate_default_config(&registry);
        assert!(raw.contains("default_chain = 11155111"));
        assert!(raw.contains("Sepolia"));
        assert!(!raw.contains("BSC Testnet"));
    }

    #[test]
    fn load_config_runs_the_full_pipeline() {
        let registry = ChainRegistry::builtin();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let raw =
            generate_default_config(&registry).replace("$WALLETCONNECT_PROJECT_ID", "test-project");
        std::fs::write(&path, raw).unwrap();

        let config = load_config(&path, &registry).unwrap();
        assert_eq!(config.wallet.project_id, "test-project");
        assert_eq!(config.default_chain, Some(97));
    }

    #[test]
    fn load_config_error_names_the_missing_path() {
        let err = load_config(
            Path::new("/nonexistent/chainreg-config.toml"),
            &ChainRegistry::builtin(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/chainreg-config.toml"));
    }

    #[test]
    fn empty_project_id_is_rejected() {
        let config = parse(
            r#"
            [wallet]
            project_id = ""
            name = "easyfaucet"
            url = "https://example.org"
            "#,
        );
        assert!(validate(&config, &ChainRegistry::builtin()).is_err());
    }

    #[test]
    fn malformed_wallet_url_is_rejected() {
        let config = parse(
            r#"
            [wallet]
            project_id = "p"
            name = "easyfaucet"
            url = "not a url"
            "#,
        );
        assert!(validate(&config, &ChainRegistry::builtin()).is_err());
    }

    #[test]
    fn unknown_locale_tag_is_rejected() {
        let config = parse(
            r#"
            [wallet]
            project_id = "p"
            name = "easyfaucet"
            url = "https://example.org"

            [locale]
            initial = "fr"
            "#,
        );
        assert!(validate(&config, &ChainRegistry::builtin()).is_err());
    }

    #[test]
    fn unregistered_default_chain_passes_validation() {
        // Deliberate: unknown ids fall back at lookup time, they are only
        // warned about here.
        let config = parse(
            r#"
            default_chain = 1

            [wallet]
            project_id = "p"
            name = "easyfaucet"
            url = "https://example.org"
            "#,
        );
        validate(&config, &ChainRegistry::builtin()).unwrap();
    }

    #[test]
    fn env_reference_passthrough_and_errors() {
        assert_eq!(resolve_env("literal-id").unwrap(), "literal-id");
        // '$' followed by non-identifier characters is a literal
        assert_eq!(resolve_env("$ not a var").unwrap(), "$ not a var");
        assert_eq!(resolve_env("${UNCLOSED").unwrap(), "${UNCLOSED");
        assert!(resolve_env("$CHAINREG_TEST_UNSET_VAR").is_err());
        assert!(resolve_env("${CHAINREG_TEST_UNSET_VAR}").is_err());
    }
}
