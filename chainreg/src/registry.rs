//! Chain registry: immutable per-network contract configuration and lookup.
//!
//! This module centralises everything related to supported networks:
//!
//! - **Records** — [`ChainConfig`], one per network (contract addresses and
//!   deploy block), with the built-in [`BSC_TESTNET`] and [`SEPOLIA`] entries.
//! - **Registry** — [`ChainRegistry`], a chain-id keyed map built once at
//!   startup and passed by reference to consumers.
//!
//! Lookups never fail: an unknown or absent chain id resolves to the default
//! network. Downstream callers rely on always receiving a record.

use std::collections::BTreeMap;

use alloy_primitives::{Address, address};
use serde::Serialize;

use crate::error::Error;

/// Per-network contract configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainConfig {
    /// EIP-155 chain identifier, unique registry key.
    pub chain_id: u64,
    /// Human-readable network label.
    pub chain_name: &'static str,
    /// Beacon proxy contract address on this network.
    pub beacon_address: Address,
    /// Factory contract address on this network.
    pub factory_address: Address,
    /// Block height at which the contracts were deployed.
    pub deploy_block: u64,
}

/// BSC Testnet deployment.
pub const BSC_TESTNET: ChainConfig = ChainConfig {
    chain_id: 97,
    chain_name: "BSC Testnet",
    beacon_address: address!("0xc633E74171C61Ede8913d5C7fC2F16bad3290E7A"),
    factory_address: address!("0x00c706EaC85100E127A087966F0bc73a5b2ceaf0"),
    deploy_block: 71_805_318,
};

/// Ethereum Sepolia deployment.
pub const SEPOLIA: ChainConfig = ChainConfig {
    chain_id: 11_155_111,
    chain_name: "Sepolia",
    beacon_address: address!("0x6D239B2127Fba527f4a280c1780aa74FC3Add7E0"),
    factory_address: address!("0x8C7270053166EA8D8d7A5F7bee73c30b26B7049F"),
    deploy_block: 9_594_114,
};

/// Chain resolved when a caller supplies no chain id, or an unknown one.
pub const DEFAULT_CHAIN_ID: u64 = BSC_TESTNET.chain_id;

const BUILTIN_CHAINS: [ChainConfig; 2] = [BSC_TESTNET, SEPOLIA];

/// Immutable chain-id keyed registry of [`ChainConfig`] records.
///
/// Constructed once at startup; all operations are pure reads, so shared
/// references are safe across threads without synchronisation.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chains: BTreeMap<u64, ChainConfig>,
    default_chain: u64,
}

impl ChainRegistry {
    /// Builds a registry from an explicit set of chains.
    ///
    /// # Errors
    ///
    /// Returns an error if two entries share a chain id or if
    /// `default_chain` is not among the entries.
    pub fn new(
        chains: impl IntoIterator<Item = ChainConfig>,
        default_chain: u64,
    ) -> Result<Self, Error> {
        let mut map = BTreeMap::new();
        for config in chains {
            if map.insert(config.chain_id, config).is_some() {
                return Err(Error::chain(format!(
                    "duplicate chain id {}",
                    config.chain_id
                )));
            }
        }
        if !map.contains_key(&default_chain) {
            return Err(Error::chain(format!(
                "default chain {default_chain} is not registered"
            )));
        }
        Ok(Self {
            chains: map,
            default_chain,
        })
    }

    /// Builds the registry of built-in deployments, defaulting to BSC Testnet.
    #[must_use]
    pub fn builtin() -> Self {
        let chains = BUILTIN_CHAINS.iter().map(|c| (c.chain_id, *c)).collect();
        Self {
            chains,
            default_chain: DEFAULT_CHAIN_ID,
        }
    }

    /// Looks up the configuration for `chain_id`, `None` if unregistered.
    #[must_use]
    pub fn get(&self, chain_id: u64) -> Option<&ChainConfig> {
        self.chains.get(&chain_id)
    }

    /// Resolves the configuration for an optional chain id.
    ///
    /// A missing or unregistered id resolves to the default network rather
    /// than an error; callers always receive a record.
    #[must_use]
    pub fn current(&self, chain_id: Option<u64>) -> &ChainConfig {
        chain_id
            .and_then(|id| self.chains.get(&id))
            .unwrap_or_else(|| self.default_chain())
    }

    /// Returns the default chain configuration.
    #[must_use]
    pub fn default_chain(&self) -> &ChainConfig {
        // Constructors guarantee the default id is a key.
        &self.chains[&self.default_chain]
    }

    /// Returns whether `chain_id` is registered.
    #[must_use]
    pub fn is_supported(&self, chain_id: u64) -> bool {
        self.chains.contains_key(&chain_id)
    }

    /// Returns all registered chain ids, ascending.
    #[must_use]
    pub fn supported_ids(&self) -> Vec<u64> {
        self.chains.keys().copied().collect()
    }

    /// Iterates over all registered configurations, ascending by chain id.
    pub fn iter(&self) -> impl Iterator<Item = &ChainConfig> {
        self.chains.values()
    }
}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve_to_matching_record() {
        let registry = ChainRegistry::builtin();
        for id in registry.supported_ids() {
            let config = registry.get(id).unwrap();
            assert_eq!(config.chain_id, id);
        }
    }

    #[test]
    fn unknown_id_yields_none() {
        assert!(ChainRegistry::builtin().get(1).is_none());
    }

    #[test]
    fn current_without_id_is_default() {
        let registry = ChainRegistry::builtin();
        assert_eq!(registry.current(None), &BSC_TESTNET);
    }

    #[test]
    fn current_with_unknown_id_falls_back_to_default() {
        let registry = ChainRegistry::builtin();
        assert_eq!(registry.current(Some(999_999)), registry.current(None));
    }

    #[test]
    fn current_with_known_id_matches_get() {
        let registry = ChainRegistry::builtin();
        assert_eq!(registry.current(Some(SEPOLIA.chain_id)), &SEPOLIA);
        assert_eq!(
            registry.current(Some(97)),
            registry.get(97).unwrap()
        );
    }

    #[test]
    fn supported_matches_builtin_set() {
        let registry = ChainRegistry::builtin();
        assert!(registry.is_supported(97));
        assert!(!registry.is_supported(1));
        assert_eq!(registry.supported_ids(), vec![97, 11_155_111]);
    }

    #[test]
    fn duplicate_chain_id_is_rejected() {
        assert!(ChainRegistry::new([BSC_TESTNET, BSC_TESTNET], 97).is_err());
    }

    #[test]
    fn unregistered_default_is_rejected() {
        assert!(ChainRegistry::new([SEPOLIA], 97).is_err());
    }
}
