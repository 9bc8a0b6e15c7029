//! Multi-chain contract registry and app bootstrap configuration.
//!
//! `chainreg` backs the easyfaucet web stack with:
//!
//! - [`registry`] — immutable chain-id keyed
//!   [`ChainRegistry`](registry::ChainRegistry) with silent-default-fallback
//!   lookups.
//! - [`config`] — TOML app configuration (wallet-connect metadata, default
//!   chain, locale bootstrap) with env-reference resolution.
//! - [`locale`] — start-up locale resolution (saved → detected → fallback).
//! - [`error`] — unified [`Error`](error::Error) type.

pub mod config;
pub mod error;
pub mod locale;
pub mod registry;
#[cfg(feature = "telemetry")]
pub mod telemetry;
