//! Unified error types for chainreg.

use thiserror::Error;

/// Top-level error type for the chainreg library and CLI.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be resolved, read, parsed, or validated.
    #[error("config: {0}")]
    Config(String),

    /// Chain registry construction failed.
    #[error("chain: {0}")]
    Chain(String),

    /// Locale tag could not be interpreted.
    #[error("locale: {0}")]
    Locale(String),
}

impl Error {
    /// Creates an [`Error::Config`] from a message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an [`Error::Config`] from a message and an underlying error.
    pub fn config_with(msg: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Config(format!("{}: {err}", msg.into()))
    }

    /// Creates an [`Error::Chain`] from a message.
    pub fn chain(msg: impl Into<String>) -> Self {
        Self::Chain(msg.into())
    }

    /// Creates an [`Error::Locale`] from a message.
    pub fn locale(msg: impl Into<String>) -> Self {
        Self::Locale(msg.into())
    }
}
