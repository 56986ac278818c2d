//! Error handling for the wallet core
//!
//! This module defines the error types used throughout the wallet core.
//! The entity reports two kinds of failure that callers must be able to tell
//! apart at compile time: a broken invariant ([`ArgumentOutOfRangeError`]) and
//! an expected business outcome ([`WalletNotEnoughBalanceError`]).

use thiserror::Error;

/// Raised when a value would leave the accepted range of the aggregate.
///
/// Signals a bug or unvalidated input. The entity never handles it itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Argument out of range: {message}")]
pub struct ArgumentOutOfRangeError {
    message: String,
}

impl ArgumentOutOfRangeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Withdrawal exceeds the available balance.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[error("Wallet has not enough balance")]
pub struct WalletNotEnoughBalanceError;

impl WalletNotEnoughBalanceError {
    /// Stable identifier for outward-facing error payloads
    pub const CODE: &'static str = "WALLET.NOT_ENOUGH_BALANCE";

    pub fn code(&self) -> &'static str {
        Self::CODE
    }
}

/// Wallet error type
#[derive(Error, Debug, Clone)]
pub enum WalletError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    ArgumentOutOfRange(#[from] ArgumentOutOfRangeError),

    #[error(transparent)]
    NotEnoughBalance(#[from] WalletNotEnoughBalanceError),
}

impl WalletError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<config::ConfigError> for WalletError {
    fn from(err: config::ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

impl From<uuid::Error> for WalletError {
    fn from(err: uuid::Error) -> Self {
        Self::validation(format!("Invalid UUID: {}", err))
    }
}
