//! Constants for the wallet core
//!
//! This module contains all constants used throughout the wallet core.

use crate::shared::types::Balance;

// Wallet constants
pub const INITIAL_BALANCE: Balance = 0;
pub const MIN_BALANCE: Balance = 0;

// Invariant messages
pub const NEGATIVE_BALANCE_MESSAGE: &str = "Wallet balance cannot be less than 0";
pub const BALANCE_OVERFLOW_MESSAGE: &str = "Wallet balance exceeds the representable range";
pub const TIMESTAMP_ORDER_MESSAGE: &str = "Wallet cannot be updated before it was created";

// Configuration constants
pub const ENV_PREFIX: &str = "WALLET_CORE";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_TIMESTAMPS: bool = true;
