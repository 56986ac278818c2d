//! Wallet Core
//!
//! Wallet aggregate for a domain-driven backend: a balance owned by a user
//! that changes only through deposits and withdrawals and never goes
//! negative.
//!
//! ## Architecture
//!
//! - **Domain**: the `Wallet` aggregate, the `EntityId` value object and the
//!   `AggregateRoot` capability
//! - **Infrastructure**: configuration and logger setup
//! - **Shared**: common types, constants, and errors
//!
//! ## Usage
//!
//! ```rust
//! use wallet_core::{CreateWalletProps, EntityId, Wallet, WalletNotEnoughBalanceError};
//!
//! # fn main() -> Result<(), wallet_core::WalletError> {
//! let mut wallet = Wallet::create(CreateWalletProps { user_id: EntityId::generate() });
//!
//! wallet.deposit(100)?;
//! assert_eq!(wallet.withdraw(40)?, Ok(()));
//! assert_eq!(wallet.withdraw(1000)?, Err(WalletNotEnoughBalanceError));
//! assert_eq!(wallet.balance(), 60);
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export domain entities
pub use crate::domain::{
    AggregateRoot, CreateWalletProps, EntityId, Wallet, WalletInfo, WalletProps, WithdrawResult,
};

// Re-export infrastructure
pub use crate::infrastructure::{init_logger, WalletCoreConfig};

// Re-export shared types
pub use crate::shared::error::{ArgumentOutOfRangeError, WalletError, WalletNotEnoughBalanceError};
pub use crate::shared::types::{Amount, Balance};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Load configuration and initialize logging
pub fn init() -> Result<WalletCoreConfig, WalletError> {
    let config = WalletCoreConfig::load()?;
    init_logger(&config);
    log::debug!("{} {} initialized", NAME, VERSION);
    Ok(config)
}
