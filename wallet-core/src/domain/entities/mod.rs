//! Domain entities
//!
//! This module contains the aggregates that represent the business concepts
//! of the wallet system.

pub mod wallet;

// Re-export entities
pub use wallet::*;
