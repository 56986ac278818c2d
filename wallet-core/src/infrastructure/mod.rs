//! Infrastructure layer - configuration and logging
//!
//! This module wires the wallet core into its host process: runtime
//! configuration and logger setup.

pub mod config;
pub mod logger;

// Re-export infrastructure components
pub use self::config::*;
pub use logger::*;
