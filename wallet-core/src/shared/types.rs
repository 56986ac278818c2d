//! Shared primitive types for wallet operations

/// Monetary amount in minor currency units (e.g. cents).
///
/// Signed so that a malformed negative input reaches the invariant check
/// instead of being rejected by the type system.
pub type Amount = i64;

/// Wallet balance, always in the same unit as [`Amount`]
pub type Balance = Amount;
