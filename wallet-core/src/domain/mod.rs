//! Domain layer - aggregates and value objects
//!
//! This module contains the domain logic and business rules for the wallet system.
//! It follows Domain-Driven Design principles: aggregates guard their own
//! invariants and report expected failures as values.

pub mod aggregate_root;
pub mod entities;
pub mod value_objects;

// Re-export domain components
pub use aggregate_root::*;
pub use entities::*;
pub use value_objects::*;
