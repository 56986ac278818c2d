//! Aggregate root capability
//!
//! An aggregate root owns its identity, holds a props bag, and is compared by
//! identity rather than by state.

use chrono::{DateTime, Utc};

use crate::domain::value_objects::EntityId;

/// Capabilities shared by every aggregate root in the domain layer
pub trait AggregateRoot {
    /// State carried by the aggregate
    type Props: Clone;

    /// Identity assigned at creation
    fn id(&self) -> &EntityId;

    /// Read-only view of the current state
    fn props(&self) -> &Self::Props;

    fn created_at(&self) -> DateTime<Utc>;

    fn updated_at(&self) -> DateTime<Utc>;

    /// Detached copy of the current state
    fn props_copy(&self) -> Self::Props {
        self.props().clone()
    }

    /// Two aggregates are the same entity when their identities match
    fn same_identity<A: AggregateRoot + ?Sized>(&self, other: &A) -> bool {
        self.id() == other.id()
    }
}
