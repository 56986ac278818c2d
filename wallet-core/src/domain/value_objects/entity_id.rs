//! Unique identity value object
//!
//! Wraps a UUID so that wallet and user identities cannot be mixed up with
//! arbitrary strings. Serialized as the plain hyphenated UUID string;
//! deserialization goes through [`EntityId::parse`], so a stored nil or
//! malformed id never becomes a live identity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::WalletError;

/// Globally unique identifier of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(Uuid);

impl EntityId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an identifier from its string form
    pub fn parse(value: &str) -> Result<Self, WalletError> {
        if value.is_empty() {
            return Err(WalletError::validation("Identifier cannot be empty"));
        }
        if value.trim() != value {
            return Err(WalletError::validation(
                "Identifier cannot contain surrounding whitespace",
            ));
        }

        Self::try_from(Uuid::parse_str(value)?)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl TryFrom<Uuid> for EntityId {
    type Error = WalletError;

    fn try_from(uuid: Uuid) -> Result<Self, Self::Error> {
        if uuid.is_nil() {
            return Err(WalletError::validation("Identifier cannot be the nil UUID"));
        }
        Ok(Self(uuid))
    }
}

impl TryFrom<String> for EntityId {
    type Error = WalletError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0.to_string()
    }
}

impl From<EntityId> for Uuid {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl AsRef<Uuid> for EntityId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for EntityId {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_unique() {
        let first = EntityId::generate();
        let second = EntityId::generate();

        assert_ne!(first, second);
        assert!(!first.as_uuid().is_nil());
    }

    #[test]
    fn test_parse_roundtrips_display() {
        let id = EntityId::generate();
        let parsed: EntityId = id.to_string().parse().expect("Failed to parse generated id");

        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(EntityId::parse(""), Err(WalletError::Validation(_))));
        assert!(matches!(EntityId::parse("not-a-uuid"), Err(WalletError::Validation(_))));
        assert!(matches!(
            EntityId::parse(" 3fa85f64-5717-4562-b3fc-2c963f66afa6"),
            Err(WalletError::Validation(_))
        ));
        assert!(matches!(
            EntityId::parse("00000000-0000-0000-0000-000000000000"),
            Err(WalletError::Validation(_))
        ));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = EntityId::parse("3fa85f64-5717-4562-b3fc-2c963f66afa6")
            .expect("Failed to parse id");
        let json = serde_json::to_string(&id).expect("Failed to serialize id");

        assert_eq!(json, "\"3fa85f64-5717-4562-b3fc-2c963f66afa6\"");

        let restored: EntityId = serde_json::from_str(&json).expect("Failed to deserialize id");
        assert_eq!(restored, id);
    }

    #[test]
    fn test_deserialize_rejects_invalid_ids() {
        let nil = serde_json::from_str::<EntityId>("\"00000000-0000-0000-0000-000000000000\"");
        let padded = serde_json::from_str::<EntityId>("\" 3fa85f64-5717-4562-b3fc-2c963f66afa6\"");
        let malformed = serde_json::from_str::<EntityId>("\"not-a-uuid\"");

        assert!(nil.is_err());
        assert!(padded.is_err());
        assert!(malformed.is_err());
    }

    #[test]
    fn test_try_from_uuid_rejects_nil() {
        assert!(matches!(EntityId::try_from(Uuid::nil()), Err(WalletError::Validation(_))));

        let uuid = Uuid::new_v4();
        let id = EntityId::try_from(uuid).expect("Failed to wrap uuid");
        assert_eq!(Uuid::from(id), uuid);
    }
}
