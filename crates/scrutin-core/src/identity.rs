//! # Participant Identity
//!
//! Newtype wrapper for the identity of anyone interacting with a ballot:
//! the controller, registered voters, and rejected strangers alike.
//!
//! The workflow treats identities as opaque — it compares them for equality
//! and uses them as registry keys, nothing more. Identity *generation*
//! belongs to the caller (test harness, CLI session); the core only mints
//! fresh UUIDs as a convenience for those callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error parsing a participant identity from its string form.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// The string is not a valid participant identity.
    #[error("invalid participant id {0:?}")]
    Invalid(String),
}

/// Unique identifier for a workflow participant.
///
/// Used for the controller, for registered voters, and for callers that turn
/// out to be neither. Two participants are the same participant exactly when
/// their identifiers are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub Uuid);

impl ParticipantId {
    /// Generate a new random participant identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ParticipantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "participant:{}", self.0)
    }
}

impl FromStr for ParticipantId {
    type Err = IdentityError;

    /// Parse from either the bare UUID or the prefixed `participant:<uuid>`
    /// display form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.strip_prefix("participant:").unwrap_or(s);
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| IdentityError::Invalid(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_distinct() {
        assert_ne!(ParticipantId::new(), ParticipantId::new());
    }

    #[test]
    fn test_display_has_prefix() {
        let id = ParticipantId::new();
        let s = id.to_string();
        assert!(s.starts_with("participant:"));
        assert!(s.contains(&id.as_uuid().to_string()));
    }

    #[test]
    fn test_from_str_bare_uuid() {
        let id = ParticipantId::new();
        let parsed: ParticipantId = id.as_uuid().to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_from_str_prefixed() {
        let id = ParticipantId::new();
        let parsed: ParticipantId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_from_str_garbage_rejected() {
        assert!("not-a-uuid".parse::<ParticipantId>().is_err());
        assert!("participant:".parse::<ParticipantId>().is_err());
        assert!("".parse::<ParticipantId>().is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let id = ParticipantId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: ParticipantId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
