//! # Voter Registry
//!
//! Maps participant identity to a voter record. Records are created once per
//! identity by the controller while voters registration is open, and never
//! deleted. The vote fields are flipped exactly once, by that voter's own
//! vote.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use scrutin_core::ParticipantId;

use crate::error::BallotError;

/// A single voter's record.
///
/// Looking up an identity that was never registered yields the default
/// record (`is_registered: false`) rather than an error — absence and
/// non-registration are the same condition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    /// Whether this identity has been admitted by the controller.
    pub is_registered: bool,
    /// Whether this voter has cast their single vote.
    pub has_voted: bool,
    /// The proposal index voted for. Meaningful only when `has_voted`.
    pub voted_proposal_id: u32,
}

/// The registry of admitted voters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VoterRegistry {
    voters: HashMap<ParticipantId, Voter>,
}

impl VoterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit an identity, creating its voter record.
    ///
    /// # Errors
    ///
    /// `AlreadyRegistered` if the identity already holds a record.
    pub fn register(&mut self, target: ParticipantId) -> Result<(), BallotError> {
        if self.is_registered(&target) {
            return Err(BallotError::AlreadyRegistered(target));
        }
        self.voters.insert(
            target,
            Voter {
                is_registered: true,
                has_voted: false,
                voted_proposal_id: 0,
            },
        );
        Ok(())
    }

    /// Whether the identity holds a registered voter record.
    pub fn is_registered(&self, id: &ParticipantId) -> bool {
        self.voters.get(id).is_some_and(|v| v.is_registered)
    }

    /// The voter record for an identity; the default record if none exists.
    pub fn get(&self, id: &ParticipantId) -> Voter {
        self.voters.get(id).copied().unwrap_or_default()
    }

    /// Mark a registered voter as having voted for `proposal_id`.
    ///
    /// # Errors
    ///
    /// - `NotRegistered` if the identity holds no record.
    /// - `AlreadyVoted` if the voter's single vote was already cast.
    pub fn record_vote(
        &mut self,
        voter: ParticipantId,
        proposal_id: u32,
    ) -> Result<(), BallotError> {
        let record = self
            .voters
            .get_mut(&voter)
            .filter(|v| v.is_registered)
            .ok_or(BallotError::NotRegistered(voter))?;
        if record.has_voted {
            return Err(BallotError::AlreadyVoted(voter));
        }
        record.has_voted = true;
        record.voted_proposal_id = proposal_id;
        Ok(())
    }

    /// Number of registered voters.
    pub fn len(&self) -> usize {
        self.voters.len()
    }

    /// Whether no voter has been registered.
    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }

    /// Number of voters that have cast their vote.
    pub fn voted_count(&self) -> usize {
        self.voters.values().filter(|v| v.has_voted).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_creates_fresh_record() {
        let mut registry = VoterRegistry::new();
        let id = ParticipantId::new();
        registry.register(id).unwrap();
        assert_eq!(
            registry.get(&id),
            Voter {
                is_registered: true,
                has_voted: false,
                voted_proposal_id: 0,
            }
        );
    }

    #[test]
    fn test_register_twice_rejected() {
        let mut registry = VoterRegistry::new();
        let id = ParticipantId::new();
        registry.register(id).unwrap();
        assert_eq!(registry.register(id), Err(BallotError::AlreadyRegistered(id)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_unknown_identity_yields_default_record() {
        let registry = VoterRegistry::new();
        let stranger = ParticipantId::new();
        assert!(!registry.is_registered(&stranger));
        assert_eq!(registry.get(&stranger), Voter::default());
    }

    #[test]
    fn test_record_vote_flips_fields_once() {
        let mut registry = VoterRegistry::new();
        let id = ParticipantId::new();
        registry.register(id).unwrap();

        registry.record_vote(id, 3).unwrap();
        let record = registry.get(&id);
        assert!(record.has_voted);
        assert_eq!(record.voted_proposal_id, 3);

        assert_eq!(registry.record_vote(id, 1), Err(BallotError::AlreadyVoted(id)));
        assert_eq!(registry.get(&id).voted_proposal_id, 3);
    }

    #[test]
    fn test_record_vote_for_stranger_rejected() {
        let mut registry = VoterRegistry::new();
        let stranger = ParticipantId::new();
        assert_eq!(
            registry.record_vote(stranger, 0),
            Err(BallotError::NotRegistered(stranger))
        );
    }

    #[test]
    fn test_voted_count() {
        let mut registry = VoterRegistry::new();
        let a = ParticipantId::new();
        let b = ParticipantId::new();
        registry.register(a).unwrap();
        registry.register(b).unwrap();
        assert_eq!(registry.voted_count(), 0);
        registry.record_vote(a, 0).unwrap();
        assert_eq!(registry.voted_count(), 1);
    }
}
