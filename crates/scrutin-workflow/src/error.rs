//! # Error Taxonomy
//!
//! One variant per rejected precondition. Every error is synchronous and
//! aborts the call before any state mutation — the ballot remains usable
//! after any rejection.
//!
//! `InvalidPhase` displays exactly its reason string, so each operation can
//! distinguish "not yet open" from "already closed" from "not allowed now"
//! the way the reference revert messages do.

use thiserror::Error;

use scrutin_core::ParticipantId;

use crate::phase::WorkflowPhase;

/// Errors returned by ballot operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BallotError {
    /// A non-controller identity attempted a controller-only operation.
    #[error("participant {0} is not the ballot controller")]
    Unauthorized(ParticipantId),

    /// A caller that is not a registered voter attempted a voter-only
    /// operation.
    #[error("participant {0} is not a registered voter")]
    NotRegistered(ParticipantId),

    /// The target identity already holds a voter record.
    #[error("participant {0} is already registered")]
    AlreadyRegistered(ParticipantId),

    /// The operation is not legal in the current phase. The reason names the
    /// specific violated precondition.
    #[error("{reason}")]
    InvalidPhase {
        /// The phase the ballot was in when the call was rejected.
        current: WorkflowPhase,
        /// Which precondition was violated.
        reason: &'static str,
    },

    /// A proposal must carry a non-empty description.
    #[error("proposal description cannot be empty")]
    EmptyProposal,

    /// The proposal index does not reference an existing proposal.
    #[error("Proposal not found")]
    ProposalNotFound {
        /// The rejected index.
        id: u32,
    },

    /// The voter has already cast their single vote.
    #[error("participant {0} has already voted")]
    AlreadyVoted(ParticipantId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_phase_displays_reason_verbatim() {
        let err = BallotError::InvalidPhase {
            current: WorkflowPhase::VotersRegistration,
            reason: "Voting session havent started yet",
        };
        assert_eq!(err.to_string(), "Voting session havent started yet");
    }

    #[test]
    fn test_unauthorized_carries_the_offending_identity() {
        let caller = ParticipantId::new();
        let err = BallotError::Unauthorized(caller);
        assert!(err.to_string().contains(&caller.to_string()));
    }

    #[test]
    fn test_errors_compare_by_kind_and_payload() {
        let caller = ParticipantId::new();
        assert_eq!(
            BallotError::AlreadyVoted(caller),
            BallotError::AlreadyVoted(caller)
        );
        assert_ne!(
            BallotError::AlreadyVoted(caller),
            BallotError::AlreadyVoted(ParticipantId::new())
        );
    }
}
