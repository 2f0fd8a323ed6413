//! # Notifications
//!
//! The ballot's audit trail: an append-only, ordered log of every committed
//! mutation. Events are not state — replaying them does not drive the
//! machine — but external observers rely on them, so an operation appends
//! its events only when it succeeds, and a rejected call appends nothing.

use serde::{Deserialize, Serialize};

use scrutin_core::{ParticipantId, Timestamp};

use crate::phase::WorkflowPhase;

/// A notification emitted by a successful ballot operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallotEvent {
    /// An identity was admitted as a voter.
    VoterRegistered(ParticipantId),
    /// A proposal was appended at the given index.
    ProposalRegistered(u32),
    /// A voter cast their vote for the given proposal.
    Voted {
        /// Who voted.
        voter: ParticipantId,
        /// The chosen proposal index.
        proposal_id: u32,
    },
    /// The workflow advanced from one phase to the next.
    WorkflowStatusChange {
        /// Phase before the transition.
        previous: WorkflowPhase,
        /// Phase after the transition.
        next: WorkflowPhase,
    },
}

impl std::fmt::Display for BallotEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VoterRegistered(id) => write!(f, "VoterRegistered({id})"),
            Self::ProposalRegistered(index) => write!(f, "ProposalRegistered({index})"),
            Self::Voted { voter, proposal_id } => write!(f, "Voted({voter}, {proposal_id})"),
            Self::WorkflowStatusChange { previous, next } => {
                write!(
                    f,
                    "WorkflowStatusChange({}, {})",
                    previous.as_u8(),
                    next.as_u8()
                )
            }
        }
    }
}

/// A logged event with the time it was committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// When the event was committed (UTC).
    pub at: Timestamp,
    /// What happened.
    pub event: BallotEvent,
}

impl EventRecord {
    /// Stamp an event with the current time.
    pub fn now(event: BallotEvent) -> Self {
        Self {
            at: Timestamp::now(),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_change_displays_numeric_pair() {
        let event = BallotEvent::WorkflowStatusChange {
            previous: WorkflowPhase::VotersRegistration,
            next: WorkflowPhase::ProposalsRegistrationStarted,
        };
        assert_eq!(event.to_string(), "WorkflowStatusChange(0, 1)");
    }

    #[test]
    fn test_voted_displays_voter_and_proposal() {
        let voter = ParticipantId::new();
        let event = BallotEvent::Voted {
            voter,
            proposal_id: 2,
        };
        let s = event.to_string();
        assert!(s.contains(&voter.to_string()));
        assert!(s.ends_with(", 2)"));
    }

    #[test]
    fn test_serde_round_trip() {
        let record = EventRecord::now(BallotEvent::ProposalRegistered(1));
        let json = serde_json::to_string(&record).unwrap();
        let parsed: EventRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
