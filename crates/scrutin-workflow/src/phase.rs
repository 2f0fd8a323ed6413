//! # Workflow Phases
//!
//! The six ordered stages of a ballot. The phase value is monotonic: each
//! successful controller transition advances it by exactly one, and no phase
//! is ever revisited or skipped.

use serde::{Deserialize, Serialize};

/// The lifecycle phase of a ballot.
///
/// Discriminants are the canonical numeric phase values (0–5) carried in
/// `WorkflowStatusChange` notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum WorkflowPhase {
    /// The controller is admitting voters.
    VotersRegistration = 0,
    /// Registered voters may submit proposals.
    ProposalsRegistrationStarted = 1,
    /// Proposal submission is closed; voting has not opened.
    ProposalsRegistrationEnded = 2,
    /// Registered voters may cast their single vote.
    VotingSessionStarted = 3,
    /// Voting is closed; the tally has not run.
    VotingSessionEnded = 4,
    /// The winner has been computed (terminal).
    VotesTallied = 5,
}

impl WorkflowPhase {
    /// The numeric phase value (0–5).
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// The phase that follows this one, or `None` from the terminal phase.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::VotersRegistration => Some(Self::ProposalsRegistrationStarted),
            Self::ProposalsRegistrationStarted => Some(Self::ProposalsRegistrationEnded),
            Self::ProposalsRegistrationEnded => Some(Self::VotingSessionStarted),
            Self::VotingSessionStarted => Some(Self::VotingSessionEnded),
            Self::VotingSessionEnded => Some(Self::VotesTallied),
            Self::VotesTallied => None,
        }
    }

    /// Whether this phase is terminal (no further transitions exist).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::VotesTallied)
    }

    /// The canonical name of this phase.
    pub fn name(&self) -> &'static str {
        match self {
            Self::VotersRegistration => "VOTERS_REGISTRATION",
            Self::ProposalsRegistrationStarted => "PROPOSALS_REGISTRATION_STARTED",
            Self::ProposalsRegistrationEnded => "PROPOSALS_REGISTRATION_ENDED",
            Self::VotingSessionStarted => "VOTING_SESSION_STARTED",
            Self::VotingSessionEnded => "VOTING_SESSION_ENDED",
            Self::VotesTallied => "VOTES_TALLIED",
        }
    }
}

impl std::fmt::Display for WorkflowPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
