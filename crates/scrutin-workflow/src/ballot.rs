//! # The Ballot
//!
//! The single owned state object of the voting workflow: controller
//! identity, current phase, both registries, the stored winner, and the
//! event log. Every operation takes the caller's identity explicitly and
//! checks, in order, authority, phase, and argument validity before touching
//! any state — a rejected call commits nothing, neither mutation nor event.
//!
//! ## Operations by phase
//!
//! | Phase | Controller | Voters |
//! |---|---|---|
//! | `VotersRegistration` | `add_voter`, `start_proposals_registering` | reads |
//! | `ProposalsRegistrationStarted` | `end_proposals_registering` | `add_proposal`, reads |
//! | `ProposalsRegistrationEnded` | `start_voting_session` | reads |
//! | `VotingSessionStarted` | `end_voting_session` | `set_vote`, reads |
//! | `VotingSessionEnded` | `tally_votes` | reads |
//! | `VotesTallied` | — | reads |
//!
//! Reads (`get_voter`, `get_one_proposal`, `proposal_count`) require a
//! registered caller but work in any phase.

use serde::{Deserialize, Serialize};

use scrutin_core::ParticipantId;

use crate::error::BallotError;
use crate::event::{BallotEvent, EventRecord};
use crate::phase::WorkflowPhase;
use crate::proposal::{Proposal, ProposalRegistry};
use crate::tally;
use crate::voter::{Voter, VoterRegistry};

// Phase-precondition reason strings. Wording (sic) is pinned by the
// reference behavior and must not be reflowed.
const VOTERS_REGISTRATION_NOT_OPEN: &str = "Voters registration is not open yet";
const PROPOSALS_NOT_ALLOWED: &str = "Proposals are not allowed yet";
const PROPOSALS_CANT_START_NOW: &str = "Registering proposals cant be started now";
const PROPOSALS_NOT_STARTED: &str = "Registering proposals havent started yet";
const PROPOSALS_NOT_FINISHED: &str = "Registering proposals phase is not finished";
const VOTING_NOT_STARTED: &str = "Voting session havent started yet";
const VOTING_NOT_ENDED: &str = "Current status is not voting session ended";

/// An owner-controlled ballot.
///
/// Constructed with the controller's identity, which is immutable
/// thereafter. The hosting environment serializes calls; exclusive access
/// to the state goes through `&mut self`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ballot {
    controller: ParticipantId,
    phase: WorkflowPhase,
    voters: VoterRegistry,
    proposals: ProposalRegistry,
    winning_proposal_id: Option<u32>,
    events: Vec<EventRecord>,
}

impl Ballot {
    /// Create a ballot in `VotersRegistration` with the given controller.
    pub fn new(controller: ParticipantId) -> Self {
        Self {
            controller,
            phase: WorkflowPhase::VotersRegistration,
            voters: VoterRegistry::new(),
            proposals: ProposalRegistry::new(),
            winning_proposal_id: None,
            events: Vec::new(),
        }
    }

    // ─── Views ───────────────────────────────────────────────────────

    /// The controller's identity.
    pub fn controller(&self) -> ParticipantId {
        self.controller
    }

    /// The current workflow phase.
    pub fn phase(&self) -> WorkflowPhase {
        self.phase
    }

    /// The stored winner. `Some` only after `tally_votes` has run.
    pub fn winning_proposal_id(&self) -> Option<u32> {
        self.winning_proposal_id
    }

    /// The full event log, in commit order.
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// Take all logged events, leaving the log empty.
    pub fn drain_events(&mut self) -> Vec<EventRecord> {
        std::mem::take(&mut self.events)
    }

    // ─── Guards ──────────────────────────────────────────────────────

    fn require_controller(&self, caller: ParticipantId) -> Result<(), BallotError> {
        if caller != self.controller {
            return Err(BallotError::Unauthorized(caller));
        }
        Ok(())
    }

    fn require_voter(&self, caller: ParticipantId) -> Result<(), BallotError> {
        if !self.voters.is_registered(&caller) {
            return Err(BallotError::NotRegistered(caller));
        }
        Ok(())
    }

    fn require_phase(
        &self,
        expected: WorkflowPhase,
        reason: &'static str,
    ) -> Result<(), BallotError> {
        if self.phase != expected {
            return Err(BallotError::InvalidPhase {
                current: self.phase,
                reason,
            });
        }
        Ok(())
    }

    fn record(&mut self, event: BallotEvent) {
        self.events.push(EventRecord::now(event));
    }

    /// Advance the phase by one and log the status change.
    ///
    /// Callers have already verified the current phase, so a successor
    /// always exists here.
    fn advance_phase(&mut self) {
        debug_assert!(!self.phase.is_terminal());
        if let Some(next) = self.phase.next() {
            self.record(BallotEvent::WorkflowStatusChange {
                previous: self.phase,
                next,
            });
            self.phase = next;
        }
    }

    // ─── Voter registry ──────────────────────────────────────────────

    /// Admit `target` as a voter. Controller-only; voters registration
    /// must still be open.
    pub fn add_voter(
        &mut self,
        caller: ParticipantId,
        target: ParticipantId,
    ) -> Result<(), BallotError> {
        self.require_controller(caller)?;
        self.require_phase(WorkflowPhase::VotersRegistration, VOTERS_REGISTRATION_NOT_OPEN)?;
        self.voters.register(target)?;
        self.record(BallotEvent::VoterRegistered(target));
        Ok(())
    }

    /// Read `target`'s voter record. Voter-only; any phase. An identity
    /// that was never registered reads as the default record.
    pub fn get_voter(
        &self,
        caller: ParticipantId,
        target: ParticipantId,
    ) -> Result<Voter, BallotError> {
        self.require_voter(caller)?;
        Ok(self.voters.get(&target))
    }

    // ─── Proposal registry ───────────────────────────────────────────

    /// Submit a proposal and return its permanent index. Voter-only;
    /// proposal registration must be open; description must be non-empty.
    pub fn add_proposal(
        &mut self,
        caller: ParticipantId,
        description: String,
    ) -> Result<u32, BallotError> {
        self.require_voter(caller)?;
        self.require_phase(
            WorkflowPhase::ProposalsRegistrationStarted,
            PROPOSALS_NOT_ALLOWED,
        )?;
        let index = self.proposals.append(description)?;
        self.record(BallotEvent::ProposalRegistered(index));
        Ok(index)
    }

    /// Read the proposal at `index`. Voter-only; any phase.
    pub fn get_one_proposal(
        &self,
        caller: ParticipantId,
        index: u32,
    ) -> Result<&Proposal, BallotError> {
        self.require_voter(caller)?;
        self.proposals.get(index)
    }

    /// Number of proposals, sentinel included. Voter-only; any phase.
    pub fn proposal_count(&self, caller: ParticipantId) -> Result<usize, BallotError> {
        self.require_voter(caller)?;
        Ok(self.proposals.len())
    }

    // ─── Phase transitions ───────────────────────────────────────────

    /// Open proposal registration (phase 0 → 1). Controller-only.
    ///
    /// Seeds the `GENESIS` sentinel at proposal index 0 as part of the
    /// transition — this is contract, not an incidental default.
    pub fn start_proposals_registering(
        &mut self,
        caller: ParticipantId,
    ) -> Result<(), BallotError> {
        self.require_controller(caller)?;
        self.require_phase(WorkflowPhase::VotersRegistration, PROPOSALS_CANT_START_NOW)?;
        self.proposals.seed_genesis();
        self.advance_phase();
        Ok(())
    }

    /// Close proposal registration (phase 1 → 2). Controller-only.
    pub fn end_proposals_registering(
        &mut self,
        caller: ParticipantId,
    ) -> Result<(), BallotError> {
        self.require_controller(caller)?;
        self.require_phase(
            WorkflowPhase::ProposalsRegistrationStarted,
            PROPOSALS_NOT_STARTED,
        )?;
        self.advance_phase();
        Ok(())
    }

    /// Open the voting session (phase 2 → 3). Controller-only.
    pub fn start_voting_session(&mut self, caller: ParticipantId) -> Result<(), BallotError> {
        self.require_controller(caller)?;
        self.require_phase(
            WorkflowPhase::ProposalsRegistrationEnded,
            PROPOSALS_NOT_FINISHED,
        )?;
        self.advance_phase();
        Ok(())
    }

    /// Close the voting session (phase 3 → 4). Controller-only.
    pub fn end_voting_session(&mut self, caller: ParticipantId) -> Result<(), BallotError> {
        self.require_controller(caller)?;
        self.require_phase(WorkflowPhase::VotingSessionStarted, VOTING_NOT_STARTED)?;
        self.advance_phase();
        Ok(())
    }

    // ─── Voting ──────────────────────────────────────────────────────

    /// Cast the caller's single vote for `proposal_id`. Voter-only; the
    /// voting session must be open. Never idempotent — a second call for
    /// the same voter always fails.
    pub fn set_vote(
        &mut self,
        caller: ParticipantId,
        proposal_id: u32,
    ) -> Result<(), BallotError> {
        self.require_voter(caller)?;
        self.require_phase(WorkflowPhase::VotingSessionStarted, VOTING_NOT_STARTED)?;
        if self.voters.get(&caller).has_voted {
            return Err(BallotError::AlreadyVoted(caller));
        }
        if !self.proposals.contains(proposal_id) {
            return Err(BallotError::ProposalNotFound { id: proposal_id });
        }
        // All preconditions hold; neither write below can fail.
        self.voters.record_vote(caller, proposal_id)?;
        self.proposals.add_vote(proposal_id)?;
        self.record(BallotEvent::Voted {
            voter: caller,
            proposal_id,
        });
        Ok(())
    }

    // ─── Tally ───────────────────────────────────────────────────────

    /// Compute and store the winner (phase 4 → 5). Controller-only; voting
    /// must have ended. Scans all proposals, sentinel included; lowest
    /// index wins ties. Vote counts are not mutated.
    pub fn tally_votes(&mut self, caller: ParticipantId) -> Result<u32, BallotError> {
        self.require_controller(caller)?;
        self.require_phase(WorkflowPhase::VotingSessionEnded, VOTING_NOT_ENDED)?;
        let winner = tally::winning_index(self.proposals.as_slice());
        self.winning_proposal_id = Some(winner);
        self.advance_phase();
        Ok(winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ballot_with_voter() -> (Ballot, ParticipantId, ParticipantId) {
        let controller = ParticipantId::new();
        let voter = ParticipantId::new();
        let mut ballot = Ballot::new(controller);
        ballot.add_voter(controller, voter).unwrap();
        (ballot, controller, voter)
    }

    #[test]
    fn test_new_ballot_starts_in_voters_registration() {
        let controller = ParticipantId::new();
        let ballot = Ballot::new(controller);
        assert_eq!(ballot.phase(), WorkflowPhase::VotersRegistration);
        assert_eq!(ballot.controller(), controller);
        assert_eq!(ballot.winning_proposal_id(), None);
        assert!(ballot.events().is_empty());
    }

    #[test]
    fn test_authority_checked_before_phase() {
        // A stranger calling a transition in the wrong phase gets the
        // authorization error, not the phase error.
        let (mut ballot, _controller, voter) = ballot_with_voter();
        assert_eq!(
            ballot.end_voting_session(voter),
            Err(BallotError::Unauthorized(voter))
        );
    }

    #[test]
    fn test_registration_checked_before_phase_for_votes() {
        let controller = ParticipantId::new();
        let stranger = ParticipantId::new();
        let mut ballot = Ballot::new(controller);
        // Phase is wrong too, but the caller's registration is checked first.
        assert_eq!(
            ballot.set_vote(stranger, 0),
            Err(BallotError::NotRegistered(stranger))
        );
    }

    #[test]
    fn test_rejected_call_appends_no_event() {
        let (mut ballot, controller, _voter) = ballot_with_voter();
        let before = ballot.events().len();
        assert!(ballot.end_voting_session(controller).is_err());
        assert!(ballot.add_voter(ParticipantId::new(), ParticipantId::new()).is_err());
        assert_eq!(ballot.events().len(), before);
    }

    #[test]
    fn test_genesis_seeded_on_transition_without_proposal_event() {
        let (mut ballot, controller, voter) = ballot_with_voter();
        ballot.start_proposals_registering(controller).unwrap();

        let genesis = ballot.get_one_proposal(voter, 0).unwrap();
        assert_eq!(genesis.description, "GENESIS");
        assert_eq!(genesis.vote_count, 0);

        // The transition logs only the status change, not a
        // ProposalRegistered for the sentinel.
        assert!(ballot
            .events()
            .iter()
            .all(|r| !matches!(r.event, BallotEvent::ProposalRegistered(_))));
    }

    #[test]
    fn test_drain_events_empties_the_log() {
        let (mut ballot, _controller, _voter) = ballot_with_voter();
        let drained = ballot.drain_events();
        assert_eq!(drained.len(), 1);
        assert!(ballot.events().is_empty());
    }

    #[test]
    fn test_get_voter_for_unknown_target_is_default_record() {
        let (ballot, _controller, voter) = ballot_with_voter();
        let record = ballot.get_voter(voter, ParticipantId::new()).unwrap();
        assert_eq!(record, Voter::default());
    }

    #[test]
    fn test_proposal_count_requires_registration() {
        let (ballot, _controller, voter) = ballot_with_voter();
        let stranger = ParticipantId::new();
        assert_eq!(
            ballot.proposal_count(stranger),
            Err(BallotError::NotRegistered(stranger))
        );
        assert_eq!(ballot.proposal_count(voter).unwrap(), 0);
    }

    #[test]
    fn test_ballot_serde_round_trip_preserves_state() {
        let (mut ballot, controller, voter) = ballot_with_voter();
        ballot.start_proposals_registering(controller).unwrap();
        ballot.add_proposal(voter, "option".to_string()).unwrap();
        ballot.end_proposals_registering(controller).unwrap();
        ballot.start_voting_session(controller).unwrap();
        ballot.set_vote(voter, 1).unwrap();
        ballot.end_voting_session(controller).unwrap();
        ballot.tally_votes(controller).unwrap();

        let json = serde_json::to_string(&ballot).unwrap();
        let restored: Ballot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.phase(), WorkflowPhase::VotesTallied);
        assert_eq!(restored.winning_proposal_id(), Some(1));
        assert_eq!(restored.controller(), controller);
        assert_eq!(restored.get_voter(voter, voter).unwrap().voted_proposal_id, 1);
        assert_eq!(restored.events().len(), ballot.events().len());
    }
}
