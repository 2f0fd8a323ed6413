//! # Session Replay
//!
//! Applies a JSON session script to a fresh ballot. Scripts refer to
//! participants by label — `"controller"` is reserved for the ballot
//! controller; any other label is assigned a fresh identity on first use.
//!
//! A script is a JSON array of tagged operations:
//!
//! ```json
//! [
//!   { "op": "add_voter", "voter": "alice" },
//!   { "op": "start_proposals_registering" },
//!   { "op": "add_proposal", "caller": "alice", "description": "lower fees" },
//!   { "op": "end_proposals_registering" },
//!   { "op": "start_voting_session" },
//!   { "op": "set_vote", "caller": "alice", "proposal_id": 1 },
//!   { "op": "end_voting_session" },
//!   { "op": "tally_votes" }
//! ]
//! ```
//!
//! Controller-only operations run as the controller unless the script
//! overrides `caller` — useful for replaying authorization failures.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Deserialize;

use scrutin_core::ParticipantId;
use scrutin_workflow::Ballot;

/// Arguments for `scrutin replay`.
#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Path to the JSON session script.
    pub script: PathBuf,
}

/// One scripted call against the ballot.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SessionOp {
    /// Admit a voter (controller unless `caller` overrides).
    AddVoter {
        voter: String,
        #[serde(default)]
        caller: Option<String>,
    },
    /// Open proposal registration.
    StartProposalsRegistering {
        #[serde(default)]
        caller: Option<String>,
    },
    /// Submit a proposal as `caller`.
    AddProposal { caller: String, description: String },
    /// Close proposal registration.
    EndProposalsRegistering {
        #[serde(default)]
        caller: Option<String>,
    },
    /// Open the voting session.
    StartVotingSession {
        #[serde(default)]
        caller: Option<String>,
    },
    /// Cast `caller`'s vote.
    SetVote { caller: String, proposal_id: u32 },
    /// Close the voting session.
    EndVotingSession {
        #[serde(default)]
        caller: Option<String>,
    },
    /// Compute and store the winner.
    TallyVotes {
        #[serde(default)]
        caller: Option<String>,
    },
}

/// A replay session: the ballot plus the label → identity mapping.
pub struct Session {
    ballot: Ballot,
    participants: HashMap<String, ParticipantId>,
}

impl Session {
    /// Start a session with a freshly generated controller identity.
    pub fn new() -> Self {
        let controller = ParticipantId::new();
        let mut participants = HashMap::new();
        participants.insert("controller".to_string(), controller);
        Self {
            ballot: Ballot::new(controller),
            participants,
        }
    }

    /// The identity behind a label, minting one on first use.
    fn id_of(&mut self, label: &str) -> ParticipantId {
        *self
            .participants
            .entry(label.to_string())
            .or_insert_with(ParticipantId::new)
    }

    fn caller_or_controller(&mut self, caller: &Option<String>) -> ParticipantId {
        match caller {
            Some(label) => self.id_of(label),
            None => self.ballot.controller(),
        }
    }

    /// Apply one operation. Domain rejections surface as errors with the
    /// ballot left untouched.
    pub fn apply(&mut self, op: &SessionOp) -> Result<()> {
        match op {
            SessionOp::AddVoter { voter, caller } => {
                let caller = self.caller_or_controller(caller);
                let target = self.id_of(voter);
                self.ballot.add_voter(caller, target)?;
            }
            SessionOp::StartProposalsRegistering { caller } => {
                let caller = self.caller_or_controller(caller);
                self.ballot.start_proposals_registering(caller)?;
            }
            SessionOp::AddProposal {
                caller,
                description,
            } => {
                let caller = self.id_of(caller);
                self.ballot.add_proposal(caller, description.clone())?;
            }
            SessionOp::EndProposalsRegistering { caller } => {
                let caller = self.caller_or_controller(caller);
                self.ballot.end_proposals_registering(caller)?;
            }
            SessionOp::StartVotingSession { caller } => {
                let caller = self.caller_or_controller(caller);
                self.ballot.start_voting_session(caller)?;
            }
            SessionOp::SetVote { caller, proposal_id } => {
                let caller = self.id_of(caller);
                self.ballot.set_vote(caller, *proposal_id)?;
            }
            SessionOp::EndVotingSession { caller } => {
                let caller = self.caller_or_controller(caller);
                self.ballot.end_voting_session(caller)?;
            }
            SessionOp::TallyVotes { caller } => {
                let caller = self.caller_or_controller(caller);
                self.ballot.tally_votes(caller)?;
            }
        }
        Ok(())
    }

    /// Access the ballot.
    pub fn ballot(&self) -> &Ballot {
        &self.ballot
    }

    /// Mutable access, for draining events after each step.
    pub fn ballot_mut(&mut self) -> &mut Ballot {
        &mut self.ballot
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Handler for `scrutin replay`: load the script, apply every step, print
/// the events each step committed and the final outcome.
pub fn run_replay(args: &ReplayArgs) -> Result<()> {
    let raw = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading session script {}", args.script.display()))?;
    let ops: Vec<SessionOp> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing session script {}", args.script.display()))?;

    let mut session = Session::new();
    for (step, op) in ops.iter().enumerate() {
        session
            .apply(op)
            .with_context(|| format!("step {step} ({op:?}) rejected"))?;
        for record in session.ballot_mut().drain_events() {
            println!("[{}] {}", record.at, record.event);
        }
    }

    let ballot = session.ballot();
    println!("final phase: {}", ballot.phase());
    match ballot.winning_proposal_id() {
        Some(winner) => println!("winning proposal: {winner}"),
        None => println!("winning proposal: not tallied"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrutin_workflow::WorkflowPhase;

    const SCRIPT: &str = r#"[
        { "op": "add_voter", "voter": "alice" },
        { "op": "add_voter", "voter": "bob" },
        { "op": "start_proposals_registering" },
        { "op": "add_proposal", "caller": "alice", "description": "lower fees" },
        { "op": "end_proposals_registering" },
        { "op": "start_voting_session" },
        { "op": "set_vote", "caller": "alice", "proposal_id": 1 },
        { "op": "set_vote", "caller": "bob", "proposal_id": 1 },
        { "op": "end_voting_session" },
        { "op": "tally_votes" }
    ]"#;

    #[test]
    fn test_full_script_replays_to_tallied() {
        let ops: Vec<SessionOp> = serde_json::from_str(SCRIPT).unwrap();
        let mut session = Session::new();
        for op in &ops {
            session.apply(op).unwrap();
        }
        assert_eq!(session.ballot().phase(), WorkflowPhase::VotesTallied);
        assert_eq!(session.ballot().winning_proposal_id(), Some(1));
    }

    #[test]
    fn test_labels_are_stable_across_steps() {
        let mut session = Session::new();
        let a1 = session.id_of("alice");
        let a2 = session.id_of("alice");
        assert_eq!(a1, a2);
        assert_ne!(a1, session.id_of("bob"));
    }

    #[test]
    fn test_caller_override_hits_authorization() {
        let mut session = Session::new();
        let op: SessionOp = serde_json::from_str(
            r#"{ "op": "start_proposals_registering", "caller": "mallory" }"#,
        )
        .unwrap();
        let err = session.apply(&op).unwrap_err();
        assert!(err.to_string().contains("not the ballot controller"));
        assert_eq!(session.ballot().phase(), WorkflowPhase::VotersRegistration);
    }

    #[test]
    fn test_rejected_step_leaves_ballot_usable() {
        let mut session = Session::new();
        let bad: SessionOp =
            serde_json::from_str(r#"{ "op": "end_voting_session" }"#).unwrap();
        assert!(session.apply(&bad).is_err());

        let good: SessionOp =
            serde_json::from_str(r#"{ "op": "add_voter", "voter": "alice" }"#).unwrap();
        session.apply(&good).unwrap();
    }
}
