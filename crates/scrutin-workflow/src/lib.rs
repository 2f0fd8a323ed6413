//! # scrutin-workflow — Single-Authority Voting Workflow
//!
//! Implements an owner-controlled voting state machine: the controller
//! admits voters, voters submit proposals and cast one vote each, and the
//! controller tallies the result. All state lives in one owned [`Ballot`]
//! value; every operation takes the caller's identity explicitly and is
//! gated by the current workflow phase.
//!
//! ## Phases
//!
//! ```text
//! VotersRegistration ──start_proposals_registering()──▶ ProposalsRegistrationStarted
//!                                                                │
//!                                            end_proposals_registering()
//!                                                                ▼
//!                                                 ProposalsRegistrationEnded
//!                                                                │
//!                                                   start_voting_session()
//!                                                                ▼
//!                                                     VotingSessionStarted
//!                                                                │
//!                                                     end_voting_session()
//!                                                                ▼
//!                                                      VotingSessionEnded
//!                                                                │
//!                                                         tally_votes()
//!                                                                ▼
//!                                                        VotesTallied
//! ```
//!
//! Phases advance by exactly one per successful controller-only transition.
//! There is no backward or skip operation; `VotesTallied` is terminal.
//!
//! ## Modules
//!
//! - **Phase** (`phase.rs`): the six ordered phases with their numeric
//!   discriminants.
//! - **Voter registry** (`voter.rs`): identity → voter record, mutated only
//!   while voters registration is open.
//! - **Proposal registry** (`proposal.rs`): append-only proposal list; index
//!   0 is the reserved `GENESIS` sentinel seeded when proposal registration
//!   opens.
//! - **Tally** (`tally.rs`): left-to-right maximum scan, lowest index wins
//!   ties.
//! - **Events** (`event.rs`): the append-only, timestamped notification log.
//! - **Ballot** (`ballot.rs`): the state object tying it all together.
//!
//! ## Design
//!
//! Every operation validates all of its preconditions before touching any
//! state, so a rejected call leaves the ballot — registries, phase, and
//! event log — exactly as it found it. Exclusive access comes from the
//! borrow checker: operations take `&mut Ballot`, and the hosting
//! environment serializes calls.

pub mod ballot;
pub mod error;
pub mod event;
pub mod phase;
pub mod proposal;
pub mod tally;
pub mod voter;

pub use ballot::Ballot;
pub use error::BallotError;
pub use event::{BallotEvent, EventRecord};
pub use phase::WorkflowPhase;
pub use proposal::{Proposal, ProposalRegistry, GENESIS_DESCRIPTION};
pub use tally::winning_index;
pub use voter::{Voter, VoterRegistry};
