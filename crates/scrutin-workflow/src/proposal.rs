//! # Proposal Registry
//!
//! An ordered, append-only list of proposals. A proposal's index is its
//! permanent identifier — nothing is ever removed or reindexed.
//!
//! Index 0 is the reserved `GENESIS` sentinel, seeded when the
//! proposal-registration phase opens. It participates in voting and in the
//! tally like any other proposal.

use serde::{Deserialize, Serialize};

use crate::error::BallotError;

/// Description of the sentinel proposal at index 0.
pub const GENESIS_DESCRIPTION: &str = "GENESIS";

/// A named voting option with its accumulated vote count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    /// What is being proposed.
    pub description: String,
    /// Votes received so far.
    pub vote_count: u32,
}

/// The append-only list of proposals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProposalRegistry {
    proposals: Vec<Proposal>,
}

impl ProposalRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the `GENESIS` sentinel at index 0.
    ///
    /// Called exactly once, when proposal registration opens.
    pub fn seed_genesis(&mut self) {
        debug_assert!(self.proposals.is_empty());
        self.proposals.push(Proposal {
            description: GENESIS_DESCRIPTION.to_string(),
            vote_count: 0,
        });
    }

    /// Append a proposal and return its permanent index.
    ///
    /// # Errors
    ///
    /// `EmptyProposal` if the description is empty.
    pub fn append(&mut self, description: String) -> Result<u32, BallotError> {
        if description.is_empty() {
            return Err(BallotError::EmptyProposal);
        }
        self.proposals.push(Proposal {
            description,
            vote_count: 0,
        });
        Ok((self.proposals.len() - 1) as u32)
    }

    /// The proposal at `index`.
    ///
    /// # Errors
    ///
    /// `ProposalNotFound` if the index does not reference an existing
    /// proposal.
    pub fn get(&self, index: u32) -> Result<&Proposal, BallotError> {
        self.proposals
            .get(index as usize)
            .ok_or(BallotError::ProposalNotFound { id: index })
    }

    /// Whether `index` references an existing proposal.
    pub fn contains(&self, index: u32) -> bool {
        (index as usize) < self.proposals.len()
    }

    /// Increment the vote count of the proposal at `index`.
    ///
    /// # Errors
    ///
    /// `ProposalNotFound` if the index does not reference an existing
    /// proposal.
    pub fn add_vote(&mut self, index: u32) -> Result<(), BallotError> {
        let proposal = self
            .proposals
            .get_mut(index as usize)
            .ok_or(BallotError::ProposalNotFound { id: index })?;
        proposal.vote_count += 1;
        Ok(())
    }

    /// Number of proposals, sentinel included.
    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    /// Whether the registry holds no proposals (i.e. registration has not
    /// opened yet).
    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    /// All proposals in submission order.
    pub fn as_slice(&self) -> &[Proposal] {
        &self.proposals
    }
}
