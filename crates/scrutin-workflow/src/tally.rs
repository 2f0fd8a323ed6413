//! # Tally
//!
//! Selects the winning proposal once voting has closed: a single
//! left-to-right scan keeping the first strictly greater vote count. Among
//! proposals tied for the maximum, the lowest index wins — the sentinel at
//! index 0 wins a ballot where nothing outpolled zero.

use crate::proposal::Proposal;

/// The index of the winning proposal.
///
/// First-max-wins: the comparison is strict, so a later proposal must
/// *exceed* the running maximum to displace it. Returns 0 for an empty list
/// (the registry always holds the sentinel by the time a tally can run).
pub fn winning_index(proposals: &[Proposal]) -> u32 {
    let mut winner = 0u32;
    let mut max_count = 0u32;
    for (index, proposal) in proposals.iter().enumerate() {
        if proposal.vote_count > max_count {
            max_count = proposal.vote_count;
            winner = index as u32;
        }
    }
    winner
}
