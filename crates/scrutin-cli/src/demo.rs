//! # Demo Run
//!
//! Drives a complete workflow with generated identities: three voters, two
//! proposals, a split vote, and the tally. Useful as a smoke test and as a
//! worked example of the operation ordering.

use anyhow::Result;

use scrutin_core::ParticipantId;
use scrutin_workflow::Ballot;

/// Handler for `scrutin demo`.
pub fn run_demo() -> Result<()> {
    let controller = ParticipantId::new();
    let voters: Vec<ParticipantId> = (0..3).map(|_| ParticipantId::new()).collect();

    tracing::info!(%controller, "starting demo ballot");
    let mut ballot = Ballot::new(controller);

    for voter in &voters {
        ballot.add_voter(controller, *voter)?;
    }

    ballot.start_proposals_registering(controller)?;
    ballot.add_proposal(voters[0], "reduce membership fees".to_string())?;
    ballot.add_proposal(voters[1], "extend opening hours".to_string())?;
    ballot.end_proposals_registering(controller)?;

    ballot.start_voting_session(controller)?;
    ballot.set_vote(voters[0], 1)?;
    ballot.set_vote(voters[1], 2)?;
    ballot.set_vote(voters[2], 1)?;
    ballot.end_voting_session(controller)?;

    let winner = ballot.tally_votes(controller)?;
    let description = ballot
        .get_one_proposal(voters[0], winner)?
        .description
        .clone();

    for record in ballot.drain_events() {
        println!("[{}] {}", record.at, record.event);
    }
    println!("winner: proposal {winner} ({description})");

    tracing::info!(winner, "demo ballot tallied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_runs_to_completion() {
        run_demo().unwrap();
    }
}
