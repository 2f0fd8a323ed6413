//! # scrutin-cli — Voting Workflow Command-Line Interface
//!
//! Drives an in-memory [`scrutin_workflow::Ballot`] from the terminal.
//!
//! ## Subcommands
//!
//! - `demo` — run the full happy-path workflow with generated identities.
//! - `replay` — apply a JSON session script and print the emitted events.
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to the workflow crate — no voting rules
//!   live here.
//! - Scripts refer to participants by label; identity generation happens at
//!   this boundary, never inside the core.

pub mod demo;
pub mod session;
