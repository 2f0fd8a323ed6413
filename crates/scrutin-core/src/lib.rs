//! # scrutin-core — Foundational Types for the Voting Workflow
//!
//! Defines the primitives shared by every crate in the workspace:
//! participant identity and timestamps. The workflow crate depends on this
//! one; this one depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Opaque identity.** `ParticipantId` is a newtype over a v4 UUID. The
//!    workflow only ever compares identities and looks them up — it never
//!    generates meaning from them and never mints them on behalf of callers.
//!
//! 2. **UTC-only timestamps.** `Timestamp` enforces UTC with seconds
//!    precision, rendered as ISO8601 with a `Z` suffix. Event-log entries
//!    are stamped with it.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `scrutin-*` crates (this is the leaf).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod identity;
pub mod temporal;

pub use identity::{IdentityError, ParticipantId};
pub use temporal::{Timestamp, TimestampError};
