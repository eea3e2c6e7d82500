//! # muni-core — Foundational Types for the Muni Stack
//!
//! This crate is the bedrock of the MyArea municipal administration stack.
//! It defines the primitive types every other crate builds on; it depends
//! on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for record identifiers.** `CitizenId`, `NoticeId`,
//!    `PollId`, and friends are UUID-backed newtypes — you cannot pass a
//!    citizen identifier where a poll identifier is expected, and no bare
//!    strings travel through the operation contracts.
//!
//! 2. **Single `EntityKind` enum.** One definition covering every managed
//!    record kind. Exhaustive `match` everywhere; adding a kind forces every
//!    consumer to handle it.
//!
//! 3. **UTC-only timestamps.** The `Timestamp` type enforces UTC with Z
//!    suffix and seconds precision. Audit ordering and display formatting
//!    never depend on a local timezone.
//!
//! 4. **Validated `Ward` labels.** Ward names are constructed through a
//!    checked constructor; an empty ward label cannot exist.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `muni-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod kind;
pub mod operator;
pub mod temporal;
pub mod ward;

// Re-export primary types for ergonomic imports.
pub use error::MuniError;
pub use identity::{
    CitizenId, EventId, HelpRequestId, NoticeId, PollId, SafetyAlertId, SosAlertId,
};
pub use kind::{EntityKind, ENTITY_KIND_COUNT};
pub use operator::Operator;
pub use temporal::Timestamp;
pub use ward::Ward;
