//! # muni-store — Entity Store
//!
//! Owns every record collection the console manages. The [`WardStore`]
//! aggregate is an explicit owned value — no ambient globals — so each test
//! constructs its own isolated store, and "one transition completes before
//! the next begins" is structural (`&mut self`, no interior mutability).
//!
//! ## Operations
//!
//! - Creation: fresh identifier, initial status from caller intent, derived
//!   counters zeroed regardless of input.
//! - Status changes: validated by the `muni-state` engine; exactly one
//!   audit entry appended per success, none on failure.
//! - Poll voting: maintains `total_votes == Σ option votes`.
//! - Volunteer registration: roster append plus counter; over-capacity is a
//!   warning, not an error.
//!
//! Records are never physically deleted — terminal statuses model
//! end-of-life.

pub mod citizen;
pub mod help;
pub mod notice;
pub mod poll;
pub mod safety;
pub mod seed;
pub mod sos;
pub mod store;
pub mod volunteer;

// ─── Record re-exports ──────────────────────────────────────────────

pub use citizen::{Citizen, CitizenDraft, ServiceProfile};
pub use help::{HelpRequest, HelpRequestDraft};
pub use notice::{Notice, NoticeCategory, NoticeDraft, PublishIntent};
pub use poll::{Poll, PollDraft, PollOption};
pub use safety::{Priority, SafetyAlert, SafetyAlertDraft, SafetyAlertKind};
pub use sos::{SosAlert, SosAlertDraft};
pub use volunteer::{Attendance, Volunteer, VolunteerEvent, VolunteerEventDraft};

// ─── Store re-exports ───────────────────────────────────────────────

pub use store::{StoreError, WardStore};
