//! # muni-state — Status Lifecycle Engine
//!
//! Implements the status lifecycles of the muni stack. Every managed record
//! carries a status drawn from a finite per-kind enumeration, and every
//! status change flows through one generic engine instead of per-screen
//! conditionals.
//!
//! ## Status Machines
//!
//! - **Citizen** (`citizen.rs`): `Pending → Approved | Rejected`, both
//!   terminal. Rejection requires a non-empty reason.
//! - **SOS Alert** (`sos.rs`): `Active → Acknowledged → Resolved` with an
//!   `Escalated` branch; `Resolved` is the only terminal state.
//! - **Notice** (`notice.rs`): `Draft → Published → Archived`, one-way.
//! - **Help Request** (`help.rs`): strictly sequential
//!   `Open → InProgress → Closed`.
//! - **Safety Alert** (`safety.rs`): `Active → Expired`, no reactivation.
//! - **Poll** (`poll.rs`): `Active → Closed`.
//!
//! ## Design
//!
//! Each status enum implements the [`Lifecycle`] trait, which exposes its
//! allowed-transition table. The [`transition`] function is the single
//! validation entry point: edge check first, then the machine's validation
//! hook (the citizen machine rejects a missing rejection reason), then the
//! new status. Terminality is derived from the table — a status with no
//! outgoing edges is terminal, so the table cannot disagree with the
//! terminal set.
//!
//! Severity classification is a static per-(machine, target-status)
//! mapping consumed by the audit log; it is never user input.

pub mod audit;
pub mod citizen;
pub mod help;
pub mod lifecycle;
pub mod notice;
pub mod poll;
pub mod safety;
pub mod sos;

// ─── Engine re-exports ──────────────────────────────────────────────

pub use lifecycle::{transition, Lifecycle, TransitionCtx, TransitionError};

// ─── Audit re-exports ───────────────────────────────────────────────

pub use audit::{AuditEntry, AuditLog, Severity};

// ─── Status re-exports ──────────────────────────────────────────────

pub use citizen::CitizenStatus;
pub use help::HelpRequestStatus;
pub use notice::NoticeStatus;
pub use poll::PollStatus;
pub use safety::SafetyStatus;
pub use sos::SosStatus;
