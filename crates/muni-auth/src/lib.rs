//! # muni-auth — Operator Login Flow
//!
//! Implements the two-factor login gate in front of the console.
//!
//! ## States
//!
//! ```text
//! Credentials ──▶ OneTimeCode ──▶ Verified (terminal for the session)
//!      ▲               │
//!      └─── back() ────┘
//! ```
//!
//! Logging out resets the whole machine to `Credentials`, never to the
//! code stage. This is a demo flow: any non-empty credential pair is
//! accepted and the one-time code is compared against a fixed configured
//! value — it is a placeholder, not a security boundary.

pub mod flow;

pub use flow::{AuthError, Channel, LoginFlow, SessionStart, Stage, DEMO_CODE};
