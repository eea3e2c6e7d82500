//! # muni-cli — Ward Console Command-Line Harness
//!
//! Drives the `AdminConsole` operation contracts directly, the way the web
//! presentation layer does, against the in-memory Ward 5 seed fixture.
//! Every invocation seeds a fresh store — there is no persistence layer,
//! so the fixture's stable record identifiers are what make cross-
//! invocation commands meaningful.
//!
//! ## Subcommands
//!
//! - `login` — walk the two-factor login flow explicitly
//! - `citizen` — verification queue (list/approve/reject)
//! - `sos` — alert triage (list/ack/resolve/escalate)
//! - `notice` — notice management (list/create/publish/archive)
//! - `requests` — help requests (list/assign/start/close)
//! - `events` — volunteer events (list/create/register)
//! - `safety` — safety alerts (list/create/expire)
//! - `poll` — community polls (list/create/vote/close)
//! - `audit` — the session audit log
//! - `stats` — dashboard overview
//! - `demo` — scripted walkthrough of the above
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to `muni-admin` — no lifecycle rules here.

pub mod audit;
pub mod citizen;
pub mod demo;
pub mod events;
pub mod login;
pub mod notice;
pub mod poll;
pub mod requests;
pub mod safety;
pub mod sos;
pub mod stats;

use serde::Serialize;

/// Print a value as pretty JSON (the `--json` output path).
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
