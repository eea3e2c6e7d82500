//! # muni-admin — Console Operation Contracts
//!
//! The [`AdminConsole`] is the surface the presentation layer (or the CLI
//! harness, or a test) drives. It owns the login flow and the ward store,
//! and every operation on the records — reads included — requires a
//! verified operator session first.
//!
//! Configuration is a small YAML document (operator identity, ward label,
//! expected one-time code) with defaults matching the Ward 5 demo.

pub mod config;
pub mod console;

pub use config::ConsoleConfig;
pub use console::{AdminConsole, ConsoleError};
