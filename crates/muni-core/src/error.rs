//! # Error Types
//!
//! Core error type shared by the foundational modules. Domain crates define
//! their own `thiserror` enums for lifecycle, store, auth, and console
//! failures; this enum covers only what the core types themselves can
//! reject.

use thiserror::Error;

/// Errors raised by the foundational types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MuniError {
    /// A value failed a construction-time check.
    #[error("validation error: {0}")]
    Validation(String),

    /// A timestamp string could not be parsed under the UTC-only rules.
    #[error("invalid timestamp: {0}")]
    Timestamp(String),
}
