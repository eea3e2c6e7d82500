//! # Poll Lifecycle
//!
//! Community polls run by the ward office.
//!
//! ## States
//!
//! ```text
//! Active ──▶ Closed (terminal)
//! ```
//!
//! Closing a poll publishes the administrator's decision and freezes the
//! vote counts; the vote-sum invariant itself lives with the poll record
//! in the store.

use serde::{Deserialize, Serialize};

use muni_core::EntityKind;

use crate::audit::Severity;
use crate::lifecycle::Lifecycle;

/// Voting status of a poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PollStatus {
    /// Accepting votes.
    Active,
    /// Voting ended, decision published (terminal).
    Closed,
}

impl Lifecycle for PollStatus {
    const KIND: EntityKind = EntityKind::Poll;

    fn allowed_next(self) -> &'static [Self] {
        match self {
            Self::Active => &[Self::Closed],
            Self::Closed => &[],
        }
    }

    fn severity(self) -> Severity {
        match self {
            Self::Closed => Severity::Critical,
            Self::Active => Severity::Normal,
        }
    }
}

impl std::fmt::Display for PollStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "ACTIVE",
            Self::Closed => "CLOSED",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{transition, TransitionCtx};

    #[test]
    fn test_close() {
        let next = transition(PollStatus::Active, PollStatus::Closed, &TransitionCtx::none()).unwrap();
        assert_eq!(next, PollStatus::Closed);
    }

    #[test]
    fn test_closed_is_terminal() {
        assert!(PollStatus::Closed.is_terminal());
        assert!(transition(PollStatus::Closed, PollStatus::Active, &TransitionCtx::none()).is_err());
    }

    #[test]
    fn test_closure_is_critical() {
        assert_eq!(PollStatus::Closed.severity(), Severity::Critical);
    }
}
