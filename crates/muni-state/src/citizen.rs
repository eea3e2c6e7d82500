//! # Citizen Verification Lifecycle
//!
//! Registration review by the ward administrator.
//!
//! ## States
//!
//! ```text
//! Pending ──▶ Approved (terminal)
//!    │
//!    └──▶ Rejected (terminal, requires reason)
//! ```
//!
//! Approval and rejection are both final — a reviewed registration is never
//! reopened. Rejection must carry a non-empty reason, and the engine itself
//! enforces that rather than trusting the caller to have checked.

use serde::{Deserialize, Serialize};

use muni_core::EntityKind;

use crate::audit::Severity;
use crate::lifecycle::{Lifecycle, TransitionCtx, TransitionError};

/// Review status of a citizen registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CitizenStatus {
    /// Registration submitted, awaiting review.
    Pending,
    /// Registration accepted (terminal).
    Approved,
    /// Registration refused with a reason (terminal).
    Rejected,
}

impl Lifecycle for CitizenStatus {
    const KIND: EntityKind = EntityKind::Citizen;

    fn allowed_next(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved | Self::Rejected => &[],
        }
    }

    fn severity(self) -> Severity {
        Severity::Normal
    }

    fn validate(self, requested: Self, ctx: &TransitionCtx<'_>) -> Result<(), TransitionError> {
        if requested == Self::Rejected {
            match ctx.reason {
                Some(reason) if !reason.trim().is_empty() => Ok(()),
                _ => Err(TransitionError::MissingReason { kind: Self::KIND }),
            }
        } else {
            Ok(())
        }
    }
}

impl std::fmt::Display for CitizenStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::transition;

    #[test]
    fn test_pending_to_approved() {
        let next = transition(
            CitizenStatus::Pending,
            CitizenStatus::Approved,
            &TransitionCtx::none(),
        )
        .unwrap();
        assert_eq!(next, CitizenStatus::Approved);
    }

    #[test]
    fn test_pending_to_rejected_with_reason() {
        let next = transition(
            CitizenStatus::Pending,
            CitizenStatus::Rejected,
            &TransitionCtx::with_reason("Incomplete documentation"),
        )
        .unwrap();
        assert_eq!(next, CitizenStatus::Rejected);
    }

    #[test]
    fn test_rejection_without_reason_fails() {
        let err = transition(
            CitizenStatus::Pending,
            CitizenStatus::Rejected,
            &TransitionCtx::none(),
        )
        .unwrap_err();
        assert_eq!(err, TransitionError::MissingReason { kind: EntityKind::Citizen });
    }

    #[test]
    fn test_rejection_with_whitespace_reason_fails() {
        let err = transition(
            CitizenStatus::Pending,
            CitizenStatus::Rejected,
            &TransitionCtx::with_reason("   "),
        )
        .unwrap_err();
        assert!(matches!(err, TransitionError::MissingReason { .. }));
    }

    #[test]
    fn test_approved_is_terminal() {
        assert!(CitizenStatus::Approved.is_terminal());
        assert!(transition(
            CitizenStatus::Approved,
            CitizenStatus::Rejected,
            &TransitionCtx::with_reason("changed my mind"),
        )
        .is_err());
    }

    #[test]
    fn test_rejected_is_terminal() {
        assert!(CitizenStatus::Rejected.is_terminal());
        assert!(transition(
            CitizenStatus::Rejected,
            CitizenStatus::Approved,
            &TransitionCtx::none(),
        )
        .is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(CitizenStatus::Pending.to_string(), "PENDING");
        assert_eq!(CitizenStatus::Approved.to_string(), "APPROVED");
        assert_eq!(CitizenStatus::Rejected.to_string(), "REJECTED");
    }
}
