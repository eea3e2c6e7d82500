//! # Lifecycle Trait and Transition Engine
//!
//! One generic engine validates every status change in the stack. Each
//! status enum contributes its allowed-transition table through the
//! [`Lifecycle`] trait; call sites never re-check edges themselves.

use thiserror::Error;

use muni_core::EntityKind;

use crate::audit::Severity;

/// Auxiliary data carried by some transitions.
///
/// Today this is only the citizen rejection reason; the struct keeps the
/// engine signature stable if other machines grow context requirements.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitionCtx<'a> {
    /// Reason supplied with the transition, if any.
    pub reason: Option<&'a str>,
}

impl<'a> TransitionCtx<'a> {
    /// Context carrying no auxiliary data.
    pub fn none() -> Self {
        Self::default()
    }

    /// Context carrying a reason string.
    pub fn with_reason(reason: &'a str) -> Self {
        Self { reason: Some(reason) }
    }
}

/// Errors raised by the transition engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransitionError {
    /// The requested status is not reachable from the current one.
    #[error("invalid {kind} transition: {from} -> {to}")]
    InvalidTransition {
        /// The machine the transition was attempted on.
        kind: EntityKind,
        /// Current status name.
        from: String,
        /// Requested status name.
        to: String,
    },

    /// The transition requires a non-empty reason and none was supplied.
    #[error("{kind} rejection requires a non-empty reason")]
    MissingReason {
        /// The machine that demanded the reason.
        kind: EntityKind,
    },
}

/// A status enumeration with an allowed-transition table.
///
/// Implementors are small `Copy` enums. The table is the single source of
/// truth: [`Lifecycle::is_terminal`] is derived from it, so the terminal
/// set can never disagree with the edges.
pub trait Lifecycle: Copy + Eq + std::fmt::Debug + std::fmt::Display + Sized + 'static {
    /// The entity kind this status set belongs to.
    const KIND: EntityKind;

    /// Statuses directly reachable from `self`.
    fn allowed_next(self) -> &'static [Self];

    /// Severity classification of a transition landing on `self`.
    fn severity(self) -> Severity {
        Severity::Normal
    }

    /// Per-machine validation hook, run after the edge check passes.
    fn validate(self, requested: Self, ctx: &TransitionCtx<'_>) -> Result<(), TransitionError> {
        let _ = (requested, ctx);
        Ok(())
    }

    /// Whether `self` has no outgoing edges.
    fn is_terminal(self) -> bool {
        self.allowed_next().is_empty()
    }

    /// Whether `requested` is directly reachable from `self`.
    fn can_reach(self, requested: Self) -> bool {
        self.allowed_next().contains(&requested)
    }
}

/// Validate a status change and return the new status.
///
/// The edge must exist in the machine's table and the machine's validation
/// hook must accept the context. On failure the caller's record is
/// untouched — the engine only ever returns the value to store.
pub fn transition<S: Lifecycle>(
    current: S,
    requested: S,
    ctx: &TransitionCtx<'_>,
) -> Result<S, TransitionError> {
    if !current.can_reach(requested) {
        return Err(TransitionError::InvalidTransition {
            kind: S::KIND,
            from: current.to_string(),
            to: requested.to_string(),
        });
    }
    current.validate(requested, ctx)?;
    Ok(requested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::citizen::CitizenStatus;
    use crate::help::HelpRequestStatus;
    use crate::sos::SosStatus;

    #[test]
    fn test_valid_edge_returns_new_status() {
        let next = transition(
            CitizenStatus::Pending,
            CitizenStatus::Approved,
            &TransitionCtx::none(),
        )
        .unwrap();
        assert_eq!(next, CitizenStatus::Approved);
    }

    #[test]
    fn test_missing_edge_rejected_with_names() {
        let err = transition(
            HelpRequestStatus::Open,
            HelpRequestStatus::Closed,
            &TransitionCtx::none(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            TransitionError::InvalidTransition {
                kind: muni_core::EntityKind::HelpRequest,
                from: "OPEN".into(),
                to: "CLOSED".into(),
            }
        );
    }

    #[test]
    fn test_terminal_state_has_no_edges() {
        assert!(SosStatus::Resolved.is_terminal());
        assert!(!SosStatus::Escalated.is_terminal());
    }

    #[test]
    fn test_hook_runs_after_edge_check() {
        // Missing reason on a valid edge surfaces MissingReason, not
        // InvalidTransition.
        let err = transition(
            CitizenStatus::Pending,
            CitizenStatus::Rejected,
            &TransitionCtx::none(),
        )
        .unwrap_err();
        assert!(matches!(err, TransitionError::MissingReason { .. }));
    }

    #[test]
    fn test_self_transition_is_not_an_edge() {
        assert!(transition(
            SosStatus::Active,
            SosStatus::Active,
            &TransitionCtx::none()
        )
        .is_err());
    }
}
