//! # SOS Alert Lifecycle
//!
//! Emergency alerts raised by citizens, triaged by the ward administrator.
//!
//! ## States
//!
//! ```text
//! Active ──▶ Acknowledged ──▶ Resolved (terminal)
//!   │  │            │
//!   │  └──▶ Resolved│
//!   │                └──▶ Escalated ──▶ Resolved
//!   └──▶ Escalated
//! ```
//!
//! An alert can be resolved from any live state, and escalated from any
//! live state except after resolution — `Resolved` is the only terminal
//! state and nothing leaves it.

use serde::{Deserialize, Serialize};

use muni_core::EntityKind;

use crate::audit::Severity;
use crate::lifecycle::Lifecycle;

/// Triage status of an SOS alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SosStatus {
    /// Alert raised, not yet seen by the administrator.
    Active,
    /// Administrator has acknowledged the alert.
    Acknowledged,
    /// Emergency handled (terminal).
    Resolved,
    /// Forwarded to district emergency services.
    Escalated,
}

impl Lifecycle for SosStatus {
    const KIND: EntityKind = EntityKind::SosAlert;

    fn allowed_next(self) -> &'static [Self] {
        match self {
            Self::Active => &[Self::Acknowledged, Self::Resolved, Self::Escalated],
            Self::Acknowledged => &[Self::Resolved, Self::Escalated],
            Self::Escalated => &[Self::Resolved],
            Self::Resolved => &[],
        }
    }

    fn severity(self) -> Severity {
        match self {
            // Resolution and escalation are safety-impacting.
            Self::Resolved | Self::Escalated => Severity::Critical,
            Self::Active | Self::Acknowledged => Severity::Normal,
        }
    }
}

impl std::fmt::Display for SosStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "ACTIVE",
            Self::Acknowledged => "ACKNOWLEDGED",
            Self::Resolved => "RESOLVED",
            Self::Escalated => "ESCALATED",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{transition, TransitionCtx};

    fn step(from: SosStatus, to: SosStatus) -> Result<SosStatus, crate::TransitionError> {
        transition(from, to, &TransitionCtx::none())
    }

    #[test]
    fn test_active_to_acknowledged() {
        assert_eq!(step(SosStatus::Active, SosStatus::Acknowledged).unwrap(), SosStatus::Acknowledged);
    }

    #[test]
    fn test_resolve_from_any_live_state() {
        assert!(step(SosStatus::Active, SosStatus::Resolved).is_ok());
        assert!(step(SosStatus::Acknowledged, SosStatus::Resolved).is_ok());
        assert!(step(SosStatus::Escalated, SosStatus::Resolved).is_ok());
    }

    #[test]
    fn test_escalate_before_resolution() {
        assert!(step(SosStatus::Active, SosStatus::Escalated).is_ok());
        assert!(step(SosStatus::Acknowledged, SosStatus::Escalated).is_ok());
    }

    #[test]
    fn test_escalate_after_resolution_fails() {
        let err = step(SosStatus::Resolved, SosStatus::Escalated).unwrap_err();
        assert!(matches!(err, crate::TransitionError::InvalidTransition { .. }));
    }

    #[test]
    fn test_resolved_is_only_terminal() {
        assert!(SosStatus::Resolved.is_terminal());
        assert!(!SosStatus::Active.is_terminal());
        assert!(!SosStatus::Acknowledged.is_terminal());
        assert!(!SosStatus::Escalated.is_terminal());
    }

    #[test]
    fn test_acknowledge_after_acknowledge_fails() {
        assert!(step(SosStatus::Acknowledged, SosStatus::Acknowledged).is_err());
        assert!(step(SosStatus::Escalated, SosStatus::Acknowledged).is_err());
    }

    #[test]
    fn test_severity_mapping() {
        assert_eq!(SosStatus::Resolved.severity(), Severity::Critical);
        assert_eq!(SosStatus::Escalated.severity(), Severity::Critical);
        assert_eq!(SosStatus::Acknowledged.severity(), Severity::Normal);
    }
}
