//! # Safety Alert Lifecycle
//!
//! Broadcast alerts (road closures, power outages, weather warnings).
//!
//! ## States
//!
//! ```text
//! Active ──▶ Expired (terminal)
//! ```
//!
//! One-way: an expired alert is never reactivated — a recurring hazard
//! gets a fresh alert.

use serde::{Deserialize, Serialize};

use muni_core::EntityKind;

use crate::lifecycle::Lifecycle;

/// Broadcast status of a safety alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SafetyStatus {
    /// Currently in effect.
    Active,
    /// No longer in effect (terminal).
    Expired,
}

impl Lifecycle for SafetyStatus {
    const KIND: EntityKind = EntityKind::SafetyAlert;

    fn allowed_next(self) -> &'static [Self] {
        match self {
            Self::Active => &[Self::Expired],
            Self::Expired => &[],
        }
    }
}

impl std::fmt::Display for SafetyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Active => "ACTIVE",
            Self::Expired => "EXPIRED",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{transition, TransitionCtx};

    #[test]
    fn test_expire() {
        let next = transition(SafetyStatus::Active, SafetyStatus::Expired, &TransitionCtx::none()).unwrap();
        assert_eq!(next, SafetyStatus::Expired);
    }

    #[test]
    fn test_no_reactivation() {
        assert!(SafetyStatus::Expired.is_terminal());
        assert!(transition(SafetyStatus::Expired, SafetyStatus::Active, &TransitionCtx::none()).is_err());
    }
}
