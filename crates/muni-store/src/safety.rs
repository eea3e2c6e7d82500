//! # Safety Alert Records

use serde::{Deserialize, Serialize};

use muni_core::{SafetyAlertId, Timestamp};
use muni_state::SafetyStatus;

/// Category of a broadcast safety alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SafetyAlertKind {
    RoadClosure,
    PowerOutage,
    WaterSupply,
    WeatherWarning,
}

impl std::fmt::Display for SafetyAlertKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::RoadClosure => "Road Closure",
            Self::PowerOutage => "Power Outage",
            Self::WaterSupply => "Water Supply",
            Self::WeatherWarning => "Weather Warning",
        };
        f.write_str(s)
    }
}

/// Urgency of a safety alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A broadcast alert for the ward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyAlert {
    /// Unique identifier, immutable after creation.
    pub id: SafetyAlertId,
    /// Alert category.
    pub kind: SafetyAlertKind,
    /// Message shown to citizens.
    pub message: String,
    /// Affected area description.
    pub affected_area: String,
    /// Urgency.
    pub priority: Priority,
    /// Broadcast status.
    pub status: SafetyStatus,
    /// When the alert was created.
    pub created_at: Timestamp,
}

/// Fields supplied when creating an alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SafetyAlertDraft {
    pub kind: SafetyAlertKind,
    pub message: String,
    pub affected_area: String,
    pub priority: Priority,
}

impl SafetyAlert {
    /// Build a new alert in `Active` status.
    pub fn create(draft: SafetyAlertDraft) -> Self {
        Self {
            id: SafetyAlertId::new(),
            kind: draft.kind,
            message: draft.message,
            affected_area: draft.affected_area,
            priority: draft.priority,
            status: SafetyStatus::Active,
            created_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_starts_active() {
        let alert = SafetyAlert::create(SafetyAlertDraft {
            kind: SafetyAlertKind::RoadClosure,
            message: "Main Road under construction".into(),
            affected_area: "Main Road, Sector 15".into(),
            priority: Priority::High,
        });
        assert_eq!(alert.status, SafetyStatus::Active);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
    }
}
