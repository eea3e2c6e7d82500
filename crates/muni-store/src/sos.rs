//! # SOS Alert Records

use serde::{Deserialize, Serialize};

use muni_core::{SosAlertId, Timestamp, Ward};
use muni_state::SosStatus;

/// An emergency alert raised by a citizen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SosAlert {
    /// Unique identifier, immutable after creation.
    pub id: SosAlertId,
    /// Name of the citizen who raised the alert.
    pub citizen_name: String,
    /// Ward the alert originated from.
    pub ward: Ward,
    /// Location reported with the alert.
    pub location: String,
    /// When the alert was raised.
    pub raised_at: Timestamp,
    /// Emergency contact number.
    pub emergency_contact: String,
    /// Triage status.
    pub status: SosStatus,
    /// Emergency category if reported (e.g. "Medical Emergency").
    pub kind: Option<String>,
}

/// Fields supplied when an alert arrives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SosAlertDraft {
    pub citizen_name: String,
    pub ward: Ward,
    pub location: String,
    pub emergency_contact: String,
    pub kind: Option<String>,
}

impl SosAlert {
    /// Build a new alert in `Active` status.
    pub fn raise(draft: SosAlertDraft) -> Self {
        Self {
            id: SosAlertId::new(),
            citizen_name: draft.citizen_name,
            ward: draft.ward,
            location: draft.location,
            raised_at: Timestamp::now(),
            emergency_contact: draft.emergency_contact,
            status: SosStatus::Active,
            kind: draft.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_starts_active() {
        let alert = SosAlert::raise(SosAlertDraft {
            citizen_name: "Amit Patel".into(),
            ward: Ward::new("Ward 5").unwrap(),
            location: "No. 89, Gandhi Street".into(),
            emergency_contact: "+91 98765 43212".into(),
            kind: Some("Medical Emergency".into()),
        });
        assert_eq!(alert.status, SosStatus::Active);
    }
}
