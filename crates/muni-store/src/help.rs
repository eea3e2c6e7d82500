//! # Help Request Records

use serde::{Deserialize, Serialize};

use muni_core::{HelpRequestId, Timestamp};
use muni_state::HelpRequestStatus;

/// A citizen service request worked by ward teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpRequest {
    /// Unique identifier, immutable after creation.
    pub id: HelpRequestId,
    /// Request category (e.g. "Road Repair", "Street Light").
    pub kind: String,
    /// What the citizen reported.
    pub description: String,
    /// Where the problem is.
    pub location: String,
    /// Who reported it.
    pub citizen_name: String,
    /// Work status.
    pub status: HelpRequestStatus,
    /// When the request was submitted.
    pub submitted_at: Timestamp,
    /// Attached photo name, if any.
    pub photo: Option<String>,
    /// Team the request is assigned to, if any.
    pub assigned_to: Option<String>,
}

/// Fields supplied when a request is filed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpRequestDraft {
    pub kind: String,
    pub description: String,
    pub location: String,
    pub citizen_name: String,
    pub photo: Option<String>,
}

impl HelpRequest {
    /// Build a new request in `Open` status.
    pub fn file(draft: HelpRequestDraft) -> Self {
        Self {
            id: HelpRequestId::new(),
            kind: draft.kind,
            description: draft.description,
            location: draft.location,
            citizen_name: draft.citizen_name,
            status: HelpRequestStatus::Open,
            submitted_at: Timestamp::now(),
            photo: draft.photo,
            assigned_to: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_starts_open_and_unassigned() {
        let request = HelpRequest::file(HelpRequestDraft {
            kind: "Road Repair".into(),
            description: "Large pothole near Main Market".into(),
            location: "Main Market Road".into(),
            citizen_name: "Sunita Devi".into(),
            photo: None,
        });
        assert_eq!(request.status, HelpRequestStatus::Open);
        assert!(request.assigned_to.is_none());
    }
}
