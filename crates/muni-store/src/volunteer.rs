//! # Volunteer Event Records
//!
//! Volunteer events carry no lifecycle status. The `registered ≤ required`
//! relationship is a display expectation, not an enforced invariant — the
//! store warns when it is exceeded and registers the volunteer anyway.

use serde::{Deserialize, Serialize};

use muni_core::{EventId, Timestamp};

/// Attendance confirmation for a registered volunteer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attendance {
    Confirmed,
    Pending,
}

/// One registered volunteer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Volunteer {
    pub name: String,
    pub contact: String,
    pub attendance: Attendance,
}

/// A volunteer event organized by the ward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerEvent {
    /// Unique identifier, immutable after creation.
    pub id: EventId,
    /// Event name.
    pub name: String,
    /// What volunteers will do.
    pub description: String,
    /// When the event takes place.
    pub scheduled_for: Timestamp,
    /// Where the event takes place.
    pub location: String,
    /// How many volunteers the organizer asked for.
    pub required_volunteers: u32,
    /// How many volunteers have registered.
    pub registered_volunteers: u32,
    /// Organizing body.
    pub organizer: String,
    /// Registered volunteer roster.
    pub roster: Vec<Volunteer>,
}

/// Fields supplied when creating an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolunteerEventDraft {
    pub name: String,
    pub description: String,
    pub scheduled_for: Timestamp,
    pub location: String,
    pub required_volunteers: u32,
    pub organizer: String,
}

impl VolunteerEvent {
    /// Build a new event with zero registrations, regardless of input.
    pub fn create(draft: VolunteerEventDraft) -> Self {
        Self {
            id: EventId::new(),
            name: draft.name,
            description: draft.description,
            scheduled_for: draft.scheduled_for,
            location: draft.location,
            required_volunteers: draft.required_volunteers,
            registered_volunteers: 0,
            organizer: draft.organizer,
            roster: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_zeroes_registrations() {
        let event = VolunteerEvent::create(VolunteerEventDraft {
            name: "Community Cleanliness Drive".into(),
            description: "Neighborhood cleanup".into(),
            scheduled_for: Timestamp::parse("2025-01-15T08:00:00Z").unwrap(),
            location: "Community Park".into(),
            required_volunteers: 50,
            organizer: "Ward 5 Municipality Office".into(),
        });
        assert_eq!(event.registered_volunteers, 0);
        assert!(event.roster.is_empty());
    }
}
