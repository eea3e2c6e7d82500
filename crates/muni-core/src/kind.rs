//! # Entity Taxonomy — Single Source of Truth
//!
//! Defines the `EntityKind` enum covering every record kind the console
//! manages. This is the ONE definition used across the stack: transition
//! errors, audit details, and dashboard breakdowns all name kinds through
//! it, and every `match` on `EntityKind` must be exhaustive.

use serde::{Deserialize, Serialize};

/// Number of entity kinds. Kept in sync with [`EntityKind::ALL`].
pub const ENTITY_KIND_COUNT: usize = 7;

/// Every record kind managed by the ward console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Citizen registration records.
    Citizen,
    /// Emergency SOS alerts raised by citizens.
    SosAlert,
    /// Public notices published by the ward office.
    Notice,
    /// Citizen help requests (road repair, street lights, …).
    HelpRequest,
    /// Volunteer events organized by the ward.
    VolunteerEvent,
    /// Safety alerts broadcast to the ward.
    SafetyAlert,
    /// Community polls.
    Poll,
}

impl EntityKind {
    /// All kinds, in dashboard display order.
    pub const ALL: [EntityKind; ENTITY_KIND_COUNT] = [
        EntityKind::Citizen,
        EntityKind::SosAlert,
        EntityKind::Notice,
        EntityKind::HelpRequest,
        EntityKind::VolunteerEvent,
        EntityKind::SafetyAlert,
        EntityKind::Poll,
    ];

    /// Human-readable label as shown in audit details ("SOS Alert").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Citizen => "Citizen",
            Self::SosAlert => "SOS Alert",
            Self::Notice => "Notice",
            Self::HelpRequest => "Help Request",
            Self::VolunteerEvent => "Volunteer Event",
            Self::SafetyAlert => "Safety Alert",
            Self::Poll => "Poll",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
