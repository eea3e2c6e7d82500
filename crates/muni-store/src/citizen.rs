//! # Citizen Records
//!
//! A registration record for a ward resident, optionally carrying a
//! service-provider profile (plumbers, electricians, clinics register
//! through the same flow).

use serde::{Deserialize, Serialize};

use muni_core::{CitizenId, Timestamp, Ward};
use muni_state::CitizenStatus;

/// Service-provider profile attached to a citizen registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceProfile {
    /// Trade offered (e.g. "Plumber", "Electrician", "Medical").
    pub service_type: String,
    /// Registered business name.
    pub business_name: String,
}

/// A citizen registration record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citizen {
    /// Unique identifier, immutable after creation.
    pub id: CitizenId,
    /// Full name (or business name for service providers).
    pub name: String,
    /// Street address.
    pub address: String,
    /// Ward the citizen lives in.
    pub ward: Ward,
    /// Contact phone number.
    pub phone: String,
    /// Contact email address.
    pub email: String,
    /// When the registration was submitted.
    pub registered_at: Timestamp,
    /// Review status.
    pub status: CitizenStatus,
    /// Reason recorded on rejection.
    pub rejection_reason: Option<String>,
    /// Present when the citizen registered as a service provider.
    pub service_provider: Option<ServiceProfile>,
    /// Number of help requests previously filed.
    pub past_requests: u32,
}

/// Fields supplied when registering a citizen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitizenDraft {
    pub name: String,
    pub address: String,
    pub ward: Ward,
    pub phone: String,
    pub email: String,
    pub service_provider: Option<ServiceProfile>,
}

impl Citizen {
    /// Build a new registration in `Pending` status from a draft.
    pub fn register(draft: CitizenDraft) -> Self {
        Self {
            id: CitizenId::new(),
            name: draft.name,
            address: draft.address,
            ward: draft.ward,
            phone: draft.phone,
            email: draft.email,
            registered_at: Timestamp::now(),
            status: CitizenStatus::Pending,
            rejection_reason: None,
            service_provider: draft.service_provider,
            past_requests: 0,
        }
    }

    /// Whether this registration carries a service-provider profile.
    pub fn is_service_provider(&self) -> bool {
        self.service_provider.is_some()
    }
}
