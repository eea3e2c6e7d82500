//! # Help Request Lifecycle
//!
//! Citizen service requests (road repair, street lights, garbage
//! collection, …) worked by ward teams.
//!
//! ## States
//!
//! ```text
//! Open ──▶ InProgress ──▶ Closed (terminal)
//! ```
//!
//! Strictly sequential: a request cannot be closed without having been
//! started, and a closed request stays closed.

use serde::{Deserialize, Serialize};

use muni_core::EntityKind;

use crate::audit::Severity;
use crate::lifecycle::Lifecycle;

/// Work status of a help request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HelpRequestStatus {
    /// Reported, no work started.
    Open,
    /// A team is working the request.
    InProgress,
    /// Work finished (terminal).
    Closed,
}

impl Lifecycle for HelpRequestStatus {
    const KIND: EntityKind = EntityKind::HelpRequest;

    fn allowed_next(self) -> &'static [Self] {
        match self {
            Self::Open => &[Self::InProgress],
            Self::InProgress => &[Self::Closed],
            Self::Closed => &[],
        }
    }

    fn severity(self) -> Severity {
        match self {
            Self::Closed => Severity::Critical,
            Self::Open | Self::InProgress => Severity::Normal,
        }
    }
}

impl std::fmt::Display for HelpRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Closed => "CLOSED",
        };
        f.write_str(s)
    }
}
