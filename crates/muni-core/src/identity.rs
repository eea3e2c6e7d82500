//! # Record Identity Newtypes
//!
//! Newtype wrappers for every record identifier in the muni stack. These
//! prevent accidental identifier confusion — you cannot pass a `CitizenId`
//! where a `PollId` is expected.
//!
//! Identifiers render as `kind:uuid` (e.g. `citizen:0000…`) and parse back
//! from either the prefixed or the bare UUID form, so values printed by the
//! CLI can be passed straight back in.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::MuniError;

/// Parse a record identifier, accepting `prefix:uuid` or a bare UUID.
fn parse_prefixed(prefix: &str, s: &str) -> Result<Uuid, MuniError> {
    let raw = s.strip_prefix(prefix).and_then(|r| r.strip_prefix(':')).unwrap_or(s);
    Uuid::parse_str(raw)
        .map_err(|e| MuniError::Validation(format!("invalid {prefix} identifier {s:?}: {e}")))
}

/// Unique identifier for a registered citizen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CitizenId(pub Uuid);

/// Unique identifier for an SOS alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SosAlertId(pub Uuid);

/// Unique identifier for a public notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoticeId(pub Uuid);

/// Unique identifier for a citizen help request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HelpRequestId(pub Uuid);

/// Unique identifier for a volunteer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

/// Unique identifier for a safety alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SafetyAlertId(pub Uuid);

/// Unique identifier for a community poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PollId(pub Uuid);

macro_rules! record_id {
    ($ty:ident, $prefix:literal) => {
        impl $ty {
            /// Generate a fresh random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID (seed fixtures use fixed values).
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Access the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }

        impl FromStr for $ty {
            type Err = MuniError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_prefixed($prefix, s).map(Self)
            }
        }
    };
}

record_id!(CitizenId, "citizen");
record_id!(SosAlertId, "sos");
record_id!(NoticeId, "notice");
record_id!(HelpRequestId, "request");
record_id!(EventId, "event");
record_id!(SafetyAlertId, "alert");
record_id!(PollId, "poll");
