//! # Notice Records

use serde::{Deserialize, Serialize};

use muni_core::{NoticeId, Timestamp, Ward};
use muni_state::NoticeStatus;

/// Category of a public notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoticeCategory {
    Health,
    Water,
    Electricity,
    Community,
    Emergency,
}

impl std::fmt::Display for NoticeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Health => "Health",
            Self::Water => "Water",
            Self::Electricity => "Electricity",
            Self::Community => "Community",
            Self::Emergency => "Emergency",
        };
        f.write_str(s)
    }
}

/// Whether a newly created notice goes out immediately or stays a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PublishIntent {
    /// Save without publishing.
    Draft,
    /// Publish immediately.
    Publish,
}

impl PublishIntent {
    /// The initial status a creation with this intent produces.
    pub fn initial_status(self) -> NoticeStatus {
        match self {
            Self::Draft => NoticeStatus::Draft,
            Self::Publish => NoticeStatus::Published,
        }
    }
}

/// A public notice posted by the ward office.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    /// Unique identifier, immutable after creation.
    pub id: NoticeId,
    /// Notice headline.
    pub title: String,
    /// Category used for citizen-side filtering.
    pub category: NoticeCategory,
    /// Body text.
    pub description: String,
    /// Attached document name, if any.
    pub attachment: Option<String>,
    /// Ward the notice targets.
    pub target_ward: Ward,
    /// Publication status.
    pub status: NoticeStatus,
    /// When the notice record was created.
    pub created_at: Timestamp,
}

/// Fields supplied when creating a notice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoticeDraft {
    pub title: String,
    pub category: NoticeCategory,
    pub description: String,
    pub attachment: Option<String>,
    pub target_ward: Ward,
}

impl Notice {
    /// Build a new notice with the intent-derived initial status.
    pub fn create(draft: NoticeDraft, intent: PublishIntent) -> Self {
        Self {
            id: NoticeId::new(),
            title: draft.title,
            category: draft.category,
            description: draft.description,
            attachment: draft.attachment,
            target_ward: draft.target_ward,
            status: intent.initial_status(),
            created_at: Timestamp::now(),
        }
    }
}
