//! # Notice Lifecycle
//!
//! Public notices posted by the ward office.
//!
//! ## States
//!
//! ```text
//! Draft ──▶ Published ──▶ Archived (terminal)
//! ```
//!
//! Archiving is one-way, and a draft cannot be archived directly — it must
//! pass through publication first.

use serde::{Deserialize, Serialize};

use muni_core::EntityKind;

use crate::lifecycle::Lifecycle;

/// Publication status of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoticeStatus {
    /// Written but not visible to citizens.
    Draft,
    /// Visible to citizens of the target ward.
    Published,
    /// Withdrawn from view (terminal).
    Archived,
}

impl Lifecycle for NoticeStatus {
    const KIND: EntityKind = EntityKind::Notice;

    fn allowed_next(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::Published],
            Self::Published => &[Self::Archived],
            Self::Archived => &[],
        }
    }
}

impl std::fmt::Display for NoticeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Archived => "ARCHIVED",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::{transition, TransitionCtx};

    #[test]
    fn test_publish_then_archive() {
        let published = transition(NoticeStatus::Draft, NoticeStatus::Published, &TransitionCtx::none()).unwrap();
        let archived = transition(published, NoticeStatus::Archived, &TransitionCtx::none()).unwrap();
        assert_eq!(archived, NoticeStatus::Archived);
    }

    #[test]
    fn test_draft_cannot_archive_directly() {
        assert!(transition(NoticeStatus::Draft, NoticeStatus::Archived, &TransitionCtx::none()).is_err());
    }

    #[test]
    fn test_archived_is_one_way() {
        assert!(NoticeStatus::Archived.is_terminal());
        assert!(transition(NoticeStatus::Archived, NoticeStatus::Published, &TransitionCtx::none()).is_err());
        assert!(transition(NoticeStatus::Archived, NoticeStatus::Draft, &TransitionCtx::none()).is_err());
    }

    #[test]
    fn test_published_cannot_revert_to_draft() {
        assert!(transition(NoticeStatus::Published, NoticeStatus::Draft, &TransitionCtx::none()).is_err());
    }
}
