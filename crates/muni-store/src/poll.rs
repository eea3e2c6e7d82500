//! # Poll Records
//!
//! Community polls carry their option vote counts and a derived
//! `total_votes`. The invariant `total_votes == Σ option votes` is
//! maintained by the store's vote operation and checkable here.

use serde::{Deserialize, Serialize};

use muni_core::{PollId, Timestamp, Ward};
use muni_state::PollStatus;

/// One answer option with its vote count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    /// Option text shown to voters.
    pub text: String,
    /// Votes received.
    pub votes: u64,
}

/// A community poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Poll {
    /// Unique identifier, immutable after creation.
    pub id: PollId,
    /// The question put to the ward.
    pub question: String,
    /// Answer options in display order.
    pub options: Vec<PollOption>,
    /// Ward the poll targets.
    pub target_ward: Ward,
    /// Advertised duration (free text, e.g. "7 days").
    pub duration: String,
    /// Voting status.
    pub status: PollStatus,
    /// Sum of all option votes.
    pub total_votes: u64,
    /// Decision published when the poll closed.
    pub admin_decision: Option<String>,
    /// When the poll closed.
    pub closed_at: Option<Timestamp>,
}

/// Fields supplied when creating a poll.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollDraft {
    pub question: String,
    /// Option texts; blank entries are dropped.
    pub options: Vec<String>,
    pub target_ward: Ward,
    pub duration: String,
}

impl Poll {
    /// Build a new poll in `Active` status with all counts zeroed,
    /// regardless of input. Blank option texts are filtered out.
    pub fn create(draft: PollDraft) -> Self {
        let options = draft
            .options
            .into_iter()
            .filter(|text| !text.trim().is_empty())
            .map(|text| PollOption { text, votes: 0 })
            .collect();
        Self {
            id: PollId::new(),
            question: draft.question,
            options,
            target_ward: draft.target_ward,
            duration: draft.duration,
            status: PollStatus::Active,
            total_votes: 0,
            admin_decision: None,
            closed_at: None,
        }
    }

    /// Whether `total_votes` equals the sum of the option counts.
    pub fn votes_consistent(&self) -> bool {
        self.total_votes == self.options.iter().map(|o| o.votes).sum::<u64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(options: &[&str]) -> PollDraft {
        PollDraft {
            question: "What time is best for the weekly market?".into(),
            options: options.iter().map(|s| s.to_string()).collect(),
            target_ward: Ward::new("Ward 5").unwrap(),
            duration: "7 days".into(),
        }
    }

    #[test]
    fn test_create_zeroes_counts() {
        let poll = Poll::create(draft(&["A", "B"]));
        assert_eq!(poll.status, PollStatus::Active);
        assert_eq!(poll.total_votes, 0);
        assert!(poll.options.iter().all(|o| o.votes == 0));
        assert!(poll.votes_consistent());
    }

    #[test]
    fn test_create_drops_blank_options() {
        let poll = Poll::create(draft(&["Morning", "", "  ", "Evening"]));
        let texts: Vec<&str> = poll.options.iter().map(|o| o.text.as_str()).collect();
        assert_eq!(texts, vec!["Morning", "Evening"]);
    }

    #[test]
    fn test_votes_consistent_detects_drift() {
        let mut poll = Poll::create(draft(&["A", "B"]));
        poll.options[0].votes = 3;
        assert!(!poll.votes_consistent());
        poll.total_votes = 3;
        assert!(poll.votes_consistent());
    }
}
