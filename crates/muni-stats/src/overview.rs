//! # Dashboard Overview
//!
//! The roll-up shown on the console landing page, plus the individual
//! ratio helpers it is built from.

use serde::Serialize;

use muni_state::{
    CitizenStatus, HelpRequestStatus, NoticeStatus, PollStatus, SafetyStatus, SosStatus,
};
use muni_store::{Citizen, HelpRequest, Poll, VolunteerEvent, WardStore};

/// Guarded division: `0.0` when the denominator is zero.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Fraction of citizen registrations that are approved.
pub fn approval_rate(citizens: &[Citizen]) -> f64 {
    let approved = citizens.iter().filter(|c| c.status == CitizenStatus::Approved).count();
    ratio(approved, citizens.len())
}

/// Fraction of help requests that are closed.
pub fn resolution_rate(requests: &[HelpRequest]) -> f64 {
    let closed = requests.iter().filter(|r| r.status == HelpRequestStatus::Closed).count();
    ratio(closed, requests.len())
}

/// Per-option vote share of a poll, in option order.
///
/// All shares are `0.0` while the poll has no votes.
pub fn option_shares(poll: &Poll) -> Vec<f64> {
    poll.options
        .iter()
        .map(|option| {
            if poll.total_votes == 0 {
                0.0
            } else {
                option.votes as f64 / poll.total_votes as f64
            }
        })
        .collect()
}

/// How full a volunteer event's roster is.
///
/// `0.0` when the organizer asked for zero volunteers; may exceed `1.0`
/// when registration ran over capacity.
pub fn fill_ratio(event: &VolunteerEvent) -> f64 {
    if event.required_volunteers == 0 {
        0.0
    } else {
        event.registered_volunteers as f64 / event.required_volunteers as f64
    }
}

/// The console landing-page summary.
#[derive(Debug, Clone, Serialize)]
pub struct Overview {
    pub total_citizens: usize,
    pub pending_verifications: usize,
    pub approved_citizens: usize,
    pub active_sos: usize,
    pub open_help_requests: usize,
    pub in_progress_help_requests: usize,
    pub published_notices: usize,
    pub volunteer_events: usize,
    pub active_polls: usize,
    pub active_safety_alerts: usize,
    pub approval_rate: f64,
    pub resolution_rate: f64,
}

/// Compute the overview from the current store snapshot.
pub fn overview(store: &WardStore) -> Overview {
    let citizens = store.citizens();
    let requests = store.help_requests();
    Overview {
        total_citizens: citizens.len(),
        pending_verifications: citizens
            .iter()
            .filter(|c| c.status == CitizenStatus::Pending)
            .count(),
        approved_citizens: citizens
            .iter()
            .filter(|c| c.status == CitizenStatus::Approved)
            .count(),
        active_sos: store
            .sos_alerts()
            .iter()
            .filter(|a| a.status == SosStatus::Active)
            .count(),
        open_help_requests: requests
            .iter()
            .filter(|r| r.status == HelpRequestStatus::Open)
            .count(),
        in_progress_help_requests: requests
            .iter()
            .filter(|r| r.status == HelpRequestStatus::InProgress)
            .count(),
        published_notices: store
            .notices()
            .iter()
            .filter(|n| n.status == NoticeStatus::Published)
            .count(),
        volunteer_events: store.volunteer_events().len(),
        active_polls: store
            .polls()
            .iter()
            .filter(|p| p.status == PollStatus::Active)
            .count(),
        active_safety_alerts: store
            .safety_alerts()
            .iter()
            .filter(|a| a.status == SafetyStatus::Active)
            .count(),
        approval_rate: approval_rate(citizens),
        resolution_rate: resolution_rate(requests),
    }
}
