//! # Admin Console
//!
//! The operation facade: login flow in front, ward store behind. Every
//! record operation checks for a verified session first; the error is the
//! same whether the caller never logged in or already logged out.

use thiserror::Error;
use tracing::info;

use muni_auth::{AuthError, Channel, LoginFlow};
use muni_core::{
    CitizenId, EventId, HelpRequestId, MuniError, NoticeId, PollId, SafetyAlertId, SosAlertId,
};
use muni_state::{
    AuditEntry, CitizenStatus, HelpRequestStatus, NoticeStatus, SafetyStatus, SosStatus,
};
use muni_stats::{overview, Overview};
use muni_store::{
    CitizenDraft, HelpRequestDraft, NoticeDraft, PollDraft, PublishIntent, SafetyAlertDraft,
    SosAlertDraft, StoreError, VolunteerEventDraft, WardStore,
};

use crate::config::ConsoleConfig;

/// Errors surfaced by console operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// A record operation was attempted without a verified session.
    #[error("sign in before performing administrative actions")]
    NotSignedIn,

    /// Login flow failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Store operation failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Foundational type failure (ward labels, timestamps).
    #[error(transparent)]
    Core(#[from] MuniError),

    /// Configuration could not be loaded.
    #[error("config error: {0}")]
    Config(String),
}

/// The ward administration console.
///
/// Owns the login flow and the store; the single-operator, one-action-at-
/// a-time model is structural (`&mut self` throughout).
#[derive(Debug)]
pub struct AdminConsole {
    flow: LoginFlow,
    store: WardStore,
}

impl AdminConsole {
    /// Build a console over an existing store.
    pub fn new(config: &ConsoleConfig, store: WardStore) -> Self {
        Self {
            flow: LoginFlow::new(config.expected_code.clone()),
            store,
        }
    }

    /// Build a console over the Ward 5 seed fixture.
    pub fn seeded(config: &ConsoleConfig) -> Result<Self, ConsoleError> {
        Ok(Self::new(config, muni_store::seed::ward5()?))
    }

    // ─── Authentication ─────────────────────────────────────────────

    /// Submit the credential pair (stage 1 of 2).
    pub fn login(&mut self, email: &str, secret: &str) -> Result<(), ConsoleError> {
        self.flow.submit_credentials(email, secret)?;
        Ok(())
    }

    /// Switch the one-time-code delivery channel.
    pub fn select_channel(&mut self, channel: Channel) -> Result<(), ConsoleError> {
        self.flow.select_channel(channel)?;
        Ok(())
    }

    /// Re-send the one-time code.
    pub fn resend_code(&self) -> Result<(), ConsoleError> {
        self.flow.resend_code()?;
        Ok(())
    }

    /// Submit the one-time code (stage 2 of 2).
    pub fn submit_code(&mut self, code: &str) -> Result<(), ConsoleError> {
        let _start = self.flow.submit_code(code)?;
        info!(operator = %self.store.operator(), "operator session started");
        Ok(())
    }

    /// Return from the code stage to the credential stage.
    pub fn back(&mut self) -> Result<(), ConsoleError> {
        self.flow.back()?;
        Ok(())
    }

    /// End the session; the whole login machine resets to credentials.
    pub fn logout(&mut self) {
        self.flow.logout();
        info!("operator session ended");
    }

    /// Whether a verified session is active.
    pub fn is_signed_in(&self) -> bool {
        self.flow.is_verified()
    }

    fn require_session(&self) -> Result<(), ConsoleError> {
        if !self.flow.is_verified() {
            return Err(ConsoleError::NotSignedIn);
        }
        Ok(())
    }

    // ─── Reads ──────────────────────────────────────────────────────

    /// The store snapshot, for listings.
    pub fn store(&self) -> Result<&WardStore, ConsoleError> {
        self.require_session()?;
        Ok(&self.store)
    }

    /// The dashboard overview, recomputed from the current snapshot.
    pub fn stats(&self) -> Result<Overview, ConsoleError> {
        self.require_session()?;
        Ok(overview(&self.store))
    }

    /// Audit entries in append order, newest last.
    pub fn audit_log(&self) -> Result<&[AuditEntry], ConsoleError> {
        self.require_session()?;
        Ok(self.store.audit_log().entries())
    }

    // ─── Citizen verification ───────────────────────────────────────

    /// Register a citizen (starts `Pending`).
    pub fn register_citizen(&mut self, draft: CitizenDraft) -> Result<CitizenId, ConsoleError> {
        self.require_session()?;
        Ok(self.store.register_citizen(draft))
    }

    /// Approve or reject a registration; rejection requires a reason.
    pub fn update_citizen_status(
        &mut self,
        id: CitizenId,
        status: CitizenStatus,
        reason: Option<&str>,
    ) -> Result<(), ConsoleError> {
        self.require_session()?;
        self.store.update_citizen_status(id, status, reason)?;
        Ok(())
    }

    // ─── SOS alerts ─────────────────────────────────────────────────

    /// Record an incoming SOS alert (starts `Active`).
    pub fn raise_sos(&mut self, draft: SosAlertDraft) -> Result<SosAlertId, ConsoleError> {
        self.require_session()?;
        Ok(self.store.raise_sos(draft))
    }

    /// Acknowledge, resolve, or escalate an alert.
    pub fn update_sos_status(
        &mut self,
        id: SosAlertId,
        status: SosStatus,
    ) -> Result<(), ConsoleError> {
        self.require_session()?;
        self.store.update_sos_status(id, status)?;
        Ok(())
    }

    // ─── Notices ────────────────────────────────────────────────────

    /// Create a notice as a draft or published, per intent.
    pub fn create_notice(
        &mut self,
        draft: NoticeDraft,
        intent: PublishIntent,
    ) -> Result<NoticeId, ConsoleError> {
        self.require_session()?;
        Ok(self.store.create_notice(draft, intent))
    }

    /// Publish or archive a notice.
    pub fn update_notice_status(
        &mut self,
        id: NoticeId,
        status: NoticeStatus,
    ) -> Result<(), ConsoleError> {
        self.require_session()?;
        self.store.update_notice_status(id, status)?;
        Ok(())
    }

    // ─── Help requests ──────────────────────────────────────────────

    /// File an incoming help request (starts `Open`).
    pub fn file_help_request(
        &mut self,
        draft: HelpRequestDraft,
    ) -> Result<HelpRequestId, ConsoleError> {
        self.require_session()?;
        Ok(self.store.file_help_request(draft))
    }

    /// Start or close a help request (strictly sequential).
    pub fn update_help_request_status(
        &mut self,
        id: HelpRequestId,
        status: HelpRequestStatus,
    ) -> Result<(), ConsoleError> {
        self.require_session()?;
        self.store.update_help_request_status(id, status)?;
        Ok(())
    }

    /// Assign a help request to a ward team.
    pub fn assign_help_request(
        &mut self,
        id: HelpRequestId,
        assignee: &str,
    ) -> Result<(), ConsoleError> {
        self.require_session()?;
        self.store.assign_help_request(id, assignee)?;
        Ok(())
    }

    // ─── Volunteer events ───────────────────────────────────────────

    /// Create a volunteer event (zero registrations).
    pub fn create_volunteer_event(
        &mut self,
        draft: VolunteerEventDraft,
    ) -> Result<EventId, ConsoleError> {
        self.require_session()?;
        Ok(self.store.create_volunteer_event(draft))
    }

    /// Register a volunteer for an event.
    pub fn register_volunteer(
        &mut self,
        id: EventId,
        name: &str,
        contact: &str,
    ) -> Result<(), ConsoleError> {
        self.require_session()?;
        self.store.register_volunteer(id, name, contact)?;
        Ok(())
    }

    // ─── Safety alerts ──────────────────────────────────────────────

    /// Create a safety alert (starts `Active`).
    pub fn create_safety_alert(
        &mut self,
        draft: SafetyAlertDraft,
    ) -> Result<SafetyAlertId, ConsoleError> {
        self.require_session()?;
        Ok(self.store.create_safety_alert(draft))
    }

    /// Expire a safety alert.
    pub fn update_safety_alert_status(
        &mut self,
        id: SafetyAlertId,
        status: SafetyStatus,
    ) -> Result<(), ConsoleError> {
        self.require_session()?;
        self.store.update_safety_alert_status(id, status)?;
        Ok(())
    }

    // ─── Polls ──────────────────────────────────────────────────────

    /// Create a poll (starts `Active`, counts zeroed).
    pub fn create_poll(&mut self, draft: PollDraft) -> Result<PollId, ConsoleError> {
        self.require_session()?;
        Ok(self.store.create_poll(draft))
    }

    /// Record one vote for a poll option.
    pub fn record_vote(&mut self, id: PollId, option_index: usize) -> Result<(), ConsoleError> {
        self.require_session()?;
        self.store.record_vote(id, option_index)?;
        Ok(())
    }

    /// Close a poll, optionally publishing a decision.
    pub fn close_poll(
        &mut self,
        id: PollId,
        decision: Option<String>,
    ) -> Result<(), ConsoleError> {
        self.require_session()?;
        self.store.close_poll(id, decision)?;
        Ok(())
    }
}
