//! # Ward Store
//!
//! The owned aggregate holding every record collection plus the audit log.
//! All mutation goes through `&mut self` operations; status changes are
//! validated by the lifecycle engine and audited on success only.

use thiserror::Error;
use tracing::{info, warn};

use muni_core::{
    CitizenId, EntityKind, EventId, HelpRequestId, NoticeId, Operator, PollId, SafetyAlertId,
    SosAlertId, Timestamp, Ward,
};
use muni_state::{
    transition, AuditLog, CitizenStatus, HelpRequestStatus, Lifecycle, NoticeStatus, PollStatus,
    SafetyStatus, SosStatus, TransitionCtx, TransitionError,
};

use crate::citizen::{Citizen, CitizenDraft};
use crate::help::{HelpRequest, HelpRequestDraft};
use crate::notice::{Notice, NoticeDraft, PublishIntent};
use crate::poll::{Poll, PollDraft};
use crate::safety::{SafetyAlert, SafetyAlertDraft};
use crate::sos::{SosAlert, SosAlertDraft};
use crate::volunteer::{Attendance, Volunteer, VolunteerEvent, VolunteerEventDraft};

/// Errors raised by store operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the given identifier.
    #[error("{kind} {id} not found")]
    NotFound {
        /// Kind of the missing record.
        kind: EntityKind,
        /// The identifier that failed to resolve.
        id: String,
    },

    /// A status change was rejected by the lifecycle engine.
    #[error(transparent)]
    Transition(#[from] TransitionError),

    /// Vote recorded against a poll that is not accepting votes.
    #[error("poll {id} is not accepting votes")]
    PollClosed {
        /// The closed poll.
        id: PollId,
    },

    /// Vote recorded against an option index the poll does not have.
    #[error("poll {id} has no option at index {index}")]
    NoSuchOption {
        /// The poll voted on.
        id: PollId,
        /// The out-of-range option index.
        index: usize,
    },
}

/// All record collections for one ward, plus the audit log.
///
/// Collections are plain vectors in display order — the dataset is small
/// and session-lifetime, and iteration order matters more than lookup
/// speed. Records are never removed.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct WardStore {
    ward: Ward,
    operator: Operator,
    citizens: Vec<Citizen>,
    sos_alerts: Vec<SosAlert>,
    notices: Vec<Notice>,
    help_requests: Vec<HelpRequest>,
    volunteer_events: Vec<VolunteerEvent>,
    safety_alerts: Vec<SafetyAlert>,
    polls: Vec<Poll>,
    audit: AuditLog,
}

impl WardStore {
    /// Create an empty store for a ward.
    pub fn new(ward: Ward, operator: Operator) -> Self {
        Self {
            ward,
            operator,
            citizens: Vec::new(),
            sos_alerts: Vec::new(),
            notices: Vec::new(),
            help_requests: Vec::new(),
            volunteer_events: Vec::new(),
            safety_alerts: Vec::new(),
            polls: Vec::new(),
            audit: AuditLog::new(),
        }
    }

    // ─── Read access ────────────────────────────────────────────────

    /// The ward this store serves.
    pub fn ward(&self) -> &Ward {
        &self.ward
    }

    /// The operator recorded on audit entries.
    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    /// Citizen registrations in display order.
    pub fn citizens(&self) -> &[Citizen] {
        &self.citizens
    }

    /// SOS alerts in display order.
    pub fn sos_alerts(&self) -> &[SosAlert] {
        &self.sos_alerts
    }

    /// Notices in display order.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Help requests in display order.
    pub fn help_requests(&self) -> &[HelpRequest] {
        &self.help_requests
    }

    /// Volunteer events in display order.
    pub fn volunteer_events(&self) -> &[VolunteerEvent] {
        &self.volunteer_events
    }

    /// Safety alerts in display order.
    pub fn safety_alerts(&self) -> &[SafetyAlert] {
        &self.safety_alerts
    }

    /// Polls in display order.
    pub fn polls(&self) -> &[Poll] {
        &self.polls
    }

    /// The audit log, ordered newest last.
    pub fn audit_log(&self) -> &AuditLog {
        &self.audit
    }

    // ─── Intake operations ──────────────────────────────────────────

    /// Register a citizen; the registration starts `Pending`.
    pub fn register_citizen(&mut self, draft: CitizenDraft) -> CitizenId {
        let citizen = Citizen::register(draft);
        let id = citizen.id;
        info!(%id, name = %citizen.name, "citizen registered");
        self.citizens.push(citizen);
        id
    }

    /// Record an incoming SOS alert; the alert starts `Active`.
    pub fn raise_sos(&mut self, draft: SosAlertDraft) -> SosAlertId {
        let alert = SosAlert::raise(draft);
        let id = alert.id;
        info!(%id, citizen = %alert.citizen_name, "sos alert raised");
        self.sos_alerts.push(alert);
        id
    }

    /// File an incoming help request; the request starts `Open`.
    pub fn file_help_request(&mut self, draft: HelpRequestDraft) -> HelpRequestId {
        let request = HelpRequest::file(draft);
        let id = request.id;
        info!(%id, kind = %request.kind, "help request filed");
        self.help_requests.push(request);
        id
    }

    // ─── Creation operations ────────────────────────────────────────

    /// Create a notice with the intent-derived initial status.
    pub fn create_notice(&mut self, draft: NoticeDraft, intent: PublishIntent) -> NoticeId {
        let notice = Notice::create(draft, intent);
        let id = notice.id;
        info!(%id, status = %notice.status, title = %notice.title, "notice created");
        self.notices.push(notice);
        id
    }

    /// Create a safety alert; the alert starts `Active`.
    pub fn create_safety_alert(&mut self, draft: SafetyAlertDraft) -> SafetyAlertId {
        let alert = SafetyAlert::create(draft);
        let id = alert.id;
        info!(%id, kind = %alert.kind, "safety alert created");
        self.safety_alerts.push(alert);
        id
    }

    /// Create a volunteer event with zero registrations.
    pub fn create_volunteer_event(&mut self, draft: VolunteerEventDraft) -> EventId {
        let event = VolunteerEvent::create(draft);
        let id = event.id;
        info!(%id, name = %event.name, "volunteer event created");
        self.volunteer_events.push(event);
        id
    }

    /// Create a poll; the poll starts `Active` with all counts zeroed.
    pub fn create_poll(&mut self, draft: PollDraft) -> PollId {
        let poll = Poll::create(draft);
        let id = poll.id;
        info!(%id, question = %poll.question, "poll created");
        self.polls.push(poll);
        id
    }

    // ─── Status transitions ─────────────────────────────────────────

    /// Approve or reject a citizen registration.
    ///
    /// Rejection requires a non-empty `reason`; the trimmed reason is
    /// stored on the record.
    pub fn update_citizen_status(
        &mut self,
        id: CitizenId,
        requested: CitizenStatus,
        reason: Option<&str>,
    ) -> Result<(), StoreError> {
        let idx = self
            .citizens
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| not_found(EntityKind::Citizen, &id))?;
        let ctx = reason.map_or_else(TransitionCtx::none, TransitionCtx::with_reason);
        let next = self.validated(self.citizens[idx].status, requested, &ctx, &id)?;

        let citizen = &mut self.citizens[idx];
        citizen.status = next;
        let (action, details) = match next {
            CitizenStatus::Approved => (
                "Citizen Approved",
                format!("Approved registration for {}", citizen.name),
            ),
            CitizenStatus::Rejected => {
                let reason = reason.unwrap_or_default().trim().to_string();
                let details = format!("Rejected registration for {}: {reason}", citizen.name);
                citizen.rejection_reason = Some(reason);
                ("Citizen Rejected", details)
            }
            // Not a transition target; kept for match exhaustiveness.
            CitizenStatus::Pending => ("Citizen Pending", format!("{} pending", citizen.name)),
        };
        self.audit.append(action, details, &self.operator, next.severity());
        Ok(())
    }

    /// Acknowledge, resolve, or escalate an SOS alert.
    pub fn update_sos_status(
        &mut self,
        id: SosAlertId,
        requested: SosStatus,
    ) -> Result<(), StoreError> {
        let idx = self
            .sos_alerts
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| not_found(EntityKind::SosAlert, &id))?;
        let next = self.validated(self.sos_alerts[idx].status, requested, &TransitionCtx::none(), &id)?;

        let alert = &mut self.sos_alerts[idx];
        alert.status = next;
        let action = match next {
            SosStatus::Acknowledged => "SOS Alert Acknowledged",
            SosStatus::Resolved => "SOS Alert Resolved",
            SosStatus::Escalated => "SOS Alert Escalated",
            SosStatus::Active => "SOS Alert Active",
        };
        let kind = alert.kind.as_deref().unwrap_or("Emergency");
        let details = format!("{action} for {} - {kind}", alert.citizen_name);
        self.audit.append(action, details, &self.operator, next.severity());
        Ok(())
    }

    /// Publish or archive a notice.
    pub fn update_notice_status(
        &mut self,
        id: NoticeId,
        requested: NoticeStatus,
    ) -> Result<(), StoreError> {
        let idx = self
            .notices
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| not_found(EntityKind::Notice, &id))?;
        let next = self.validated(self.notices[idx].status, requested, &TransitionCtx::none(), &id)?;

        let notice = &mut self.notices[idx];
        notice.status = next;
        let action = match next {
            NoticeStatus::Published => "Notice Published",
            NoticeStatus::Archived => "Notice Archived",
            NoticeStatus::Draft => "Notice Drafted",
        };
        let details = format!("{action}: {}", notice.title);
        self.audit.append(action, details, &self.operator, next.severity());
        Ok(())
    }

    /// Start or close a help request.
    pub fn update_help_request_status(
        &mut self,
        id: HelpRequestId,
        requested: HelpRequestStatus,
    ) -> Result<(), StoreError> {
        let idx = self
            .help_requests
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| not_found(EntityKind::HelpRequest, &id))?;
        let next = self.validated(self.help_requests[idx].status, requested, &TransitionCtx::none(), &id)?;

        let request = &mut self.help_requests[idx];
        request.status = next;
        let action = match next {
            HelpRequestStatus::InProgress => "Help Request Started",
            HelpRequestStatus::Closed => "Help Request Closed",
            HelpRequestStatus::Open => "Help Request Opened",
        };
        let details = format!("{action}: {}", request.kind);
        self.audit.append(action, details, &self.operator, next.severity());
        Ok(())
    }

    /// Expire a safety alert.
    pub fn update_safety_alert_status(
        &mut self,
        id: SafetyAlertId,
        requested: SafetyStatus,
    ) -> Result<(), StoreError> {
        let idx = self
            .safety_alerts
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| not_found(EntityKind::SafetyAlert, &id))?;
        let next = self.validated(self.safety_alerts[idx].status, requested, &TransitionCtx::none(), &id)?;

        let alert = &mut self.safety_alerts[idx];
        alert.status = next;
        let action = match next {
            SafetyStatus::Expired => "Safety Alert Expired",
            SafetyStatus::Active => "Safety Alert Activated",
        };
        let details = format!("{action}: {} - {}", alert.kind, alert.affected_area);
        self.audit.append(action, details, &self.operator, next.severity());
        Ok(())
    }

    /// Close a poll, optionally publishing the administrator's decision.
    pub fn close_poll(&mut self, id: PollId, decision: Option<String>) -> Result<(), StoreError> {
        let idx = self
            .polls
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| not_found(EntityKind::Poll, &id))?;
        let next = self.validated(self.polls[idx].status, PollStatus::Closed, &TransitionCtx::none(), &id)?;

        let poll = &mut self.polls[idx];
        poll.status = next;
        poll.admin_decision = decision;
        poll.closed_at = Some(Timestamp::now());
        let details = format!("Closed poll: {}", poll.question);
        self.audit.append("Poll Closed", details, &self.operator, next.severity());
        Ok(())
    }

    // ─── Field operations ───────────────────────────────────────────

    /// Assign a help request to a ward team.
    pub fn assign_help_request(
        &mut self,
        id: HelpRequestId,
        assignee: impl Into<String>,
    ) -> Result<(), StoreError> {
        let request = self
            .help_requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| not_found(EntityKind::HelpRequest, &id))?;
        let assignee = assignee.into();
        let details = format!("Assigned {} to {assignee}", request.kind);
        request.assigned_to = Some(assignee);
        self.audit.append(
            "Help Request Assigned",
            details,
            &self.operator,
            muni_state::Severity::Normal,
        );
        Ok(())
    }

    /// Record one vote for an option of an active poll.
    ///
    /// Maintains `total_votes == Σ option votes`.
    pub fn record_vote(&mut self, id: PollId, option_index: usize) -> Result<(), StoreError> {
        let poll = self
            .polls
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found(EntityKind::Poll, &id))?;
        if poll.status != PollStatus::Active {
            return Err(StoreError::PollClosed { id });
        }
        let Some(option) = poll.options.get_mut(option_index) else {
            return Err(StoreError::NoSuchOption { id, index: option_index });
        };
        option.votes += 1;
        poll.total_votes += 1;
        Ok(())
    }

    /// Register a volunteer for an event.
    ///
    /// Exceeding `required_volunteers` is allowed — the capacity is a
    /// display target, not a limit — but logged as a warning.
    pub fn register_volunteer(
        &mut self,
        id: EventId,
        name: impl Into<String>,
        contact: impl Into<String>,
    ) -> Result<(), StoreError> {
        let event = self
            .volunteer_events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| not_found(EntityKind::VolunteerEvent, &id))?;
        event.roster.push(Volunteer {
            name: name.into(),
            contact: contact.into(),
            attendance: Attendance::Pending,
        });
        event.registered_volunteers += 1;
        if event.registered_volunteers > event.required_volunteers {
            warn!(
                %id,
                registered = event.registered_volunteers,
                required = event.required_volunteers,
                "volunteer event over capacity"
            );
        }
        Ok(())
    }

    // ─── Internal ───────────────────────────────────────────────────

    /// Run the lifecycle engine, logging the outcome.
    fn validated<S: Lifecycle>(
        &self,
        current: S,
        requested: S,
        ctx: &TransitionCtx<'_>,
        id: &dyn std::fmt::Display,
    ) -> Result<S, StoreError> {
        match transition(current, requested, ctx) {
            Ok(next) => {
                info!(id = %id, from = %current, to = %next, "transition applied");
                Ok(next)
            }
            Err(e) => {
                warn!(id = %id, from = %current, to = %requested, error = %e, "transition rejected");
                Err(e.into())
            }
        }
    }

    /// Seed access: push a pre-built record without auditing.
    pub(crate) fn seed_citizen(&mut self, citizen: Citizen) {
        self.citizens.push(citizen);
    }

    pub(crate) fn seed_sos_alert(&mut self, alert: SosAlert) {
        self.sos_alerts.push(alert);
    }

    pub(crate) fn seed_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub(crate) fn seed_help_request(&mut self, request: HelpRequest) {
        self.help_requests.push(request);
    }

    pub(crate) fn seed_volunteer_event(&mut self, event: VolunteerEvent) {
        self.volunteer_events.push(event);
    }

    pub(crate) fn seed_safety_alert(&mut self, alert: SafetyAlert) {
        self.safety_alerts.push(alert);
    }

    pub(crate) fn seed_poll(&mut self, poll: Poll) {
        self.polls.push(poll);
    }
}

fn not_found(kind: EntityKind, id: &dyn std::fmt::Display) -> StoreError {
    StoreError::NotFound { kind, id: id.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeCategory;
    use muni_state::Severity;

    fn ward() -> Ward {
        Ward::new("Ward 5").unwrap()
    }

    fn store() -> WardStore {
        WardStore::new(ward(), Operator::default())
    }

    fn citizen_draft(name: &str) -> CitizenDraft {
        CitizenDraft {
            name: name.into(),
            address: "No. 45, Kamaraj Nagar".into(),
            ward: ward(),
            phone: "+91 98765 43210".into(),
            email: "citizen@email.com".into(),
            service_provider: None,
        }
    }

    fn sos_draft() -> SosAlertDraft {
        SosAlertDraft {
            citizen_name: "Amit Patel".into(),
            ward: ward(),
            location: "No. 89, Gandhi Street".into(),
            emergency_contact: "+91 98765 43212".into(),
            kind: Some("Medical Emergency".into()),
        }
    }

    fn poll_draft() -> PollDraft {
        PollDraft {
            question: "Install more CCTV cameras?".into(),
            options: vec!["Yes".into(), "No".into()],
            target_ward: ward(),
            duration: "10 days".into(),
        }
    }

    // ── Citizen verification ─────────────────────────────────────────

    #[test]
    fn test_approve_citizen_appends_audit() {
        let mut store = store();
        let id = store.register_citizen(citizen_draft("Priya Sharma"));
        store.update_citizen_status(id, CitizenStatus::Approved, None).unwrap();

        assert_eq!(store.citizens()[0].status, CitizenStatus::Approved);
        let entry = store.audit_log().latest().unwrap();
        assert_eq!(entry.action, "Citizen Approved");
        assert_eq!(entry.severity, Severity::Normal);
        assert_eq!(entry.details, "Approved registration for Priya Sharma");
    }

    #[test]
    fn test_reject_citizen_stores_trimmed_reason() {
        let mut store = store();
        let id = store.register_citizen(citizen_draft("Arun Mohan"));
        store
            .update_citizen_status(id, CitizenStatus::Rejected, Some("  Incomplete documentation "))
            .unwrap();

        let citizen = &store.citizens()[0];
        assert_eq!(citizen.status, CitizenStatus::Rejected);
        assert_eq!(citizen.rejection_reason.as_deref(), Some("Incomplete documentation"));
    }

    #[test]
    fn test_reject_without_reason_leaves_record_untouched() {
        let mut store = store();
        let id = store.register_citizen(citizen_draft("Arun Mohan"));
        let err = store.update_citizen_status(id, CitizenStatus::Rejected, None).unwrap_err();

        assert!(matches!(err, StoreError::Transition(TransitionError::MissingReason { .. })));
        assert_eq!(store.citizens()[0].status, CitizenStatus::Pending);
        assert!(store.citizens()[0].rejection_reason.is_none());
        assert!(store.audit_log().is_empty());
    }

    #[test]
    fn test_approve_twice_fails_without_audit() {
        let mut store = store();
        let id = store.register_citizen(citizen_draft("Priya Sharma"));
        store.update_citizen_status(id, CitizenStatus::Approved, None).unwrap();
        let before = store.audit_log().len();

        let err = store.update_citizen_status(id, CitizenStatus::Approved, None).unwrap_err();
        assert!(matches!(err, StoreError::Transition(TransitionError::InvalidTransition { .. })));
        assert_eq!(store.audit_log().len(), before);
    }

    #[test]
    fn test_unknown_citizen_id() {
        let mut store = store();
        let err = store
            .update_citizen_status(CitizenId::new(), CitizenStatus::Approved, None)
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { kind: EntityKind::Citizen, .. }));
    }

    // ── SOS alerts ───────────────────────────────────────────────────

    #[test]
    fn test_sos_resolve_then_escalate_fails() {
        let mut store = store();
        let id = store.raise_sos(sos_draft());
        store.update_sos_status(id, SosStatus::Resolved).unwrap();

        let err = store.update_sos_status(id, SosStatus::Escalated).unwrap_err();
        assert!(matches!(err, StoreError::Transition(TransitionError::InvalidTransition { .. })));
        assert_eq!(store.sos_alerts()[0].status, SosStatus::Resolved);
        // Only the resolution was audited.
        assert_eq!(store.audit_log().len(), 1);
        assert_eq!(store.audit_log().latest().unwrap().severity, Severity::Critical);
    }

    #[test]
    fn test_sos_details_name_citizen_and_kind() {
        let mut store = store();
        let id = store.raise_sos(sos_draft());
        store.update_sos_status(id, SosStatus::Acknowledged).unwrap();
        let entry = store.audit_log().latest().unwrap();
        assert_eq!(entry.details, "SOS Alert Acknowledged for Amit Patel - Medical Emergency");
    }

    // ── Notices ──────────────────────────────────────────────────────

    #[test]
    fn test_notice_draft_publish_archive() {
        let mut store = store();
        let id = store.create_notice(
            NoticeDraft {
                title: "Property Tax Payment Reminder".into(),
                category: NoticeCategory::Community,
                description: "Last date January 31".into(),
                attachment: None,
                target_ward: ward(),
            },
            PublishIntent::Draft,
        );
        assert!(store.audit_log().is_empty(), "creation is not audited");

        store.update_notice_status(id, NoticeStatus::Published).unwrap();
        store.update_notice_status(id, NoticeStatus::Archived).unwrap();
        assert_eq!(store.notices()[0].status, NoticeStatus::Archived);
        assert_eq!(store.audit_log().len(), 2);
    }

    // ── Help requests ────────────────────────────────────────────────

    #[test]
    fn test_help_request_cannot_skip_in_progress() {
        let mut store = store();
        let id = store.file_help_request(HelpRequestDraft {
            kind: "Street Light".into(),
            description: "Not working for 3 days".into(),
            location: "Anna Nagar".into(),
            citizen_name: "Prakash Rao".into(),
            photo: None,
        });

        assert!(store.update_help_request_status(id, HelpRequestStatus::Closed).is_err());
        assert_eq!(store.help_requests()[0].status, HelpRequestStatus::Open);

        store.update_help_request_status(id, HelpRequestStatus::InProgress).unwrap();
        store.update_help_request_status(id, HelpRequestStatus::Closed).unwrap();
        assert_eq!(store.audit_log().latest().unwrap().action, "Help Request Closed");
        assert_eq!(store.audit_log().latest().unwrap().severity, Severity::Critical);
    }

    #[test]
    fn test_assign_help_request() {
        let mut store = store();
        let id = store.file_help_request(HelpRequestDraft {
            kind: "Street Light".into(),
            description: "Not working".into(),
            location: "Anna Nagar".into(),
            citizen_name: "Prakash Rao".into(),
            photo: None,
        });
        store.assign_help_request(id, "Electrician Team A").unwrap();

        assert_eq!(store.help_requests()[0].assigned_to.as_deref(), Some("Electrician Team A"));
        let entry = store.audit_log().latest().unwrap();
        assert_eq!(entry.action, "Help Request Assigned");
        assert_eq!(entry.details, "Assigned Street Light to Electrician Team A");
    }

    // ── Polls ────────────────────────────────────────────────────────

    #[test]
    fn test_vote_maintains_sum_invariant() {
        let mut store = store();
        let id = store.create_poll(poll_draft());
        store.record_vote(id, 0).unwrap();
        store.record_vote(id, 0).unwrap();
        store.record_vote(id, 1).unwrap();

        let poll = &store.polls()[0];
        assert_eq!(poll.options[0].votes, 2);
        assert_eq!(poll.options[1].votes, 1);
        assert_eq!(poll.total_votes, 3);
        assert!(poll.votes_consistent());
    }

    #[test]
    fn test_vote_on_closed_poll_rejected() {
        let mut store = store();
        let id = store.create_poll(poll_draft());
        store.close_poll(id, Some("Cameras will be installed".into())).unwrap();

        assert_eq!(store.record_vote(id, 0).unwrap_err(), StoreError::PollClosed { id });
        assert!(store.polls()[0].votes_consistent());
    }

    #[test]
    fn test_vote_out_of_range_option() {
        let mut store = store();
        let id = store.create_poll(poll_draft());
        let err = store.record_vote(id, 5).unwrap_err();
        assert_eq!(err, StoreError::NoSuchOption { id, index: 5 });
        assert_eq!(store.polls()[0].total_votes, 0);
    }

    #[test]
    fn test_close_poll_records_decision_and_audit() {
        let mut store = store();
        let id = store.create_poll(poll_draft());
        store.close_poll(id, Some("Based on support, cameras approved".into())).unwrap();

        let poll = &store.polls()[0];
        assert_eq!(poll.status, PollStatus::Closed);
        assert!(poll.closed_at.is_some());
        assert_eq!(poll.admin_decision.as_deref(), Some("Based on support, cameras approved"));

        let entry = store.audit_log().latest().unwrap();
        assert_eq!(entry.action, "Poll Closed");
        assert_eq!(entry.severity, Severity::Critical);
    }

    #[test]
    fn test_close_poll_twice_fails() {
        let mut store = store();
        let id = store.create_poll(poll_draft());
        store.close_poll(id, None).unwrap();
        assert!(store.close_poll(id, None).is_err());
        assert_eq!(store.audit_log().len(), 1);
    }

    // ── Volunteer events ─────────────────────────────────────────────

    #[test]
    fn test_register_volunteer_grows_roster() {
        let mut store = store();
        let id = store.create_volunteer_event(VolunteerEventDraft {
            name: "Tree Plantation Drive".into(),
            description: "Plant trees".into(),
            scheduled_for: Timestamp::parse("2025-01-20T07:00:00Z").unwrap(),
            location: "Lake View Road".into(),
            required_volunteers: 2,
            organizer: "Environmental Committee".into(),
        });
        store.register_volunteer(id, "Rahul Sharma", "+91 98765 11111").unwrap();
        store.register_volunteer(id, "Priya Patel", "+91 98765 22222").unwrap();
        // Over capacity is allowed, only warned about.
        store.register_volunteer(id, "Amit Kumar", "+91 98765 33333").unwrap();

        let event = &store.volunteer_events()[0];
        assert_eq!(event.registered_volunteers, 3);
        assert_eq!(event.roster.len(), 3);
        assert!(event.roster.iter().all(|v| v.attendance == Attendance::Pending));
    }

    // ── Aggregate behavior ───────────────────────────────────────────

    #[test]
    fn test_stores_are_isolated() {
        let mut a = store();
        let b = store();
        a.register_citizen(citizen_draft("Priya Sharma"));
        assert_eq!(a.citizens().len(), 1);
        assert!(b.citizens().is_empty());
    }

    #[test]
    fn test_store_serde_roundtrip() {
        let mut store = store();
        store.register_citizen(citizen_draft("Priya Sharma"));
        let json = serde_json::to_string(&store).unwrap();
        let parsed: WardStore = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.citizens().len(), 1);
        assert_eq!(parsed.ward().as_str(), "Ward 5");
    }

    #[test]
    fn test_audit_seq_is_monotone_across_entity_kinds() {
        let mut store = store();
        let cid = store.register_citizen(citizen_draft("Priya Sharma"));
        let sid = store.raise_sos(sos_draft());
        store.update_citizen_status(cid, CitizenStatus::Approved, None).unwrap();
        store.update_sos_status(sid, SosStatus::Resolved).unwrap();

        let seqs: Vec<u64> = store.audit_log().entries().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![0, 1]);
    }
}
