//! # Audit Log
//!
//! Append-only record of administrative actions. Every successful status
//! transition appends exactly one entry; rejected transitions append
//! nothing. Entries are immutable once created and ordered by a
//! monotonically increasing sequence number.

use serde::{Deserialize, Serialize};

use muni_core::{Operator, Timestamp};

/// Severity classification of an audit entry.
///
/// Assigned from a static per-(machine, target-status) mapping — safety-
/// impacting transitions (SOS resolution/escalation, help request closure,
/// poll closure) are `Critical`, everything else `Normal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Routine administrative action.
    Normal,
    /// Safety-impacting action.
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Normal => "NORMAL",
            Self::Critical => "CRITICAL",
        };
        f.write_str(s)
    }
}

/// One immutable audit entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Monotonically increasing sequence number, unique within a log.
    pub seq: u64,
    /// Action phrase (e.g. "Citizen Approved").
    pub action: String,
    /// Free-text details (e.g. "Approved registration for Priya Sharma").
    pub details: String,
    /// The operator who performed the action.
    pub actor: String,
    /// When the action was recorded (UTC).
    pub timestamp: Timestamp,
    /// Severity classification.
    pub severity: Severity,
}

/// Append-only, session-lifetime audit log.
///
/// Entries can only be added, never modified or removed. Iteration yields
/// entries in append order, newest last.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
    next_seq: u64,
}

impl AuditLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, assigning the next sequence number and the current
    /// timestamp. Returns a reference to the stored entry.
    pub fn append(
        &mut self,
        action: impl Into<String>,
        details: impl Into<String>,
        actor: &Operator,
        severity: Severity,
    ) -> &AuditEntry {
        let entry = AuditEntry {
            seq: self.next_seq,
            action: action.into(),
            details: details.into(),
            actor: actor.name.clone(),
            timestamp: Timestamp::now(),
            severity,
        };
        self.next_seq += 1;
        self.entries.push(entry);
        // push above guarantees non-empty
        &self.entries[self.entries.len() - 1]
    }

    /// All entries in append order, newest last.
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&AuditEntry> {
        self.entries.last()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_assigns_monotone_seq() {
        let op = Operator::default();
        let mut log = AuditLog::new();
        log.append("Citizen Approved", "first", &op, Severity::Normal);
        log.append("Poll Closed", "second", &op, Severity::Critical);

        let seqs: Vec<u64> = log.entries().iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![0, 1]);
    }

    #[test]
    fn test_entries_ordered_newest_last() {
        let op = Operator::default();
        let mut log = AuditLog::new();
        log.append("a", "", &op, Severity::Normal);
        log.append("b", "", &op, Severity::Normal);
        assert_eq!(log.latest().map(|e| e.action.as_str()), Some("b"));
        assert!(log.entries()[0].timestamp <= log.entries()[1].timestamp);
    }

    #[test]
    fn test_actor_recorded_from_operator() {
        let op = Operator::new("Admin User", "Ward Administrator");
        let mut log = AuditLog::new();
        let entry = log.append("Notice Published", "details", &op, Severity::Normal);
        assert_eq!(entry.actor, "Admin User");
    }

    #[test]
    fn test_empty_log() {
        let log = AuditLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert!(log.latest().is_none());
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Normal.to_string(), "NORMAL");
        assert_eq!(Severity::Critical.to_string(), "CRITICAL");
    }

    #[test]
    fn test_serde_roundtrip() {
        let op = Operator::default();
        let mut log = AuditLog::new();
        log.append("Citizen Approved", "x", &op, Severity::Normal);
        let json = serde_json::to_string(&log).unwrap();
        let parsed: AuditLog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.entries()[0].action, "Citizen Approved");
    }
}
