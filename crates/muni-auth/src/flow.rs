//! # Login Flow State Machine
//!
//! Runtime-enum machine with guarded transitions. Every failure is a
//! recoverable value — a wrong code leaves the flow exactly where it was.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// The fixed demo one-time code.
pub const DEMO_CODE: &str = "123456";

/// The stage the login flow is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Waiting for an identifier and a secret.
    Credentials,
    /// Credentials accepted, waiting for the one-time code.
    OneTimeCode,
    /// Code accepted; terminal for the session.
    Verified,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Credentials => "CREDENTIALS",
            Self::OneTimeCode => "ONE_TIME_CODE",
            Self::Verified => "VERIFIED",
        };
        f.write_str(s)
    }
}

/// Delivery channel for the one-time code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Email,
    Sms,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Email => "email",
            Self::Sms => "sms",
        };
        f.write_str(s)
    }
}

/// Errors raised by the login flow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// A required credential field was empty after trimming.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the empty field.
        field: &'static str,
    },

    /// The submitted one-time code did not match.
    #[error("invalid one-time code")]
    InvalidCode,

    /// The action is not available at the current stage.
    #[error("action not available at the {stage} stage")]
    StageMismatch {
        /// The stage the flow was actually in.
        stage: Stage,
    },
}

/// Marker returned when the flow reaches `Verified`.
///
/// Produced at most once per verification — this is the session-start
/// signal. Re-submitting a code after verification is a stage error, so a
/// caller can never observe two session starts without a logout between
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStart;

/// The operator login flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginFlow {
    stage: Stage,
    channel: Channel,
    expected_code: String,
}

impl LoginFlow {
    /// Create a flow expecting the given one-time code.
    pub fn new(expected_code: impl Into<String>) -> Self {
        Self {
            stage: Stage::Credentials,
            channel: Channel::Email,
            expected_code: expected_code.into(),
        }
    }

    /// Create a flow expecting the fixed demo code.
    pub fn demo() -> Self {
        Self::new(DEMO_CODE)
    }

    /// Current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Currently selected delivery channel.
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Whether the session is verified.
    pub fn is_verified(&self) -> bool {
        self.stage == Stage::Verified
    }

    /// Submit the credential pair.
    ///
    /// Both fields must be non-empty after trimming; empty input blocks
    /// submission before any backend would be consulted. No credential
    /// verification is performed beyond that — demo placeholder.
    pub fn submit_credentials(&mut self, email: &str, secret: &str) -> Result<(), AuthError> {
        self.require_stage(Stage::Credentials)?;
        if email.trim().is_empty() {
            return Err(AuthError::EmptyField { field: "email" });
        }
        if secret.trim().is_empty() {
            return Err(AuthError::EmptyField { field: "password" });
        }
        self.stage = Stage::OneTimeCode;
        info!(channel = %self.channel, "one-time code sent");
        Ok(())
    }

    /// Switch the code delivery channel before submission.
    pub fn select_channel(&mut self, channel: Channel) -> Result<(), AuthError> {
        self.require_stage(Stage::OneTimeCode)?;
        self.channel = channel;
        Ok(())
    }

    /// Re-send the one-time code. Idempotent: the flow state is unchanged,
    /// only a notification goes out.
    pub fn resend_code(&self) -> Result<(), AuthError> {
        self.require_stage(Stage::OneTimeCode)?;
        info!(channel = %self.channel, "one-time code re-sent");
        Ok(())
    }

    /// Submit the one-time code.
    ///
    /// A match advances to `Verified` and yields the session-start signal.
    /// A mismatch is recoverable: the flow stays at the code stage and the
    /// operator may retry.
    pub fn submit_code(&mut self, code: &str) -> Result<SessionStart, AuthError> {
        self.require_stage(Stage::OneTimeCode)?;
        if code.trim() != self.expected_code {
            return Err(AuthError::InvalidCode);
        }
        self.stage = Stage::Verified;
        info!("operator session verified");
        Ok(SessionStart)
    }

    /// Return to the credential stage, discarding the code entry.
    pub fn back(&mut self) -> Result<(), AuthError> {
        self.require_stage(Stage::OneTimeCode)?;
        self.stage = Stage::Credentials;
        Ok(())
    }

    /// Reset the whole machine to `Credentials`, from any stage.
    pub fn logout(&mut self) {
        self.stage = Stage::Credentials;
        self.channel = Channel::Email;
    }

    fn require_stage(&self, expected: Stage) -> Result<(), AuthError> {
        if self.stage != expected {
            return Err(AuthError::StageMismatch { stage: self.stage });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_code_stage() -> LoginFlow {
        let mut flow = LoginFlow::demo();
        flow.submit_credentials("admin@municipality.gov.in", "secret").unwrap();
        flow
    }

    // ── Credential stage ─────────────────────────────────────────────

    #[test]
    fn test_valid_credentials_advance() {
        let flow = at_code_stage();
        assert_eq!(flow.stage(), Stage::OneTimeCode);
    }

    #[test]
    fn test_empty_email_blocks_submission() {
        let mut flow = LoginFlow::demo();
        let err = flow.submit_credentials("", "secret").unwrap_err();
        assert_eq!(err, AuthError::EmptyField { field: "email" });
        assert_eq!(flow.stage(), Stage::Credentials);
    }

    #[test]
    fn test_whitespace_password_blocks_submission() {
        let mut flow = LoginFlow::demo();
        let err = flow.submit_credentials("admin@municipality.gov.in", "   ").unwrap_err();
        assert_eq!(err, AuthError::EmptyField { field: "password" });
        assert_eq!(flow.stage(), Stage::Credentials);
    }

    #[test]
    fn test_code_submission_requires_code_stage() {
        let mut flow = LoginFlow::demo();
        let err = flow.submit_code(DEMO_CODE).unwrap_err();
        assert_eq!(err, AuthError::StageMismatch { stage: Stage::Credentials });
    }

    // ── Code stage ───────────────────────────────────────────────────

    #[test]
    fn test_matching_code_verifies() {
        let mut flow = at_code_stage();
        let started = flow.submit_code(DEMO_CODE);
        assert_eq!(started, Ok(SessionStart));
        assert!(flow.is_verified());
    }

    #[test]
    fn test_wrong_code_is_recoverable() {
        let mut flow = at_code_stage();
        assert_eq!(flow.submit_code("654321").unwrap_err(), AuthError::InvalidCode);
        assert_eq!(flow.stage(), Stage::OneTimeCode);
        // Retry with the right code still works.
        assert!(flow.submit_code(DEMO_CODE).is_ok());
    }

    #[test]
    fn test_session_start_produced_once() {
        let mut flow = at_code_stage();
        flow.submit_code(DEMO_CODE).unwrap();
        // A second submission cannot produce another session start.
        assert_eq!(
            flow.submit_code(DEMO_CODE).unwrap_err(),
            AuthError::StageMismatch { stage: Stage::Verified }
        );
    }

    #[test]
    fn test_channel_switchable_before_submission() {
        let mut flow = at_code_stage();
        assert_eq!(flow.channel(), Channel::Email);
        flow.select_channel(Channel::Sms).unwrap();
        assert_eq!(flow.channel(), Channel::Sms);
        flow.select_channel(Channel::Email).unwrap();
        assert_eq!(flow.channel(), Channel::Email);
    }

    #[test]
    fn test_resend_does_not_change_state() {
        let flow = at_code_stage();
        flow.resend_code().unwrap();
        flow.resend_code().unwrap();
        assert_eq!(flow.stage(), Stage::OneTimeCode);
    }

    #[test]
    fn test_back_returns_to_credentials() {
        let mut flow = at_code_stage();
        flow.back().unwrap();
        assert_eq!(flow.stage(), Stage::Credentials);
        // The code stage must be re-earned.
        assert!(flow.submit_code(DEMO_CODE).is_err());
    }

    // ── Logout ───────────────────────────────────────────────────────

    #[test]
    fn test_logout_resets_to_credentials() {
        let mut flow = at_code_stage();
        flow.select_channel(Channel::Sms).unwrap();
        flow.submit_code(DEMO_CODE).unwrap();

        flow.logout();
        assert_eq!(flow.stage(), Stage::Credentials);
        assert_eq!(flow.channel(), Channel::Email);
        assert!(!flow.is_verified());
    }

    #[test]
    fn test_relogin_after_logout() {
        let mut flow = at_code_stage();
        flow.submit_code(DEMO_CODE).unwrap();
        flow.logout();

        flow.submit_credentials("admin@municipality.gov.in", "secret").unwrap();
        assert_eq!(flow.submit_code(DEMO_CODE), Ok(SessionStart));
    }

    // ── Custom code ──────────────────────────────────────────────────

    #[test]
    fn test_configured_code_replaces_demo() {
        let mut flow = LoginFlow::new("999000");
        flow.submit_credentials("a", "b").unwrap();
        assert!(flow.submit_code(DEMO_CODE).is_err());
        assert!(flow.submit_code("999000").is_ok());
    }
}
