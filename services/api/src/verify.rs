//! Request Verification
//!
//! Checks every incoming envelope before it is dispatched: the envelope must
//! address this skill (when a skill id is configured) and must not be older,
//! or further in the future, than the configured tolerance.

use crate::{config::Config, models::RequestEnvelope};
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum VerificationError {
    #[error("Request is addressed to skill {actual:?}, expected '{expected}'")]
    ApplicationIdMismatch {
        expected: String,
        actual: Option<String>,
    },
    #[error("Request timestamp is outside the tolerance of {tolerance_secs} seconds")]
    StaleTimestamp { tolerance_secs: i64 },
}

#[derive(Debug, Clone)]
pub struct RequestVerifier {
    skill_id: Option<String>,
    tolerance: Duration,
}

impl RequestVerifier {
    pub fn new(skill_id: Option<String>, tolerance: Duration) -> Self {
        Self {
            skill_id,
            tolerance,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.skill_id.clone(),
            Duration::seconds(config.timestamp_tolerance_secs),
        )
    }

    /// Verifies the envelope against the given clock reading.
    pub fn verify(
        &self,
        envelope: &RequestEnvelope,
        now: DateTime<Utc>,
    ) -> Result<(), VerificationError> {
        if let Some(expected) = &self.skill_id {
            let actual = envelope.application_id();
            if actual != Some(expected.as_str()) {
                return Err(VerificationError::ApplicationIdMismatch {
                    expected: expected.clone(),
                    actual: actual.map(str::to_string),
                });
            }
        }

        if let Some(timestamp) = envelope.request.timestamp() {
            if (now - timestamp).abs() > self.tolerance {
                return Err(VerificationError::StaleTimestamp {
                    tolerance_secs: self.tolerance.num_seconds(),
                });
            }
        }

        Ok(())
    }
}
