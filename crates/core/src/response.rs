//! Response Composer
//!
//! Builds the platform-neutral [`SkillResponse`] every handler returns.

/// What the skill says back, and whether the platform should keep listening.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillResponse {
    /// `None` only for the silent acknowledgement of an ended session.
    pub speech: Option<String>,
    pub reprompt: Option<String>,
    pub keep_open: bool,
}

impl SkillResponse {
    /// Composes a spoken response. `speech` must not be empty.
    pub fn compose(speech: impl Into<String>, reprompt: Option<String>, keep_open: bool) -> Self {
        let speech = speech.into();
        debug_assert!(
            !speech.trim().is_empty(),
            "composed a response with empty speech"
        );
        Self {
            speech: Some(speech),
            reprompt,
            keep_open,
        }
    }

    /// Speaks and waits for the user, repeating `reprompt` if they stay quiet.
    pub fn ask(speech: impl Into<String>, reprompt: impl Into<String>) -> Self {
        Self::compose(speech, Some(reprompt.into()), true)
    }

    /// Speaks and closes the session.
    pub fn tell(speech: impl Into<String>) -> Self {
        Self::compose(speech, None, false)
    }

    /// An empty acknowledgement for a session the platform already closed.
    pub fn silent() -> Self {
        Self {
            speech: None,
            reprompt: None,
            keep_open: false,
        }
    }

    pub fn is_silent(&self) -> bool {
        self.speech.is_none()
    }
}
