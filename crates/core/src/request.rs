//! Normalized Skill Requests
//!
//! The transport layer decodes platform events into a [`NormalizedRequest`]
//! before they reach the dispatcher. Handlers only ever see this shape.

use std::collections::HashMap;

/// Intent names the skill recognises, including the platform-reserved ones.
pub mod intent_names {
    pub const GET_CLOUD_CONCEPT: &str = "GetCloudConceptIntent";
    pub const QUIZ_ME_CLOUD: &str = "QuizMeCloudIntent";
    pub const STUDY_TIP: &str = "StudyTipIntent";
    pub const HELP: &str = "AMAZON.HelpIntent";
    pub const CANCEL: &str = "AMAZON.CancelIntent";
    pub const STOP: &str = "AMAZON.StopIntent";
    pub const FALLBACK: &str = "AMAZON.FallbackIntent";
}

/// Slot carrying the concept the user asked about.
pub const CONCEPT_NAME_SLOT: &str = "ConceptName";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Launch,
    Intent,
    SessionEnded,
}

/// A single-turn request. The intent name is present exactly when the kind is
/// [`RequestKind::Intent`]; the constructors enforce this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRequest {
    kind: RequestKind,
    intent_name: Option<String>,
    slots: HashMap<String, String>,
}

impl NormalizedRequest {
    pub fn launch() -> Self {
        Self {
            kind: RequestKind::Launch,
            intent_name: None,
            slots: HashMap::new(),
        }
    }

    pub fn intent(name: impl Into<String>) -> Self {
        Self {
            kind: RequestKind::Intent,
            intent_name: Some(name.into()),
            slots: HashMap::new(),
        }
    }

    pub fn session_ended() -> Self {
        Self {
            kind: RequestKind::SessionEnded,
            intent_name: None,
            slots: HashMap::new(),
        }
    }

    /// Attaches a slot value. Blank values are dropped, so handlers treat an
    /// empty slot exactly like a missing one.
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.trim().is_empty() {
            self.slots.insert(name.into(), value);
        }
        self
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    pub fn intent_name(&self) -> Option<&str> {
        self.intent_name.as_deref()
    }

    /// Returns `true` for an intent request carrying the given intent name.
    pub fn is_intent(&self, name: &str) -> bool {
        self.intent_name() == Some(name)
    }

    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(String::as_str)
    }
}
