//! Intent Handlers
//!
//! One handler per supported request. Each decides whether it can answer a
//! request and, if so, composes the spoken reply. Handlers are registered with
//! the [`Dispatcher`](crate::dispatcher::Dispatcher) in a fixed order.

use crate::content::ContentStore;
use crate::request::{CONCEPT_NAME_SLOT, NormalizedRequest, RequestKind, intent_names};
use crate::response::SkillResponse;
use crate::speech;
use std::sync::Arc;
use tracing::{debug, info};

/// The contract every handler implements.
pub trait RequestHandler: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Returns `true` if this handler should answer the request.
    fn can_handle(&self, request: &NormalizedRequest) -> bool;

    /// Composes the response. Only called after `can_handle` returned `true`.
    fn handle(&self, request: &NormalizedRequest) -> SkillResponse;
}

pub struct LaunchHandler;

impl RequestHandler for LaunchHandler {
    fn name(&self) -> &'static str {
        "launch"
    }

    fn can_handle(&self, request: &NormalizedRequest) -> bool {
        request.kind() == RequestKind::Launch
    }

    fn handle(&self, _request: &NormalizedRequest) -> SkillResponse {
        SkillResponse::ask(speech::WELCOME, speech::WELCOME_REPROMPT)
    }
}

/// Explains a cloud concept named in the `ConceptName` slot.
pub struct GetConceptHandler {
    content: Arc<ContentStore>,
}

impl GetConceptHandler {
    pub fn new(content: Arc<ContentStore>) -> Self {
        Self { content }
    }
}

impl RequestHandler for GetConceptHandler {
    fn name(&self) -> &'static str {
        "get_concept"
    }

    fn can_handle(&self, request: &NormalizedRequest) -> bool {
        request.is_intent(intent_names::GET_CLOUD_CONCEPT)
    }

    fn handle(&self, request: &NormalizedRequest) -> SkillResponse {
        let raw = request.slot(CONCEPT_NAME_SLOT);
        info!(concept = ?raw, "User asked for concept");

        let text = match raw {
            None => speech::ASK_FOR_CONCEPT.to_string(),
            Some(raw) => match self.content.lookup_concept(raw) {
                Some(entry) => entry.explanation.clone(),
                None => speech::concept_not_found(raw),
            },
        };

        SkillResponse::ask(text, speech::CONCEPT_REPROMPT)
    }
}

/// Asks a random quiz question and immediately reveals the answer.
pub struct QuizMeHandler {
    content: Arc<ContentStore>,
}

impl QuizMeHandler {
    pub fn new(content: Arc<ContentStore>) -> Self {
        Self { content }
    }
}

impl RequestHandler for QuizMeHandler {
    fn name(&self) -> &'static str {
        "quiz_me"
    }

    fn can_handle(&self, request: &NormalizedRequest) -> bool {
        request.is_intent(intent_names::QUIZ_ME_CLOUD)
    }

    fn handle(&self, _request: &NormalizedRequest) -> SkillResponse {
        let question = self.content.random_question();
        info!(question = %question.question, "Selected quiz question");

        SkillResponse::ask(
            speech::quiz(&question.question, &question.answer, &question.explanation),
            speech::QUIZ_REPROMPT,
        )
    }
}

pub struct StudyTipHandler {
    content: Arc<ContentStore>,
}

impl StudyTipHandler {
    pub fn new(content: Arc<ContentStore>) -> Self {
        Self { content }
    }
}

impl RequestHandler for StudyTipHandler {
    fn name(&self) -> &'static str {
        "study_tip"
    }

    fn can_handle(&self, request: &NormalizedRequest) -> bool {
        request.is_intent(intent_names::STUDY_TIP)
    }

    fn handle(&self, _request: &NormalizedRequest) -> SkillResponse {
        let tip = self.content.random_tip();
        info!("Serving study tip");
        SkillResponse::ask(speech::study_tip(tip.text()), speech::TIP_REPROMPT)
    }
}

pub struct HelpHandler;

impl RequestHandler for HelpHandler {
    fn name(&self) -> &'static str {
        "help"
    }

    fn can_handle(&self, request: &NormalizedRequest) -> bool {
        request.is_intent(intent_names::HELP)
    }

    fn handle(&self, _request: &NormalizedRequest) -> SkillResponse {
        SkillResponse::ask(speech::HELP, speech::HELP)
    }
}

/// Cancel and Stop both end the session with the same farewell.
pub struct CancelOrStopHandler;

impl RequestHandler for CancelOrStopHandler {
    fn name(&self) -> &'static str {
        "cancel_or_stop"
    }

    fn can_handle(&self, request: &NormalizedRequest) -> bool {
        request.is_intent(intent_names::CANCEL) || request.is_intent(intent_names::STOP)
    }

    fn handle(&self, _request: &NormalizedRequest) -> SkillResponse {
        SkillResponse::tell(speech::GOODBYE)
    }
}

/// Answers the platform's fallback intent, emitted when no intent matched
/// the user's utterance with confidence.
pub struct FallbackHandler;

impl RequestHandler for FallbackHandler {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn can_handle(&self, request: &NormalizedRequest) -> bool {
        request.is_intent(intent_names::FALLBACK)
    }

    fn handle(&self, _request: &NormalizedRequest) -> SkillResponse {
        info!("Fallback intent triggered");
        SkillResponse::ask(speech::FALLBACK, speech::FALLBACK_REPROMPT)
    }
}

/// The platform has already closed the session; nothing to say or release.
pub struct SessionEndedHandler;

impl RequestHandler for SessionEndedHandler {
    fn name(&self) -> &'static str {
        "session_ended"
    }

    fn can_handle(&self, request: &NormalizedRequest) -> bool {
        request.kind() == RequestKind::SessionEnded
    }

    fn handle(&self, _request: &NormalizedRequest) -> SkillResponse {
        debug!("Session ended");
        SkillResponse::silent()
    }
}
