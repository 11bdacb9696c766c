pub mod catalog;
pub mod content;
pub mod dispatcher;
pub mod handlers;
pub mod random;
pub mod request;
pub mod response;
pub mod speech;

use content::{ContentError, ContentStore};
use dispatcher::Dispatcher;
use handlers::{
    CancelOrStopHandler, FallbackHandler, GetConceptHandler, HelpHandler, LaunchHandler,
    QuizMeHandler, SessionEndedHandler, StudyTipHandler,
};
use random::RandomSource;
use request::NormalizedRequest;
use response::SkillResponse;
use std::sync::Arc;

/// The fully assembled skill: content store plus the ordered handler list.
///
/// Built once at startup and shared between requests; every operation on it
/// is a read.
pub struct Skill {
    content: Arc<ContentStore>,
    dispatcher: Dispatcher,
}

impl Skill {
    /// Assembles the skill around the built-in catalog.
    pub fn new(random: Arc<dyn RandomSource>) -> Result<Self, ContentError> {
        let content = Arc::new(ContentStore::with_catalog(random)?);
        Ok(Self::with_content(content))
    }

    /// Assembles the skill around an already-built content store.
    pub fn with_content(content: Arc<ContentStore>) -> Self {
        let dispatcher = Dispatcher::new()
            .register(LaunchHandler)
            .register(GetConceptHandler::new(Arc::clone(&content)))
            .register(QuizMeHandler::new(Arc::clone(&content)))
            .register(StudyTipHandler::new(Arc::clone(&content)))
            .register(FallbackHandler)
            .register(HelpHandler)
            .register(CancelOrStopHandler)
            .register(SessionEndedHandler);

        Self {
            content,
            dispatcher,
        }
    }

    pub fn dispatch(&self, request: &NormalizedRequest) -> SkillResponse {
        self.dispatcher.dispatch(request)
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
