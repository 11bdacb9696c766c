//! Request Dispatcher
//!
//! Routes each [`NormalizedRequest`] to the first registered handler that
//! accepts it. Registration order decides ties.

use crate::handlers::RequestHandler;
use crate::request::{NormalizedRequest, RequestKind};
use crate::response::SkillResponse;
use crate::speech;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("No handler accepts {kind:?} request (intent: {intent:?})")]
    Unroutable {
        kind: RequestKind,
        intent: Option<String>,
    },
}

/// An ordered list of handlers.
#[derive(Default)]
pub struct Dispatcher {
    handlers: Vec<Box<dyn RequestHandler>>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler. Handlers registered earlier take precedence.
    pub fn register(mut self, handler: impl RequestHandler + 'static) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Names of the registered handlers, in dispatch order.
    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|h| h.name()).collect()
    }

    /// Runs the first matching handler, or reports that none matched.
    pub fn try_dispatch(&self, request: &NormalizedRequest) -> Result<SkillResponse, DispatchError> {
        let handler = self
            .handlers
            .iter()
            .find(|h| h.can_handle(request))
            .ok_or_else(|| DispatchError::Unroutable {
                kind: request.kind(),
                intent: request.intent_name().map(str::to_string),
            })?;

        debug!(handler = handler.name(), "Dispatching request");
        Ok(handler.handle(request))
    }

    /// Like [`try_dispatch`](Self::try_dispatch), but answers unroutable
    /// requests with a generic "didn't understand" reply and keeps the
    /// session open. Never fails.
    pub fn dispatch(&self, request: &NormalizedRequest) -> SkillResponse {
        self.try_dispatch(request).unwrap_or_else(|err| {
            warn!(error = %err, "Unroutable request");
            SkillResponse::ask(speech::NOT_UNDERSTOOD, speech::WELCOME_REPROMPT)
        })
    }
}
