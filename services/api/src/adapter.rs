//! Transport Adapter
//!
//! Converts platform envelopes into the skill's [`NormalizedRequest`] and
//! renders [`SkillResponse`]s back into the platform's response envelope.

use crate::models::{RequestEnvelope, SkillRequest};
use alexa_sdk::response::{Reprompt, Response, Speech};
use study_buddy_core::{request::NormalizedRequest, response::SkillResponse};
use tracing::debug;

/// Decodes the envelope's request. Returns `None` for request types the skill
/// does not serve.
pub fn normalize(envelope: &RequestEnvelope) -> Option<NormalizedRequest> {
    match &envelope.request {
        SkillRequest::LaunchRequest { .. } => Some(NormalizedRequest::launch()),
        SkillRequest::IntentRequest { intent, .. } => {
            let request = intent
                .slots
                .iter()
                .flatten()
                .filter_map(|(name, slot)| slot.value.as_ref().map(|value| (name, value)))
                .fold(NormalizedRequest::intent(&intent.name), |req, (name, value)| {
                    req.with_slot(name, value)
                });
            Some(request)
        }
        SkillRequest::SessionEndedRequest { reason, error, .. } => {
            debug!(?reason, ?error, "Session ended by platform");
            Some(NormalizedRequest::session_ended())
        }
        SkillRequest::Unsupported => None,
    }
}

/// Renders a response into the platform envelope. Silent responses carry no
/// speech and only confirm the session is over.
pub fn render(response: &SkillResponse) -> Response {
    let Some(text) = response.speech.as_deref() else {
        return Response::new(true);
    };

    let mut rendered = Response::new(!response.keep_open).speech(ssml(text));
    rendered.response.reprompt = response.reprompt.as_deref().map(|text| Reprompt {
        output_speech: ssml(text),
    });
    rendered
}

fn ssml(text: &str) -> Speech {
    Speech::ssml(&format!("<speak>{}</speak>", escape_ssml(text)))
}

/// Escapes characters that would otherwise be parsed as SSML markup.
pub fn escape_ssml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
