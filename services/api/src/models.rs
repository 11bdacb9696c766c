//! Wire Models
//!
//! The voice platform's JSON request envelope, the OpenAPI description of the
//! response envelope, and the error body returned on rejected requests. Only
//! the request fields the skill reads are modelled; everything else in an
//! incoming envelope is ignored.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone)]
pub struct RequestEnvelope {
    #[schema(example = "1.0")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    pub request: SkillRequest,
}

impl RequestEnvelope {
    /// The skill id the platform addressed, preferring the context object.
    pub fn application_id(&self) -> Option<&str> {
        self.context
            .as_ref()
            .map(|c| c.system.application.application_id.as_str())
            .or_else(|| {
                self.session
                    .as_ref()
                    .map(|s| s.application.application_id.as_str())
            })
    }
}

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone)]
pub struct Session {
    #[serde(rename = "new", default)]
    pub is_new: bool,
    #[serde(rename = "sessionId")]
    pub session_id: String,
    pub application: Application,
}

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone)]
pub struct Application {
    #[serde(rename = "applicationId")]
    #[schema(example = "amzn1.ask.skill.00000000-0000-0000-0000-000000000000")]
    pub application_id: String,
}

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone)]
pub struct Context {
    #[serde(rename = "System")]
    pub system: SystemContext,
}

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone)]
pub struct SystemContext {
    pub application: Application,
}

/// The request body, discriminated by its `type` field.
#[derive(Deserialize, Serialize, ToSchema, Debug, Clone)]
#[serde(tag = "type")]
pub enum SkillRequest {
    LaunchRequest {
        #[serde(rename = "requestId")]
        request_id: String,
        timestamp: DateTime<Utc>,
        #[serde(default)]
        locale: Option<String>,
    },
    IntentRequest {
        #[serde(rename = "requestId")]
        request_id: String,
        timestamp: DateTime<Utc>,
        #[serde(default)]
        locale: Option<String>,
        intent: Intent,
    },
    SessionEndedRequest {
        #[serde(rename = "requestId")]
        request_id: String,
        timestamp: DateTime<Utc>,
        #[serde(default)]
        locale: Option<String>,
        #[serde(default)]
        reason: Option<String>,
        #[serde(default)]
        error: Option<SessionEndedError>,
    },
    /// Any request type the skill does not serve (audio player events, etc.).
    #[serde(other)]
    Unsupported,
}

impl SkillRequest {
    pub fn request_id(&self) -> Option<&str> {
        match self {
            SkillRequest::LaunchRequest { request_id, .. }
            | SkillRequest::IntentRequest { request_id, .. }
            | SkillRequest::SessionEndedRequest { request_id, .. } => Some(request_id.as_str()),
            SkillRequest::Unsupported => None,
        }
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            SkillRequest::LaunchRequest { timestamp, .. }
            | SkillRequest::IntentRequest { timestamp, .. }
            | SkillRequest::SessionEndedRequest { timestamp, .. } => Some(*timestamp),
            SkillRequest::Unsupported => None,
        }
    }
}

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone)]
pub struct Intent {
    #[schema(example = "GetCloudConceptIntent")]
    pub name: String,
    #[serde(default)]
    pub slots: Option<HashMap<String, Slot>>,
}

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone)]
pub struct Slot {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone)]
pub struct SessionEndedError {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// OpenAPI schema of the `alexa_sdk` response the skill endpoint returns.
/// The handler serializes `alexa_sdk::response::Response` itself; these types
/// only describe it.
#[derive(Serialize, ToSchema)]
pub struct ResponseEnvelope {
    #[schema(example = "1.0")]
    pub version: String,
    pub response: ResponseBody,
}

#[derive(Serialize, ToSchema)]
pub struct ResponseBody {
    #[serde(rename = "outputSpeech", skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(rename = "shouldEndSession")]
    pub should_end_session: bool,
}

#[derive(Serialize, ToSchema)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    #[schema(example = "SSML")]
    pub kind: String,
    #[schema(example = "<speak>Hello</speak>")]
    pub ssml: String,
}

#[derive(Serialize, ToSchema)]
pub struct Reprompt {
    #[serde(rename = "outputSpeech")]
    pub output_speech: OutputSpeech,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    pub concepts: usize,
    pub questions: usize,
    pub tips: usize,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}
