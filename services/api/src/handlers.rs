//! Axum Handlers
//!
//! The skill endpoint the voice platform calls, plus a health check. Uses
//! `utoipa` doc comments to generate OpenAPI documentation.

use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::Utc;
use std::sync::Arc;
use study_buddy_core::response::SkillResponse;
use tracing::{info, instrument, warn};

use crate::{
    adapter,
    models::{ErrorResponse, HealthResponse, RequestEnvelope, ResponseEnvelope},
    state::AppState,
    verify::VerificationError,
};

pub enum ApiError {
    BadRequest(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { message })).into_response()
            }
            ApiError::Forbidden(message) => {
                (StatusCode::FORBIDDEN, Json(ErrorResponse { message })).into_response()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<VerificationError> for ApiError {
    fn from(err: VerificationError) -> Self {
        match err {
            VerificationError::ApplicationIdMismatch { .. } => Self::Forbidden(err.to_string()),
            VerificationError::StaleTimestamp { .. } => Self::BadRequest(err.to_string()),
        }
    }
}

/// Handle a request envelope from the voice platform.
#[utoipa::path(
    post,
    path = "/skill",
    request_body = RequestEnvelope,
    responses(
        (status = 200, description = "Skill response", body = ResponseEnvelope),
        (status = 400, description = "Malformed or stale request", body = ErrorResponse),
        (status = 403, description = "Request addressed to another skill", body = ErrorResponse)
    )
)]
#[instrument(name = "skill_request", skip_all, fields(request_id))]
pub async fn handle_skill_request(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<RequestEnvelope>, JsonRejection>,
) -> Result<Json<alexa_sdk::response::Response>, ApiError> {
    let Json(envelope) = payload.inspect_err(|rejection| {
        warn!(error = %rejection.body_text(), "Malformed request envelope");
    })?;

    if let Some(request_id) = envelope.request.request_id() {
        tracing::Span::current().record("request_id", request_id);
    }

    if let Err(err) = state.verifier.verify(&envelope, Utc::now()) {
        warn!(error = %err, "Rejected request envelope");
        return Err(err.into());
    }

    let response = match adapter::normalize(&envelope) {
        Some(request) => {
            info!(kind = ?request.kind(), intent = ?request.intent_name(), "Handling request");
            state.skill.dispatch(&request)
        }
        None => {
            warn!("Unsupported request type, sending empty response");
            SkillResponse::silent()
        }
    };

    Ok(Json(adapter::render(&response)))
}

/// Report service health and the size of the loaded content.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    )
)]
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let content = state.skill.content();
    Json(HealthResponse {
        status: "ok".to_string(),
        concepts: content.concepts().count(),
        questions: content.questions().len(),
        tips: content.tips().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, router::create_router};
    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, header},
    };
    use serde_json::{Value, json};
    use study_buddy_core::{
        Skill,
        random::{SeededRandom, ThreadRandom},
    };
    use tower::ServiceExt;

    fn config(skill_id: Option<&str>) -> Config {
        Config {
            bind_address: "127.0.0.1:0".parse().unwrap(),
            log_level: tracing::Level::INFO,
            skill_id: skill_id.map(str::to_string),
            timestamp_tolerance_secs: 150,
            random_seed: None,
        }
    }

    fn app(skill_id: Option<&str>) -> Router {
        let skill = Skill::new(Arc::new(ThreadRandom)).unwrap();
        create_router(Arc::new(AppState::new(skill, &config(skill_id))))
    }

    fn envelope(request: Value) -> Value {
        json!({
            "version": "1.0",
            "session": {
                "new": false,
                "sessionId": "amzn1.echo-api.session.test",
                "application": { "applicationId": "amzn1.ask.skill.test" }
            },
            "request": request,
        })
    }

    fn intent(name: &str, slots: Value) -> Value {
        envelope(json!({
            "type": "IntentRequest",
            "requestId": "amzn1.echo-api.request.test",
            "timestamp": Utc::now().to_rfc3339(),
            "locale": "en-US",
            "intent": { "name": name, "slots": slots }
        }))
    }

    async fn post(app: Router, body: Value) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/skill")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn ssml(json: &Value) -> &str {
        json["response"]["outputSpeech"]["ssml"].as_str().unwrap()
    }

    #[tokio::test]
    async fn test_launch_request() {
        let body = envelope(json!({
            "type": "LaunchRequest",
            "requestId": "r-1",
            "timestamp": Utc::now().to_rfc3339(),
        }));
        let (status, json) = post(app(None), body).await;

        assert_eq!(status, StatusCode::OK);
        assert!(ssml(&json).starts_with("<speak>Welcome to Cloud Study Buddy"));
        assert_eq!(
            json["response"]["reprompt"]["outputSpeech"]["ssml"],
            "<speak>What would you like to do?</speak>"
        );
        assert_eq!(json["response"]["shouldEndSession"], false);
    }

    #[tokio::test]
    async fn test_get_concept_known() {
        let body = intent(
            "GetCloudConceptIntent",
            json!({ "ConceptName": { "name": "ConceptName", "value": "EC2" } }),
        );
        let (status, json) = post(app(None), body).await;

        assert_eq!(status, StatusCode::OK);
        assert!(ssml(&json).starts_with("<speak>Amazon EC2 is a web service"));
        assert_eq!(json["response"]["shouldEndSession"], false);
    }

    #[tokio::test]
    async fn test_get_concept_unknown() {
        let body = intent(
            "GetCloudConceptIntent",
            json!({ "ConceptName": { "name": "ConceptName", "value": "Kubernetes" } }),
        );
        let (_, json) = post(app(None), body).await;
        assert!(ssml(&json).contains("I don't have an explanation for Kubernetes yet."));
    }

    #[tokio::test]
    async fn test_get_concept_missing_slot() {
        let body = intent(
            "GetCloudConceptIntent",
            json!({ "ConceptName": { "name": "ConceptName" } }),
        );
        let (_, json) = post(app(None), body).await;
        assert!(ssml(&json).contains("EC2, S3, Lambda"));
        assert_eq!(json["response"]["shouldEndSession"], false);
    }

    #[tokio::test]
    async fn test_cancel_closes_session() {
        let (_, json) = post(app(None), intent("AMAZON.CancelIntent", json!({}))).await;

        assert_eq!(
            ssml(&json),
            "<speak>Good luck with your cloud studies. Bye!</speak>"
        );
        assert!(json["response"].get("reprompt").is_none());
        assert_eq!(json["response"]["shouldEndSession"], true);
    }

    #[tokio::test]
    async fn test_quiz_is_reproducible_with_seed() {
        let seeded_app = || {
            let skill = Skill::new(Arc::new(SeededRandom::new(9))).unwrap();
            create_router(Arc::new(AppState::new(skill, &config(None))))
        };

        let (_, first) = post(seeded_app(), intent("QuizMeCloudIntent", json!({}))).await;
        let (_, second) = post(seeded_app(), intent("QuizMeCloudIntent", json!({}))).await;

        assert!(ssml(&first).starts_with("<speak>Here is your question:"));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_unknown_intent_gets_generic_reply() {
        let (status, json) = post(app(None), intent("OrderPizzaIntent", json!({}))).await;

        assert_eq!(status, StatusCode::OK);
        assert!(ssml(&json).contains("didn't understand"));
        assert_eq!(json["response"]["shouldEndSession"], false);
    }

    #[tokio::test]
    async fn test_session_ended_has_no_speech() {
        let body = envelope(json!({
            "type": "SessionEndedRequest",
            "requestId": "r-1",
            "timestamp": Utc::now().to_rfc3339(),
            "reason": "USER_INITIATED",
        }));
        let (status, json) = post(app(None), body).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({ "version": "1.0", "response": { "shouldEndSession": true } })
        );
    }

    #[tokio::test]
    async fn test_unsupported_request_has_no_speech() {
        let body = envelope(json!({ "type": "AudioPlayer.PlaybackStopped" }));
        let (status, json) = post(app(None), body).await;

        assert_eq!(status, StatusCode::OK);
        assert!(json["response"].get("outputSpeech").is_none());
        assert_eq!(json["response"]["shouldEndSession"], true);
    }

    #[tokio::test]
    async fn test_wrong_skill_id_is_forbidden() {
        let (status, json) = post(
            app(Some("amzn1.ask.skill.other")),
            intent("AMAZON.HelpIntent", json!({})),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert!(json["message"].as_str().unwrap().contains("amzn1.ask.skill.other"));
    }

    #[tokio::test]
    async fn test_matching_skill_id_is_accepted() {
        let (status, _) = post(
            app(Some("amzn1.ask.skill.test")),
            intent("AMAZON.HelpIntent", json!({})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_stale_request_is_rejected() {
        let body = envelope(json!({
            "type": "LaunchRequest",
            "requestId": "r-1",
            "timestamp": "2020-01-01T00:00:00Z",
        }));
        let (status, _) = post(app(None), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_envelopes_get_json_errors() {
        let missing_intent = envelope(json!({
            "type": "IntentRequest",
            "requestId": "r-1",
            "timestamp": Utc::now().to_rfc3339(),
        }));

        for body in [json!({ "version": "1.0" }), missing_intent] {
            let (status, json) = post(app(None), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(json["message"].as_str().unwrap().contains("missing field"));
        }
    }

    #[tokio::test]
    async fn test_unparseable_body_gets_json_error() {
        let response = app(None)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/skill")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["message"].is_string());
    }

    #[tokio::test]
    async fn test_health() {
        let response = app(None)
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            json!({ "status": "ok", "concepts": 11, "questions": 6, "tips": 7 })
        );
    }
}
