//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application,
//! including the skill endpoint, the health check and OpenAPI documentation.

use crate::{
    handlers,
    models::{
        Application, Context, ErrorResponse, HealthResponse, Intent, OutputSpeech, Reprompt,
        RequestEnvelope, ResponseBody, ResponseEnvelope, Session, SessionEndedError, SkillRequest,
        Slot, SystemContext,
    },
    state::AppState,
};

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(handlers::handle_skill_request, handlers::health),
    components(
        schemas(
            RequestEnvelope, Session, Application, Context, SystemContext, SkillRequest, Intent,
            Slot, SessionEndedError, ResponseEnvelope, ResponseBody, OutputSpeech, Reprompt,
            HealthResponse, ErrorResponse
        )
    ),
    tags(
        (name = "Cloud Study Buddy", description = "Voice skill endpoint for cloud study help")
    )
)]
pub struct ApiDoc;

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/skill", post(handlers::handle_skill_request))
        .route("/health", get(handlers::health))
        .with_state(app_state);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
        .layer(TraceLayer::new_for_http())
}
