use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/chatbot", post(handlers::chatbot))
        // Journaling
        .route("/ai_writing_therapist", post(handlers::writing_prompt))
        .route("/ai_writing_therapist/feedback", post(handlers::writing_feedback))
        // Habits
        .route("/recommend_habit", post(handlers::recommend_habit))
        .route("/habit_clustering", post(handlers::habit_clustering))
        // Music
        .route("/music_recommendation", post(handlers::music_recommendation))
        .with_state(state)
        // Request id must be assigned before the trace span is created
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
}
