//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    services::ServeDir,
    cors::CorsLayer,
    trace::TraceLayer,
    compression::CompressionLayer,
};
use std::sync::Arc;
use crate::state::{AppState, SharedState};
use crate::handlers::{
    pages::{home_page, about_page, features_page, privacy_page, safety_page, sensors_page, research_page, not_found},
    chat::{chat_page, api_chat},
    contact::{contact_page, api_contact},
    dashboard::dashboard,
    emotion::{api_emotion, api_emotion_distribution},
    feedback::{api_submit_feedback, api_list_feedback},
    mood::api_mood,
    sensors::{api_sensors_latest, api_sensors_history},
    system::health,
};
use crate::sse::sse_handler;

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    build_router_shared(Arc::new(state))
}

/// Same as [`build_router`] for callers that keep a handle on the state
/// (e.g. to spawn the sensor ticker).
pub fn build_router_shared(shared: SharedState) -> Router {
    let static_dir = shared.static_dir.clone();

    Router::new()
        // Pages
        .route("/",          get(home_page))
        .route("/about",     get(about_page))
        .route("/features",  get(features_page))
        .route("/privacy",   get(privacy_page))
        .route("/safety",    get(safety_page))
        .route("/sensors",   get(sensors_page))
        .route("/research",  get(research_page))
        .route("/chat",      get(chat_page))
        .route("/contact",   get(contact_page))
        .route("/dashboard", get(dashboard))

        // SSE streaming
        .route("/api/events", get(sse_handler))

        // API endpoints
        .route("/api/chat",                 post(api_chat))
        .route("/api/contact",              post(api_contact))
        .route("/api/emotion",              get(api_emotion))
        .route("/api/emotion/distribution", get(api_emotion_distribution))
        .route("/api/feedback",             get(api_list_feedback).post(api_submit_feedback))
        .route("/api/mood",                 get(api_mood))
        .route("/api/sensors/latest",       get(api_sensors_latest))
        .route("/api/sensors/history",      get(api_sensors_history))
        .route("/health",                   get(health))

        // Static files
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found)

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
