//! Routes and middleware for the standalone server.

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::state::AppState;
use crate::handlers::{self, HttpResponse};

/// Create the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/calculate", post(calculate))
        .route("/api/{dob}", get(age))
        .route("/health", get(health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn index() -> HttpResponse {
    handlers::index::handle()
}

async fn calculate(State(state): State<AppState>, body: Bytes) -> HttpResponse {
    handlers::calculate::handle(&body, state.clock.now())
}

async fn age(State(state): State<AppState>, Path(dob): Path<String>) -> HttpResponse {
    handlers::age::handle(&dob, state.clock.now())
}

async fn health(State(state): State<AppState>) -> HttpResponse {
    handlers::health::handle(state.clock.now())
}

async fn not_found() -> HttpResponse {
    handlers::not_found()
}

