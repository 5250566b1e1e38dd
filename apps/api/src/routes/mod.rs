pub mod health;

use axum::{routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;

use crate::errors::panic_response;
use crate::resume::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/resume", get(handlers::handle_get_resume))
        .route("/api/resume/:section", get(handlers::handle_get_section))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
