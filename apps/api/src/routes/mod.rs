pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let artifacts_dir = state.config.output_dir.clone();

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate", post(handlers::handle_generate))
        // generated artifacts, exposed read-only
        .nest_service("/generated", ServeDir::new(artifacts_dir))
        .with_state(state)
}
