pub mod health;

use axum::{routing::get, Router};

use crate::recommendation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/recommendations/:member_id",
            get(handlers::handle_get_recommendations),
        )
        .with_state(state)
}
