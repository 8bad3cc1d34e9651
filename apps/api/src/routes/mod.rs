pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::form::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Server-rendered form
        .route(
            "/",
            get(handlers::handle_form_page).post(handlers::handle_form_post),
        )
        // JSON API over the same controller
        .route("/api/v1/form", get(handlers::handle_get_form))
        .route("/api/v1/form/submit", post(handlers::handle_submit))
        .with_state(state)
}
