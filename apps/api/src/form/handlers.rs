//! Axum route handlers for the form page and its JSON twin.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form, Json,
};

use crate::analysis::models::OptimizationRequest;
use crate::errors::AppError;
use crate::form::controller::{FormView, SubmitError};
use crate::render::render_page;
use crate::state::AppState;

fn page(status: StatusCode, view: &FormView) -> Response {
    (status, Html(render_page(view).into_string())).into_response()
}

/// GET /
///
/// Renders the form for the current controller state.
pub async fn handle_form_page(State(state): State<AppState>) -> Response {
    page(StatusCode::OK, &state.controller.snapshot())
}

/// POST /
///
/// Form-encoded submission. Always answers with the rendered page; the
/// status tells scripted clients whether the submission was accepted.
pub async fn handle_form_post(
    State(state): State<AppState>,
    Form(input): Form<OptimizationRequest>,
) -> Response {
    let (status, view) = match state
        .controller
        .submit(input, state.analyzer.clone())
        .await
    {
        Ok(view) => (StatusCode::OK, view),
        Err(SubmitError::Invalid(_)) => {
            (StatusCode::UNPROCESSABLE_ENTITY, state.controller.snapshot())
        }
        Err(SubmitError::Busy) => (StatusCode::CONFLICT, state.controller.snapshot()),
        Err(SubmitError::Task(e)) => {
            tracing::error!("Analysis task failed: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, state.controller.snapshot())
        }
    };

    page(status, &view)
}

/// GET /api/v1/form
pub async fn handle_get_form(State(state): State<AppState>) -> Json<FormView> {
    Json(state.controller.snapshot())
}

/// POST /api/v1/form/submit
///
/// JSON submission. A failed analysis is still a 200: the snapshot carries
/// the `ERROR` state and its generic message.
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(input): Json<OptimizationRequest>,
) -> Result<Json<FormView>, AppError> {
    let view = state
        .controller
        .submit(input, state.analyzer.clone())
        .await?;
    Ok(Json(view))
}
