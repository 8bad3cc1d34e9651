//! Form controller — owns the Idle/Loading/Success/Error state machine.
//!
//! Flow: submit → validate → Loading → analyzer (own task) → Success | Error.
//!
//! One request may be in flight at a time. The provider call runs on a
//! spawned task, so it completes even if the submitting HTTP request is dropped.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::analysis::analyzer::ContentAnalyzer;
use crate::analysis::models::{AnalysisResult, OptimizationRequest};
use crate::analysis::validation::{validate_request, ValidationError};
use crate::llm_client::LlmError;

/// Shown for every analyzer failure; the specific kind is only logged.
pub const GENERIC_ERROR_MESSAGE: &str = "分析过程中出现错误，请检查网络或稍后再试。";

/// Where the current request cycle stands.
///
/// The result and the error message live in separate variants, so at most
/// one of them is current.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success { result: AnalysisResult },
    Error { message: String },
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }
}

/// Everything the presentation layer needs, captured at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub state: RequestState,
    pub input: OptimizationRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("An analysis is already in progress")]
    Busy,

    #[error("Analysis task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub struct FormController {
    view: Mutex<FormView>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}

impl FormController {
    pub fn new() -> Self {
        Self {
            view: Mutex::new(FormView::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, FormView> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn snapshot(&self) -> FormView {
        self.lock().clone()
    }

    /// Synchronous half of a submission.
    ///
    /// On success the controller is `Loading`, prior result, error and
    /// validation message are cleared, and the id of the new cycle is returned.
    /// An invalid input only sets the validation message (and echoes the
    /// typed fields unless a request is in flight); a valid submission while
    /// `Loading` changes nothing.
    pub fn begin(&self, input: OptimizationRequest) -> Result<Uuid, SubmitError> {
        let mut view = self.lock();

        if let Err(e) = validate_request(&input) {
            if !view.state.is_loading() {
                view.input = input;
            }
            view.validation_message = Some(e.to_string());
            return Err(e.into());
        }

        if view.state.is_loading() {
            return Err(SubmitError::Busy);
        }

        let request_id = Uuid::new_v4();
        view.state = RequestState::Loading;
        view.input = input;
        view.validation_message = None;
        view.request_id = Some(request_id);
        view.completed_at = None;
        Ok(request_id)
    }

    /// Applies the analyzer outcome for `request_id` and returns the view as
    /// of that transition. Outcomes for any other cycle are ignored.
    pub fn complete(
        &self,
        request_id: Uuid,
        outcome: Result<AnalysisResult, LlmError>,
    ) -> FormView {
        let mut view = self.lock();

        if !view.state.is_loading() || view.request_id != Some(request_id) {
            warn!("Ignoring outcome for stale request {request_id}");
            return view.clone();
        }

        view.state = match outcome {
            Ok(result) => {
                info!(
                    "Analysis {} succeeded: score={}, titles={}, descriptions={}",
                    request_id,
                    result.score,
                    result.improved_titles.len(),
                    result.improved_descriptions.len()
                );
                RequestState::Success { result }
            }
            Err(e) => {
                error!("Analysis {} failed ({}): {e}", request_id, e.kind());
                RequestState::Error {
                    message: GENERIC_ERROR_MESSAGE.to_string(),
                }
            }
        };
        view.completed_at = Some(Utc::now());
        view.clone()
    }

    /// Runs a full submission and returns the view recorded when its
    /// outcome was applied, not a later snapshot.
    pub async fn submit(
        self: &Arc<Self>,
        input: OptimizationRequest,
        analyzer: Arc<dyn ContentAnalyzer>,
    ) -> Result<FormView, SubmitError> {
        let request = input.clone();
        let request_id = self.begin(input)?;
        info!("Analysis {} started for title {:?}", request_id, request.current_title);

        let controller = Arc::clone(self);
        let task = tokio::spawn(async move {
            let outcome = analyzer.analyze(&request).await;
            controller.complete(request_id, outcome)
        });

        match task.await {
            Ok(view) => Ok(view),
            Err(e) => {
                // A panicked task never recorded an outcome; do not stay Loading.
                let mut view = self.lock();
                if view.request_id == Some(request_id) && view.state.is_loading() {
                    view.state = RequestState::Error {
                        message: GENERIC_ERROR_MESSAGE.to_string(),
                    };
                    view.completed_at = Some(Utc::now());
                }
                Err(e.into())
            }
        }
    }
}
