use std::sync::Arc;

use crate::analysis::analyzer::ContentAnalyzer;
use crate::config::Config;
use crate::form::controller::FormController;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable analyzer. Default: GeminiAnalyzer.
    pub analyzer: Arc<dyn ContentAnalyzer>,
    /// The single form state machine; guards the one in-flight request.
    /// Every visitor sees the same typed fields and validation message.
    pub controller: Arc<FormController>,
    pub config: Config,
}
