//! Analyzer — pluggable, trait-based seam between the form controller and the model.
//!
//! Default: `GeminiAnalyzer` (one `generateContent` call per request).
//! `AppState` holds an `Arc<dyn ContentAnalyzer>`; tests swap in a scripted one.

use async_trait::async_trait;
use tracing::warn;

use crate::analysis::models::{AnalysisResult, OptimizationRequest};
use crate::analysis::prompts::{analysis_schema, build_analysis_prompt};
use crate::llm_client::schema::Schema;
use crate::llm_client::{LlmClient, LlmError};

/// Number of titles the prompt asks for.
pub const EXPECTED_TITLES: usize = 5;
/// Number of descriptions the prompt asks for.
pub const EXPECTED_DESCRIPTIONS: usize = 3;

/// Turns one request into one analysis. Implementations must not retry.
#[async_trait]
pub trait ContentAnalyzer: Send + Sync {
    async fn analyze(&self, request: &OptimizationRequest) -> Result<AnalysisResult, LlmError>;
}

/// Gemini-backed analyzer.
pub struct GeminiAnalyzer {
    llm: LlmClient,
    schema: Schema,
}

impl GeminiAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            schema: analysis_schema(),
        }
    }
}

#[async_trait]
impl ContentAnalyzer for GeminiAnalyzer {
    async fn analyze(&self, request: &OptimizationRequest) -> Result<AnalysisResult, LlmError> {
        let prompt = build_analysis_prompt(request);
        let result: AnalysisResult = self.llm.call_json(&prompt, &self.schema).await?;

        if result.improved_titles.len() != EXPECTED_TITLES
            || result.improved_descriptions.len() != EXPECTED_DESCRIPTIONS
        {
            warn!(
                "Model returned {} titles and {} descriptions (asked for {} and {})",
                result.improved_titles.len(),
                result.improved_descriptions.len(),
                EXPECTED_TITLES,
                EXPECTED_DESCRIPTIONS
            );
        }

        Ok(result)
    }
}
