use serde::{Deserialize, Serialize};

/// The three form fields submitted for analysis.
///
/// Only `current_title` is required; validation happens before the request
/// reaches the analyzer. Missing fields deserialize as empty strings so the
/// same type can carry the raw form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptimizationRequest {
    pub topic: String,
    pub current_title: String,
    pub current_description: String,
}

/// Structured analysis returned by the model.
///
/// `score` is 0–100 by contract and kept as-is. The model is asked for five
/// titles and three descriptions, but any length is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub score: i64,
    pub critique: String,
    pub improved_titles: Vec<String>,
    pub improved_descriptions: Vec<String>,
}
