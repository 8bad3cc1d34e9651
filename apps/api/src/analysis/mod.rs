// Content analysis: request/result types, input validation, prompt and
// schema construction, and the analyzer seam backed by Gemini.
// All LLM calls go through llm_client.

pub mod analyzer;
pub mod models;
pub mod prompts;
pub mod validation;
