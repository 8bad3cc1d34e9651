use thiserror::Error;

use crate::analysis::models::OptimizationRequest;

pub const MAX_TOPIC_CHARS: usize = 100;
pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_DESCRIPTION_CHARS: usize = 5000;

/// Input problems caught before any provider call.
/// Display strings are shown inline next to the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("请输入标题")]
    MissingTitle,

    #[error("{field}过长（最多 {max} 个字符）")]
    TooLong { field: &'static str, max: usize },
}

/// Checks a submission. The title is trimmed before the emptiness check,
/// so a whitespace-only title is rejected as missing, not only `""`.
/// Lengths are measured in characters, not bytes.
pub fn validate_request(request: &OptimizationRequest) -> Result<(), ValidationError> {
    if request.current_title.trim().is_empty() {
        return Err(ValidationError::MissingTitle);
    }

    check_length("主题", &request.topic, MAX_TOPIC_CHARS)?;
    check_length("标题", &request.current_title, MAX_TITLE_CHARS)?;
    check_length("简介", &request.current_description, MAX_DESCRIPTION_CHARS)?;

    Ok(())
}

fn check_length(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}
