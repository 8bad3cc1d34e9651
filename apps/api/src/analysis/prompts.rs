// Prompt and response schema for content analysis.

use crate::analysis::models::OptimizationRequest;
use crate::llm_client::schema::Schema;

/// Shown in place of the topic when the user leaves it blank.
pub const TOPIC_PLACEHOLDER: &str = "未指定";

const ANALYSIS_ROLE: &str =
    "作为一位世界级的文案撰写专家和SEO优化大师，请分析用户提供的主题、当前标题和简介。";

const ANALYSIS_TASKS: &str = "\
任务:
1. 给当前内容的吸引力、简洁性和点击率潜力打分（0-100分）。
2. 提供一段简短犀利的点评，指出问题所在（例如：太长、无聊、缺乏关键词等）。
3. 提供 5 个优化后的标题建议。要求：简练、吸引人、有爆款潜质，使用引发好奇或情感共鸣的技巧。
4. 提供 3 个优化后的简介建议。要求：精准概括、引导点击、包含关键信息。

请以 JSON 格式输出结果。";

/// Builds the analysis prompt for one request.
///
/// User text is interpolated once, so braces or placeholder-looking text in
/// the input are passed through untouched.
pub fn build_analysis_prompt(request: &OptimizationRequest) -> String {
    let topic = if request.topic.trim().is_empty() {
        TOPIC_PLACEHOLDER
    } else {
        request.topic.as_str()
    };

    format!(
        "{ANALYSIS_ROLE}\n\n\
         用户输入信息:\n\
         - 主题/领域: {topic}\n\
         - 当前标题: {title}\n\
         - 当前简介: {description}\n\n\
         {ANALYSIS_TASKS}",
        title = request.current_title,
        description = request.current_description,
    )
}

/// Output schema declared to the model. All four fields are required.
pub fn analysis_schema() -> Schema {
    Schema::object()
        .required_property(
            "score",
            Schema::integer().describe("0 to 100 score representing quality"),
        )
        .required_property(
            "critique",
            Schema::string().describe("A short, sharp critique of the current content in Chinese"),
        )
        .required_property(
            "improvedTitles",
            Schema::array(Schema::string()).describe("List of 5 optimized titles in Chinese"),
        )
        .required_property(
            "improvedDescriptions",
            Schema::array(Schema::string())
                .describe("List of 3 optimized descriptions in Chinese"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(topic: &str, title: &str, description: &str) -> OptimizationRequest {
        OptimizationRequest {
            topic: topic.to_string(),
            current_title: title.to_string(),
            current_description: description.to_string(),
        }
    }

    #[test]
    fn test_prompt_uses_placeholder_for_blank_topic() {
        let prompt = build_analysis_prompt(&request("", "iPhone 15 评测", ""));
        assert!(prompt.contains("iPhone 15 评测"));
        assert!(prompt.contains("- 主题/领域: 未指定"));
    }

    #[test]
    fn test_prompt_whitespace_topic_counts_as_blank() {
        let prompt = build_analysis_prompt(&request("   ", "标题", ""));
        assert!(prompt.contains(TOPIC_PLACEHOLDER));
    }

    #[test]
    fn test_prompt_embeds_all_fields() {
        let prompt = build_analysis_prompt(&request("数码科技", "iPhone 15 评测", "一周深度体验"));
        assert!(prompt.contains("- 主题/领域: 数码科技"));
        assert!(prompt.contains("- 当前标题: iPhone 15 评测"));
        assert!(prompt.contains("- 当前简介: 一周深度体验"));
        assert!(!prompt.contains(TOPIC_PLACEHOLDER));
    }

    #[test]
    fn test_prompt_asks_for_counts_and_json() {
        let prompt = build_analysis_prompt(&request("", "t", ""));
        assert!(prompt.contains("0-100分"));
        assert!(prompt.contains("5 个优化后的标题"));
        assert!(prompt.contains("3 个优化后的简介"));
        assert!(prompt.contains("JSON"));
    }

    #[test]
    fn test_prompt_passes_braces_through() {
        let prompt = build_analysis_prompt(&request("", "{current_description}", "desc"));
        assert!(prompt.contains("- 当前标题: {current_description}"));
    }

    #[test]
    fn test_schema_requires_all_four_fields() {
        let value = serde_json::to_value(analysis_schema()).unwrap();
        assert_eq!(
            value["required"],
            serde_json::json!(["score", "critique", "improvedTitles", "improvedDescriptions"])
        );
        assert_eq!(value["properties"]["score"]["type"], "INTEGER");
        assert_eq!(value["properties"]["critique"]["type"], "STRING");
        assert_eq!(value["properties"]["improvedTitles"]["type"], "ARRAY");
        assert_eq!(
            value["properties"]["improvedDescriptions"]["items"]["type"],
            "STRING"
        );
    }
}
