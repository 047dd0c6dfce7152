//! Requirement extraction — the lightweight preview sibling of the
//! generator: job text in, a short title plus 6–12 requirement phrases out.

use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::generation::prompts::{REQUIREMENTS_PROMPT_TEMPLATE, REQUIREMENTS_SYSTEM};
use crate::generation::{truncate_chars, JOB_TEXT_PROMPT_LIMIT};
use crate::llm_client::{strip_json_fences, ChatOptions, Completions, LlmError};
use crate::models::resume::RequirementSummary;

// Extraction runs cold and short: it lists phrases rather than prose.
const EXTRACTION_TEMPERATURE: f32 = 0.2;
const EXTRACTION_MAX_TOKENS: u32 = 800;

/// Extracts a requirement summary from raw job text. Failures map to
/// `ExtractionError`, which callers present as "preview unavailable".
pub async fn extract_requirements(
    api: &dyn Completions,
    job_text: &str,
) -> Result<RequirementSummary, AppError> {
    let prompt = REQUIREMENTS_PROMPT_TEMPLATE
        .replace("{job_text}", truncate_chars(job_text, JOB_TEXT_PROMPT_LIMIT));

    let content = api
        .complete(
            REQUIREMENTS_SYSTEM,
            &prompt,
            ChatOptions {
                temperature: EXTRACTION_TEMPERATURE,
                max_tokens: EXTRACTION_MAX_TOKENS,
            },
        )
        .await
        .map_err(|e| match e {
            LlmError::Unauthorized { .. } | LlmError::MissingKey => AppError::Auth,
            other => AppError::Extraction(format!("completion call failed: {other}")),
        })?;

    let summary = summary_from_response(&content)?;
    info!(
        "Extracted {} requirements for \"{}\"",
        summary.requirements.len(),
        summary.job_title
    );

    Ok(summary)
}

/// Parses the extraction response, keeping only requirement entries that
/// are non-empty strings. The title is trimmed; a missing or non-string
/// title becomes empty rather than an error.
fn summary_from_response(content: &str) -> Result<RequirementSummary, AppError> {
    let value: Value = serde_json::from_str(strip_json_fences(content))
        .map_err(|e| AppError::Extraction(format!("completion is not valid JSON: {e}")))?;

    let job_title = value
        .get("job_title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string();

    let requirements = value
        .get("requirements")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter(|s| !s.trim().is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    Ok(RequirementSummary {
        job_title,
        requirements,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requirements_keep_only_nonempty_strings() {
        let response = r#"{
            "job_title": "  Platform Engineer ",
            "requirements": ["Rust experience", "", "   ", 42, null, "Kubernetes"]
        }"#;
        let summary = summary_from_response(response).unwrap();
        assert_eq!(summary.job_title, "Platform Engineer");
        assert_eq!(summary.requirements, vec!["Rust experience", "Kubernetes"]);
    }

    #[test]
    fn test_fenced_response_parses() {
        let response = "```json\n{\"job_title\": \"SRE\", \"requirements\": [\"On-call\"]}\n```";
        let summary = summary_from_response(response).unwrap();
        assert_eq!(summary.job_title, "SRE");
        assert_eq!(summary.requirements, vec!["On-call"]);
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let summary = summary_from_response("{}").unwrap();
        assert!(summary.job_title.is_empty());
        assert!(summary.requirements.is_empty());
    }

    #[test]
    fn test_non_string_title_becomes_empty() {
        let summary = summary_from_response(r#"{"job_title": 7, "requirements": []}"#).unwrap();
        assert!(summary.job_title.is_empty());
    }

    #[test]
    fn test_unparsable_response_is_an_extraction_error() {
        let result = summary_from_response("the posting wants a rust engineer");
        assert!(matches!(result, Err(AppError::Extraction(_))));
    }
}
