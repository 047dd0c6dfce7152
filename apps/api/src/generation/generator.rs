//! Resume generation — builds the tailoring prompt, makes one completion
//! call, and defensively validates the model's JSON into a `ResumeDocument`.
//!
//! The call is terminal: no retry on transport failure, non-success status,
//! or malformed JSON. Missing fields never fail a structurally valid
//! response: they take their defaults and the renderer skips them.

use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::{GENERATION_PROMPT_TEMPLATE, GENERATION_SYSTEM};
use crate::generation::{truncate_chars, JOB_TEXT_PROMPT_LIMIT};
use crate::llm_client::{self, strip_json_fences, ChatOptions, Completions, LlmError};
use crate::models::resume::ResumeDocument;

const GENERATION_TEMPERATURE: f32 = 0.7;
const GENERATION_MAX_TOKENS: u32 = 4000;

/// Generates a tailored resume from job text and the candidate's skills
/// document.
pub async fn generate(
    api: &dyn Completions,
    job_text: &str,
    skills_text: &str,
) -> Result<ResumeDocument, AppError> {
    let prompt = GENERATION_PROMPT_TEMPLATE
        .replace("{job_text}", truncate_chars(job_text, JOB_TEXT_PROMPT_LIMIT))
        .replace("{skills}", skills_text);

    info!("Requesting tailored resume from {}", llm_client::MODEL);

    let content = api
        .complete(
            GENERATION_SYSTEM,
            &prompt,
            ChatOptions {
                temperature: GENERATION_TEMPERATURE,
                max_tokens: GENERATION_MAX_TOKENS,
            },
        )
        .await
        .map_err(map_llm_error)?;

    let resume = resume_from_response(&content)?;

    if resume.name.is_empty() {
        warn!("Model response carried no candidate name");
    }
    info!(
        "Generated resume for \"{}\" ({} skills, {} experience entries)",
        resume.job_title,
        resume.skills.len(),
        resume.experience.len()
    );

    Ok(resume)
}

fn map_llm_error(e: LlmError) -> AppError {
    match e {
        LlmError::Unauthorized { .. } | LlmError::MissingKey => AppError::Auth,
        other => AppError::Generation(format!("completion call failed: {other}")),
    }
}

/// Parses completion content (fenced or bare JSON) into a `ResumeDocument`.
///
/// The value must be a JSON object; anything else is a generation failure
/// and no partial document is returned.
pub(crate) fn resume_from_response(content: &str) -> Result<ResumeDocument, AppError> {
    let stripped = strip_json_fences(content);

    let value: Value = serde_json::from_str(stripped)
        .map_err(|e| AppError::Generation(format!("completion is not valid JSON: {e}")))?;

    if !value.is_object() {
        return Err(AppError::Generation(
            "completion JSON is not an object".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| AppError::Generation(format!("completion JSON does not match the resume schema: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RESPONSE: &str = r#"{
        "job_title": "Senior Backend Engineer",
        "name": "Ada Example",
        "email": "ada@example.com",
        "phone": "+1 555 0100",
        "location": "Berlin, Germany",
        "summary": "Backend engineer focused on distributed systems.",
        "skills": ["Rust", "PostgreSQL", "Kubernetes"],
        "experience": [
            {
                "title": "Backend Engineer",
                "company": "Acme",
                "period": "2020 - 2024",
                "achievements": ["Cut p99 latency by 40%"]
            }
        ],
        "education": [
            {"degree": "BSc Computer Science", "institution": "TU Berlin", "year": "2019"}
        ],
        "projects": []
    }"#;

    #[test]
    fn test_full_response_parses() {
        let doc = resume_from_response(FULL_RESPONSE).unwrap();
        assert_eq!(doc.job_title, "Senior Backend Engineer");
        assert_eq!(doc.skills, vec!["Rust", "PostgreSQL", "Kubernetes"]);
        assert_eq!(doc.experience[0].company, "Acme");
    }

    #[test]
    fn test_fenced_response_parses_identically() {
        let fenced = format!("```json\n{FULL_RESPONSE}\n```");
        let plain = resume_from_response(FULL_RESPONSE).unwrap();
        let from_fenced = resume_from_response(&fenced).unwrap();
        assert_eq!(
            serde_json::to_value(&plain).unwrap(),
            serde_json::to_value(&from_fenced).unwrap()
        );
    }

    #[test]
    fn test_missing_job_title_gets_placeholder() {
        let doc = resume_from_response(r#"{"name": "Ada"}"#).unwrap();
        assert_eq!(doc.job_title, "Position");
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let doc = resume_from_response(r#"{"name": "Ada"}"#).unwrap();
        assert!(doc.skills.is_empty());
        assert!(doc.education.is_empty());
        assert!(doc.projects.is_empty());
    }

    #[test]
    fn test_json_array_is_a_generation_error() {
        let result = resume_from_response(r#"[{"name": "Ada"}]"#);
        assert!(matches!(result, Err(AppError::Generation(_))));
    }

    #[test]
    fn test_non_json_is_a_generation_error() {
        let result = resume_from_response("Sorry, I cannot help with that.");
        assert!(matches!(result, Err(AppError::Generation(_))));
    }

    #[test]
    fn test_auth_errors_map_to_auth() {
        assert!(matches!(
            map_llm_error(LlmError::MissingKey),
            AppError::Auth
        ));
        assert!(matches!(
            map_llm_error(LlmError::Unauthorized { status: 401 }),
            AppError::Auth
        ));
        assert!(matches!(
            map_llm_error(LlmError::EmptyContent),
            AppError::Generation(_)
        ));
    }
}
