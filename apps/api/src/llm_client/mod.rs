/// LLM client — the single point of entry for all completion calls.
///
/// ARCHITECTURAL RULE: no other module may talk to the completion API
/// directly. The generator and the requirement extractor both go through
/// the `Completions` trait, which lets tests swap in a stub.
///
/// Model: llama-3.3-70b-versatile (hardcoded, do not make configurable;
/// the prompt contract and the model must not drift apart).
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
/// The model used for all completion calls.
pub const MODEL: &str = "llama-3.3-70b-versatile";
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("credentials rejected by the completion API (status {status})")]
    Unauthorized { status: u16 },

    #[error("API key is not configured")]
    MissingKey,

    #[error("completion returned no content")]
    EmptyContent,
}

/// Per-call sampling parameters. Each caller fixes its own values;
/// generation runs warmer and longer than requirement extraction.
#[derive(Debug, Clone, Copy)]
pub struct ChatOptions {
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// One completion exchange: system + user message in, content text out.
///
/// Held in `AppState` as `Arc<dyn Completions>` so the production client
/// and test stubs are interchangeable.
#[async_trait]
pub trait Completions: Send + Sync {
    async fn complete(
        &self,
        system: &str,
        prompt: &str,
        opts: ChatOptions,
    ) -> Result<String, LlmError>;
}

/// The production completion client, backed by the Groq OpenAI-compatible
/// chat endpoint.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }
}

#[async_trait]
impl Completions for LlmClient {
    /// Makes a single completion call. No retry: any transport failure or
    /// non-success status is terminal for the caller's pipeline stage.
    async fn complete(
        &self,
        system: &str,
        prompt: &str,
        opts: ChatOptions,
    ) -> Result<String, LlmError> {
        if self.api_key.is_empty() {
            return Err(LlmError::MissingKey);
        }

        let request_body = ChatRequest {
            model: MODEL,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: opts.temperature,
            max_tokens: opts.max_tokens,
        };

        let response = self
            .client
            .post(GROQ_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(LlmError::Unauthorized {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the provider's error message when the body carries one
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        let content = chat_response
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or(LlmError::EmptyContent)?;

        debug!("Completion call succeeded: {} chars", content.len());

        Ok(content)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_surrounding_whitespace() {
        let input = "  \n```json\n{\"a\": 1}\n```\n  ";
        assert_eq!(strip_json_fences(input), "{\"a\": 1}");
    }

    #[tokio::test]
    async fn test_empty_api_key_is_a_credential_error() {
        let client = LlmClient::new(String::new());
        let result = client
            .complete(
                "system",
                "prompt",
                ChatOptions {
                    temperature: 0.2,
                    max_tokens: 100,
                },
            )
            .await;
        assert!(matches!(result, Err(LlmError::MissingKey)));
    }
}
