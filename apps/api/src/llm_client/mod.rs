/// LLM Client: the single point of entry for all model calls in the recommender.
///
/// ARCHITECTURAL RULE: No other module may call the provider API directly.
/// All model interactions go through `ModelCapability`, implemented here by `LlmClient`.
///
/// Model: gpt-4o-mini (hardcoded; do not make configurable to prevent drift)
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

/// The model used for all recommendation calls.
pub const MODEL: &str = "gpt-4o-mini";
const MAX_RETRIES: u32 = 3;
const RETRY_BACKOFF: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM refused the request: {0}")]
    Refusal(String),
}

/// Everything the remote capability needs for one structured completion.
#[derive(Debug)]
pub struct CompletionRequest<'a> {
    pub system: &'a str,
    pub prompt: &'a str,
    pub schema_name: &'a str,
    pub schema: &'a Value,
    pub temperature: f32,
}

/// A remote model that answers a system + user exchange with text
/// conforming to the requested JSON schema.
///
/// Carried in `AppState` as `Arc<dyn ModelCapability>`.
#[async_trait]
pub trait ModelCapability: Send + Sync {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat<'a>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'a str,
    json_schema: JsonSchemaFormat<'a>,
}

#[derive(Debug, Serialize)]
struct JsonSchemaFormat<'a> {
    name: &'a str,
    strict: bool,
    schema: &'a Value,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
    pub refusal: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the text content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }

    pub fn refusal(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.refusal.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// OpenAI-compatible Chat Completions client with retry logic and
/// schema-constrained output.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
    /// Delay before the first retry; doubles on each further attempt.
    retry_backoff: Duration,
}

impl LlmClient {
    pub fn new(api_key: String, base_url: &str, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            retry_backoff: RETRY_BACKOFF,
        })
    }

    /// Makes a raw call to the provider, returning the full response object.
    /// Retries on transport errors (including timeouts), 429 and 5xx with
    /// exponential backoff.
    pub async fn call(&self, request: &CompletionRequest<'_>) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            temperature: request.temperature,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: request.system,
                },
                ChatMessage {
                    role: "user",
                    content: request.prompt,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_schema",
                json_schema: JsonSchemaFormat {
                    name: request.schema_name,
                    strict: true,
                    schema: request.schema,
                },
            },
        };

        let mut attempt: u32 = 0;

        loop {
            attempt += 1;

            let retryable = match self
                .client
                .post(&self.endpoint)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await
            {
                Err(e) => LlmError::Http(e),
                Ok(response) => {
                    let status = response.status();

                    if status.as_u16() == 429 || status.is_server_error() {
                        let body = response.text().await.unwrap_or_default();
                        warn!("LLM API returned {}: {}", status, body);
                        LlmError::Api {
                            status: status.as_u16(),
                            message: body,
                        }
                    } else if !status.is_success() {
                        let body = response.text().await.unwrap_or_default();
                        let message = serde_json::from_str::<ProviderError>(&body)
                            .map(|e| e.error.message)
                            .unwrap_or(body);
                        return Err(LlmError::Api {
                            status: status.as_u16(),
                            message,
                        });
                    } else {
                        let chat_response: ChatResponse = response.json().await?;

                        if let Some(usage) = &chat_response.usage {
                            debug!(
                                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                                usage.prompt_tokens, usage.completion_tokens
                            );
                        }

                        return Ok(chat_response);
                    }
                }
            };

            if attempt >= MAX_RETRIES {
                return Err(retryable);
            }

            // Exponential backoff: base, 2x base
            let delay = self.retry_backoff * 2u32.pow(attempt - 1);
            warn!(
                "LLM call attempt {} failed ({}), retrying after {}ms...",
                attempt,
                retryable,
                delay.as_millis()
            );
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl ModelCapability for LlmClient {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, LlmError> {
        let response = self.call(request).await?;

        if let Some(refusal) = response.refusal() {
            return Err(LlmError::Refusal(refusal.to_string()));
        }

        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok(strip_json_fences(text).to_string())
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
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
