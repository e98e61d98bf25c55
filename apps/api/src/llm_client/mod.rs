//! LLM client, the single point of entry for all LLM API calls in HireLens.
//!
//! Nothing else in the crate talks to OpenAI or Gemini directly.
//! Supports the OpenAI Chat Completions API and the Gemini `generateContent` API.

use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

pub const OPENAI_API_BASE: &str = "https://api.openai.com";
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1000;
const MAX_RETRIES: u32 = 3;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("LLM response contained no JSON object")]
    NoJson,
}

// Drops the request URL, which can carry credentials.
impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        LlmError::Http(e.without_url())
    }
}

/// Which hosted model answers the prompts.
#[derive(Debug, Clone)]
pub enum LlmProvider {
    OpenAi { api_key: String, model: String },
    Gemini { api_key: String, model: String },
}

impl LlmProvider {
    pub fn name(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi { .. } => "openai",
            LlmProvider::Gemini { .. } => "gemini",
        }
    }

    pub fn model(&self) -> &str {
        match self {
            LlmProvider::OpenAi { model, .. } | LlmProvider::Gemini { model, .. } => model,
        }
    }

    fn default_base_url(&self) -> &'static str {
        match self {
            LlmProvider::OpenAi { .. } => OPENAI_API_BASE,
            LlmProvider::Gemini { .. } => GEMINI_API_BASE,
        }
    }
}

// ── OpenAI wire types ───────────────────────────────────────────────────────

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
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}

// ── Gemini wire types ───────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    usage_metadata: Option<GeminiUsage>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
}

/// Both providers wrap failures as `{"error": {"message": ...}}`.
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// The single LLM client used by all services in HireLens.
/// Wraps the provider API with retry logic and structured output helpers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    provider: LlmProvider,
    base_url: String,
    retry_base_delay: Duration,
}

impl LlmClient {
    pub fn new(provider: LlmProvider) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: provider.default_base_url().to_string(),
            provider,
            retry_base_delay: Duration::from_millis(1000),
        })
    }

    /// Points the client at a different host (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    pub fn provider(&self) -> &LlmProvider {
        &self.provider
    }

    /// Sends one prompt and returns the model's text reply.
    /// Retries on 429 (rate limit), 5xx and transport errors with exponential backoff.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let mut last_error: Option<LlmError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1x, 2x the base delay
                let delay = self.retry_base_delay * (1 << (attempt - 1));
                warn!(
                    "LLM call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match self.send(prompt, system).await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(e.into());
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("LLM API returned {}: {}", status, body);
                last_error = Some(LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let body = response.text().await?;
            return self.reply_text(&body);
        }

        Err(last_error.unwrap_or(LlmError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }

    /// Calls the LLM and deserializes the JSON object embedded in its reply.
    /// The prompt must instruct the model to return JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let text = self.call(prompt, system).await?;
        let json = extract_json_object(&text).ok_or(LlmError::NoJson)?;
        serde_json::from_str(json).map_err(LlmError::Parse)
    }

    async fn send(&self, prompt: &str, system: &str) -> Result<reqwest::Response, reqwest::Error> {
        match &self.provider {
            LlmProvider::OpenAi { api_key, model } => {
                let body = ChatRequest {
                    model,
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
                    temperature: TEMPERATURE,
                    max_tokens: MAX_TOKENS,
                };
                self.client
                    .post(format!("{}/v1/chat/completions", self.base_url))
                    .bearer_auth(api_key)
                    .json(&body)
                    .send()
                    .await
            }
            LlmProvider::Gemini { api_key, model } => {
                let body = json!({
                    "systemInstruction": { "parts": [{ "text": system }] },
                    "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
                    "generationConfig": {
                        "temperature": TEMPERATURE,
                        "maxOutputTokens": MAX_TOKENS
                    }
                });
                self.client
                    .post(format!(
                        "{}/v1beta/models/{}:generateContent",
                        self.base_url, model
                    ))
                    .header("x-goog-api-key", api_key)
                    .json(&body)
                    .send()
                    .await
            }
        }
    }

    /// Pulls the reply text out of a successful provider response body.
    fn reply_text(&self, body: &str) -> Result<String, LlmError> {
        let text = match &self.provider {
            LlmProvider::OpenAi { .. } => {
                let response: ChatResponse = serde_json::from_str(body)?;
                if let Some(usage) = &response.usage {
                    debug!(
                        "LLM call succeeded: input_tokens={}, output_tokens={}",
                        usage.prompt_tokens, usage.completion_tokens
                    );
                }
                response
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|c| c.message.content)
            }
            LlmProvider::Gemini { .. } => {
                let response: GeminiResponse = serde_json::from_str(body)?;
                if let Some(usage) = &response.usage_metadata {
                    debug!(
                        "LLM call succeeded: input_tokens={:?}, output_tokens={:?}",
                        usage.prompt_token_count, usage.candidates_token_count
                    );
                }
                response
                    .candidates
                    .into_iter()
                    .next()
                    .and_then(|c| c.content)
                    .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
            }
        };

        text.map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or(LlmError::EmptyContent)
    }
}

/// Finds the JSON object in an LLM reply: the body of a ```json fence if
/// present, otherwise the span from the first `{` to the last `}`.
pub fn extract_json_object(text: &str) -> Option<&str> {
    if let Some(start) = text.find("```json") {
        let rest = &text[start + "```json".len()..];
        if let Some(end) = rest.find("```") {
            let fenced = rest[..end].trim();
            if fenced.starts_with('{') && fenced.ends_with('}') {
                return Some(fenced);
            }
        }
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
