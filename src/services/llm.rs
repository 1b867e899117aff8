//! Generation backend clients.
//!
//! Two interchangeable text-completion backends sit behind the
//! [`GenerationBackend`] trait: an OpenAI-compatible chat-completions API
//! and a local Ollama server. The trait is what the pipeline (and its
//! tests) depend on; nothing outside this module knows which provider is
//! configured.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{AppConfig, LlmProvider};

/// System prompt shared by both providers.
const SYSTEM_PROMPT: &str = "You are a professional product description writer specializing in \
                             concise, engaging, and accurate descriptions for automotive parts.";

const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// A text-completion capability: prompt in, generated text out.
pub trait GenerationBackend: Send + Sync {
    fn generate(&self, prompt: &str) -> impl Future<Output = Result<String, GenerationError>> + Send;
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("HTTP request to generation backend failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation backend returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("generation backend response contained no completion content")]
    MissingContent,

    #[error("generation backend configuration error: {0}")]
    Config(String),
}

// ── OpenAI-compatible chat completions ──────────────────────────────────

/// Client for an OpenAI-compatible `/chat/completions` endpoint.
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, base_url: String, model: String) -> Result<Self, GenerationError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            api_key,
            base_url,
            model,
        })
    }

    async fn chat(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let content = parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(GenerationError::MissingContent)?;

        Ok(content.trim().to_string())
    }
}

// ── Ollama ──────────────────────────────────────────────────────────────

/// Client for a local Ollama server's `/api/generate` endpoint.
pub struct OllamaClient {
    http: Client,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: String,
    temperature: f32,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaResponse {
    response: String,
}

impl OllamaClient {
    pub fn new(base_url: String, model: String) -> Result<Self, GenerationError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            http,
            base_url,
            model,
        })
    }

    async fn complete(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/api/generate", self.base_url.trim_end_matches('/'));
        let request = OllamaRequest {
            model: &self.model,
            // Ollama's generate endpoint has no separate system role.
            prompt: format!("{SYSTEM_PROMPT}\n\n{prompt}"),
            temperature: TEMPERATURE,
            stream: false,
        };

        let response = self.http.post(&url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: OllamaResponse = response.json().await?;
        Ok(parsed.response.trim().to_string())
    }
}

// ── Provider selection ──────────────────────────────────────────────────

/// The configured backend. Holding an enum rather than a trait object
/// keeps the pipeline generic over [`GenerationBackend`] without dynamic
/// dispatch.
pub enum LlmBackend {
    OpenAi(OpenAiClient),
    Ollama(OllamaClient),
}

impl LlmBackend {
    /// Build the backend selected by configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, GenerationError> {
        match config.llm_provider {
            LlmProvider::OpenAi => {
                let api_key = config.openai_api_key.clone().ok_or_else(|| {
                    GenerationError::Config(
                        "OPENAI_API_KEY is required when LLM_PROVIDER=openai".to_string(),
                    )
                })?;
                Ok(Self::OpenAi(OpenAiClient::new(
                    api_key,
                    config.openai_base_url.clone(),
                    config.openai_model.clone(),
                )?))
            }
            LlmProvider::Ollama => Ok(Self::Ollama(OllamaClient::new(
                config.ollama_url.clone(),
                config.ollama_model.clone(),
            )?)),
        }
    }

    /// Name of the configured model, for logging.
    pub fn model_name(&self) -> &str {
        match self {
            Self::OpenAi(client) => &client.model,
            Self::Ollama(client) => &client.model,
        }
    }
}

impl GenerationBackend for LlmBackend {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        match self {
            Self::OpenAi(client) => client.chat(prompt).await,
            Self::Ollama(client) => client.complete(prompt).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_parsing() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":" Heated oxygen sensor \n"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        let content = parsed.choices.into_iter().next().unwrap().message.content;
        assert_eq!(content.trim(), "Heated oxygen sensor");
    }

    #[test]
    fn test_chat_response_without_choices() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[test]
    fn test_ollama_response_parsing() {
        let body = r#"{"model":"llama3.2:latest","response":"Ignition coil, OE fit","done":true}"#;
        let parsed: OllamaResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.response, "Ignition coil, OE fit");
    }

    #[test]
    fn test_chat_request_shape() {
        let request = ChatRequest {
            model: "gpt-4.1-nano",
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: "Write a description",
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4.1-nano");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["max_tokens"], 500);
    }
}
