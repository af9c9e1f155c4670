//! OpenAI-compatible chat-completions client.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use shared_utils::env::get_env_var;
use tracing::debug;

use super::{NarrativeError, NarrativeGenerator, Prompt};
use crate::config::NarrativeCfg;

/// Sends one system/user exchange to `{base_url}/chat/completions`.
pub struct ChatCompletionsClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: SecretString,
    temperature: Option<f32>,
}

impl ChatCompletionsClient {
    pub fn new(base_url: &str, model: impl Into<String>, api_key: SecretString) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            api_key,
            temperature: None,
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Builds a client from configuration, reading the key from `cfg.api_key_env`.
    pub fn from_config(cfg: &NarrativeCfg) -> Result<Self, NarrativeError> {
        let api_key = SecretString::new(get_env_var(&cfg.api_key_env)?.into());
        Ok(Self::new(&cfg.base_url, cfg.model.as_str(), api_key).with_temperature(cfg.temperature))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl NarrativeGenerator for ChatCompletionsClient {
    async fn generate(&self, prompt: &Prompt) -> Result<String, NarrativeError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NarrativeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatResponse = response.json().await?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(NarrativeError::EmptyResponse)?;

        debug!(model = %self.model, chars = text.len(), "received narrative");
        Ok(text)
    }
}
