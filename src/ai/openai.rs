use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument, trace, warn};

use crate::ai::generator::{GenerationParams, TextGenerator};

pub const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

/// Chat completions backend for OpenAI and compatible servers.
#[derive(Clone)]
pub struct OpenAiGenerator {
    client: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
}

impl OpenAiGenerator {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>, url: Option<&str>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            url: url.unwrap_or(OPENAI_CHAT_URL).to_string(),
        }
    }
}

pub fn build_chat_body(model: &str, prompt: &str, params: &GenerationParams) -> serde_json::Value {
    json!({
        "model": model,
        "messages": [
            {"role": "user", "content": prompt}
        ],
        "max_tokens": params.max_length,
        "temperature": params.sampling.effective_temperature(),
    })
}

/// Pull the first choice's message text out of a chat completions body.
pub fn parse_chat_content(raw: &str) -> Result<String> {
    let chat: ChatResponse = serde_json::from_str(raw)?;
    let content = chat
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| anyhow!("missing chat choice"))?
        .message
        .content
        .unwrap_or_default();
    Ok(content)
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    #[instrument(level = "trace", skip(self, prompt), fields(model = %self.model))]
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String> {
        let body = build_chat_body(&self.model, prompt, params);
        debug!(url = %self.url, "sending chat completion request");

        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let err_text = resp.text().await.unwrap_or_default();
            warn!(%status, "OpenAI API error");
            return Err(anyhow!("OpenAI API error {status}: {err_text}"));
        }

        let raw = resp.text().await?;
        let snippet: String = raw.chars().take(200).collect();
        debug!(snippet = %snippet, "chat response body");
        trace!(raw = %raw, "chat response");
        parse_chat_content(&raw)
    }
}
