use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument, trace, warn};

use crate::ai::generator::{GenerationParams, TextGenerator};

pub const OLLAMA_URL: &str = "http://localhost:11434";
pub const OLLAMA_MODEL: &str = "llama3.2:latest";

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Local Ollama server using the non-streaming `/api/generate` endpoint.
#[derive(Clone)]
pub struct OllamaGenerator {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaGenerator {
    pub fn new(base_url: Option<&str>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.unwrap_or(OLLAMA_URL).trim_end_matches('/').to_string(),
            model: model.into(),
        }
    }
}

pub fn build_generate_body(
    model: &str,
    prompt: &str,
    params: &GenerationParams,
) -> serde_json::Value {
    json!({
        "model": model,
        "prompt": prompt,
        "stream": false,
        "options": {
            "num_predict": params.max_length,
            "temperature": params.sampling.effective_temperature(),
        }
    })
}

#[async_trait]
impl TextGenerator for OllamaGenerator {
    #[instrument(level = "trace", skip(self, prompt), fields(model = %self.model))]
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        let body = build_generate_body(&self.model, prompt, params);
        debug!(url, "sending generate request");

        let resp = self.client.post(&url).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let err_text = resp.text().await.unwrap_or_default();
            warn!(%status, "Ollama API error");
            return Err(anyhow!("Ollama API error {status}: {err_text}"));
        }

        let raw = resp.text().await?;
        trace!(raw = %raw, "generate response");
        let data: GenerateResponse = serde_json::from_str(&raw)?;
        Ok(data.response)
    }
}
