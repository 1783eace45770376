use anyhow::{anyhow, bail, Result};
use std::env;
use std::fmt;
use std::sync::Arc;

use crate::ai::generator::{GenerationParams, Sampling, TextGenerator};
use crate::ai::ollama::{OllamaGenerator, OLLAMA_MODEL};
use crate::ai::openai::OpenAiGenerator;

#[derive(Clone, PartialEq)]
pub enum Backend {
    Ollama {
        url: Option<String>,
        model: String,
    },
    OpenAi {
        api_key: String,
        model: String,
        chat_url: Option<String>,
    },
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Ollama { .. } => "ollama",
            Backend::OpenAi { .. } => "openai",
        }
    }

    pub fn model(&self) -> &str {
        match self {
            Backend::Ollama { model, .. } | Backend::OpenAi { model, .. } => model,
        }
    }
}

// Keeps the API key out of logs.
impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backend")
            .field("name", &self.name())
            .field("model", &self.model())
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    pub backend: Backend,
    pub params: GenerationParams,
}

impl GeneratorConfig {
    pub fn from_env() -> Result<Self> {
        let backend = match env::var("TIPS_BACKEND")
            .unwrap_or_else(|_| "ollama".to_string())
            .to_lowercase()
            .as_str()
        {
            "ollama" => Backend::Ollama {
                url: env::var("OLLAMA_URL").ok(),
                model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| OLLAMA_MODEL.to_string()),
            },
            "openai" => Backend::OpenAi {
                api_key: env::var("OPENAI_API_KEY")
                    .map_err(|_| anyhow!("OPENAI_API_KEY is required for the openai backend"))?,
                model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4.1".to_string()),
                chat_url: env::var("OPENAI_CHAT_URL").ok(),
            },
            other => bail!("unknown TIPS_BACKEND {other:?}"),
        };

        let defaults = GenerationParams::default();
        let params = GenerationParams {
            max_length: parse_var("TIPS_MAX_LENGTH")?.unwrap_or(defaults.max_length),
            sampling: Sampling {
                enabled: parse_var("TIPS_DO_SAMPLE")?.unwrap_or(defaults.sampling.enabled),
                temperature: parse_var("TIPS_TEMPERATURE")?
                    .unwrap_or(defaults.sampling.temperature),
            },
        };

        Ok(Self { backend, params })
    }

    /// Construct the long-lived generator shared by all requests.
    pub fn build_generator(&self) -> Arc<dyn TextGenerator> {
        match &self.backend {
            Backend::Ollama { url, model } => {
                Arc::new(OllamaGenerator::new(url.as_deref(), model.clone()))
            }
            Backend::OpenAi {
                api_key,
                model,
                chat_url,
            } => Arc::new(OpenAiGenerator::new(
                api_key.clone(),
                model.clone(),
                chat_url.as_deref(),
            )),
        }
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| anyhow!("invalid {name} value {raw:?}: {e}")),
        Err(_) => Ok(None),
    }
}
