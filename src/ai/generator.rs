use anyhow::Result;
use async_trait::async_trait;

/// Sampling switch passed through to the backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sampling {
    pub enabled: bool,
    pub temperature: f32,
}

impl Sampling {
    /// Temperature to send to backends that have no separate sampling flag.
    pub fn effective_temperature(&self) -> f32 {
        if self.enabled {
            self.temperature
        } else {
            0.0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    /// Upper bound on generated tokens.
    pub max_length: u32,
    pub sampling: Sampling,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: 200,
            sampling: Sampling {
                enabled: true,
                temperature: 0.7,
            },
        }
    }
}

/// A text generation backend.
///
/// Implementations are built once at startup and shared between requests,
/// so they must not keep per-request state.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String>;
}
