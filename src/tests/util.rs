use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::Mutex;

use crate::ai::{GenerationParams, TextGenerator};

/// Deterministic generator that replays a canned answer and records calls.
pub struct StubGenerator {
    reply: Result<String, String>,
    calls: Mutex<Vec<(String, GenerationParams)>>,
}

impl StubGenerator {
    pub fn reply(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn fail(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, GenerationParams)> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((prompt.to_string(), *params));
        }
        self.reply.clone().map_err(|msg| anyhow!(msg))
    }
}
