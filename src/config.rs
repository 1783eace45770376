use anyhow::Result;
use std::env;

use crate::ai::config::GeneratorConfig;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_addr: String,
    pub generator: GeneratorConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let generator = GeneratorConfig::from_env()?;
        Ok(Self {
            bind_addr,
            generator,
        })
    }
}
