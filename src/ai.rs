pub mod config;
pub mod generator;
pub mod ollama;
pub mod openai;
pub mod prompts;

pub use generator::{GenerationParams, Sampling, TextGenerator};
