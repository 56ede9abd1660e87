//! Question generation backends.
//!
//! - [`openai`]: client for an OpenAI-compatible chat-completions endpoint
//! - [`metered`]: wrapper recording call outcomes and latency
//!
//! Everything above this module talks to a [`QuestionGenerator`], so the
//! HTTP handlers and the exam assembler can be exercised with a scripted
//! generator.

pub mod metered;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

pub use metered::MeteredGenerator;
pub use openai::OpenAiGenerator;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("completion API key is not configured")]
    MissingApiKey,

    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("completion response could not be decoded: {0}")]
    Decode(String),

    #[error("completion response has no content")]
    EmptyContent,
}

/// Turns a prompt into generated question text.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}
