//! Written commentary on a report, produced by a hosted language model.
//!
//! The pipeline only sees [`NarrativeGenerator`]; [`client::ChatCompletionsClient`]
//! is the production implementation. Generation failures never fail a report:
//! callers substitute [`FALLBACK_NARRATIVE`].

pub mod client;
pub mod emphasis;
pub mod prompt;

use async_trait::async_trait;
use shared_utils::env::MissingEnvVarError;
use thiserror::Error;

pub use client::ChatCompletionsClient;
pub use prompt::{Prompt, build_prompt};

pub const FALLBACK_NARRATIVE: &str = "An error occurred while generating insights.";

#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    async fn generate(&self, prompt: &Prompt) -> Result<String, NarrativeError>;
}

#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error(transparent)]
    MissingApiKey(#[from] MissingEnvVarError),

    #[error("narrative request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("narrative API returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("narrative API returned no content")]
    EmptyResponse,
}
