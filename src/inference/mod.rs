//! Inference backends: one narrow capability trait per NLP task.
//!
//! The routing and gating logic in the rest of the crate only sees these
//! traits, so it can be exercised against fakes in tests. `huggingface`
//! provides the HTTP adapter used in production.

mod huggingface;

pub use huggingface::HuggingFaceClient;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output length bounds for summarization, in model tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LengthBounds {
    pub min_length: u32,
    pub max_length: u32,
}

/// Answer span extracted by a question-answering model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QaResult {
    pub answer: String,
    /// Model confidence in [0, 1]
    pub score: f64,
    #[serde(default)]
    pub start: Option<usize>,
    #[serde(default)]
    pub end: Option<usize>,
}

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("Inference API error ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to send request to inference API: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to parse inference response: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Inference response contained no {0}")]
    Empty(&'static str),
}

impl InferenceError {
    /// Rate limits, server errors (including 503 while a model is loading)
    /// and transport failures are transient. Other client errors and
    /// malformed responses are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            InferenceError::Status { status, .. } => {
                *status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
            }
            InferenceError::Transport(_) => true,
            InferenceError::Decode(_) | InferenceError::Empty(_) => false,
        }
    }
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Name of the underlying model, for logging.
    fn model(&self) -> &str;

    async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String, InferenceError>;
}

#[async_trait]
pub trait Translator: Send + Sync {
    fn model(&self) -> &str;

    /// Translate `text` between two FLORES-200 codes.
    ///
    /// Returns every candidate the model produced, best first.
    async fn translate(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<Vec<String>, InferenceError>;
}

#[async_trait]
pub trait QuestionAnswerer: Send + Sync {
    fn model(&self) -> &str;

    async fn answer(&self, question: &str, context: &str) -> Result<QaResult, InferenceError>;
}
