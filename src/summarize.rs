use std::sync::Arc;

use tracing::debug;

use crate::inference::{InferenceError, LengthBounds, Summarizer};

/// Fixed output bounds for every summary.
pub const SUMMARY_BOUNDS: LengthBounds = LengthBounds {
    min_length: 30,
    max_length: 120,
};

/// Forwards text to the summarization backend with fixed length bounds.
#[derive(Clone)]
pub struct SummarizationService {
    backend: Arc<dyn Summarizer>,
}

impl SummarizationService {
    pub fn new(backend: Arc<dyn Summarizer>) -> Self {
        Self { backend }
    }

    /// Summarize `text`. Empty or very short input is passed through as-is;
    /// whatever the model returns for it is the result.
    pub async fn summarize(&self, text: &str) -> Result<String, InferenceError> {
        debug!(
            "Summarizing {} characters with {}",
            text.chars().count(),
            self.backend.model()
        );
        self.backend.summarize(text, SUMMARY_BOUNDS).await
    }
}
