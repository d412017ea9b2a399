use std::sync::Arc;

use tracing::{debug, info};

use crate::inference::{InferenceError, QuestionAnswerer};

/// Answers scoring below this are withheld. Exactly 0.2 still passes.
pub const CONFIDENCE_THRESHOLD: f64 = 0.2;

/// Returned instead of a low-confidence answer.
pub const NOT_CONFIDENT_MESSAGE: &str =
    "I am not confident I can answer this question based on the provided text.";

/// Question answering over a document, suppressing low-confidence answers.
#[derive(Clone)]
pub struct QaGate {
    backend: Arc<dyn QuestionAnswerer>,
}

impl QaGate {
    pub fn new(backend: Arc<dyn QuestionAnswerer>) -> Self {
        Self { backend }
    }

    /// Ask `question` about `context`.
    ///
    /// # Returns
    /// * The extracted answer when the model's score is at least `CONFIDENCE_THRESHOLD`
    /// * `NOT_CONFIDENT_MESSAGE` otherwise
    pub async fn answer(&self, context: &str, question: &str) -> Result<String, InferenceError> {
        let result = self.backend.answer(question, context).await?;
        debug!(
            "{} answered '{}' with score {:.3}",
            self.backend.model(),
            result.answer,
            result.score
        );

        if result.score < CONFIDENCE_THRESHOLD {
            info!(
                "Withholding answer with score {:.3} (threshold {})",
                result.score, CONFIDENCE_THRESHOLD
            );
            return Ok(NOT_CONFIDENT_MESSAGE.to_string());
        }

        Ok(result.answer)
    }
}
