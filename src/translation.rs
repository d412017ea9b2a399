use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::inference::{InferenceError, Translator};
use crate::languages::{LanguageTable, SOURCE_LANGUAGE_CODE};

#[derive(Debug, Error)]
pub enum TranslationError {
    /// The requested language is not in the table. Shown to the user as-is.
    #[error("Error: FLORES-200 code not found for '{0}'. Please select a language from the list.")]
    UnknownLanguage(String),

    #[error(transparent)]
    Backend(#[from] InferenceError),
}

/// Routes English text to the translation backend by destination language name.
#[derive(Clone)]
pub struct TranslationRouter {
    languages: Arc<LanguageTable>,
    backend: Arc<dyn Translator>,
}

impl TranslationRouter {
    pub fn new(languages: Arc<LanguageTable>, backend: Arc<dyn Translator>) -> Self {
        Self { languages, backend }
    }

    pub fn languages(&self) -> &LanguageTable {
        &self.languages
    }

    /// Translate English `text` into the language called `destination`.
    ///
    /// # Returns
    /// * The first candidate produced by the backend
    /// * `TranslationError::UnknownLanguage` if `destination` is not in the table
    /// * `TranslationError::Backend` if the backend call fails or yields nothing
    pub async fn translate(&self, text: &str, destination: &str) -> Result<String, TranslationError> {
        let target_code = self
            .languages
            .resolve_code(destination)
            .ok_or_else(|| TranslationError::UnknownLanguage(destination.to_string()))?;

        info!(
            "Translating from English ({}) to {} ({}) with {}",
            SOURCE_LANGUAGE_CODE,
            destination,
            target_code,
            self.backend.model()
        );

        let candidates = self
            .backend
            .translate(text, SOURCE_LANGUAGE_CODE, target_code)
            .await?;

        candidates
            .into_iter()
            .next()
            .ok_or(TranslationError::Backend(InferenceError::Empty("translations")))
    }
}
