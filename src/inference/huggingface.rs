use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{InferenceError, LengthBounds, QaResult, QuestionAnswerer, Summarizer, Translator};
use crate::retry::{with_retry_if, RetryConfig};

/// Request body accepted by the hosted inference API for every task.
#[derive(Debug, Serialize)]
struct InferenceRequest<I, P> {
    inputs: I,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<P>,
    options: InferenceOptions,
}

#[derive(Debug, Serialize)]
struct InferenceOptions {
    /// Block until a cold model is loaded instead of failing with 503
    wait_for_model: bool,
}

impl Default for InferenceOptions {
    fn default() -> Self {
        Self {
            wait_for_model: true,
        }
    }
}

#[derive(Debug, Serialize)]
struct TranslationParameters<'a> {
    src_lang: &'a str,
    tgt_lang: &'a str,
}

#[derive(Debug, Serialize)]
struct QaInputs<'a> {
    question: &'a str,
    context: &'a str,
}

#[derive(Debug, Deserialize)]
struct SummaryOutput {
    summary_text: String,
}

#[derive(Debug, Deserialize)]
struct TranslationOutput {
    translation_text: String,
}

/// HTTP adapter for a single model served by a Hugging Face-style inference API.
///
/// One instance is built per model at startup. The same type implements all
/// three capability traits; which one is used depends on the model it points at.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
    model: String,
    retry: RetryConfig,
}

impl HuggingFaceClient {
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        token: Option<String>,
        model: &str,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
            model: model.to_string(),
            retry: RetryConfig::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/{}", self.base_url, self.model)
    }

    async fn post<B, R>(&self, operation: &str, body: &B) -> Result<R, InferenceError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned + Send,
    {
        let url = self.endpoint();

        with_retry_if(
            &self.retry,
            operation,
            || async {
                let mut request = self.client.post(&url).json(body);
                if let Some(token) = &self.token {
                    request = request.bearer_auth(token);
                }

                let response = request.send().await.map_err(InferenceError::Transport)?;

                if !response.status().is_success() {
                    let status = response.status();
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
                    return Err(InferenceError::Status { status, body });
                }

                response.json::<R>().await.map_err(InferenceError::Decode)
            },
            InferenceError::is_retryable,
        )
        .await
    }
}

#[async_trait]
impl Summarizer for HuggingFaceClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String, InferenceError> {
        let request = InferenceRequest {
            inputs: text,
            parameters: Some(bounds),
            options: InferenceOptions::default(),
        };

        let outputs: Vec<SummaryOutput> = self.post("Summarization", &request).await?;

        outputs
            .into_iter()
            .next()
            .map(|output| output.summary_text)
            .ok_or(InferenceError::Empty("summaries"))
    }
}

#[async_trait]
impl Translator for HuggingFaceClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn translate(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<Vec<String>, InferenceError> {
        let request = InferenceRequest {
            inputs: text,
            parameters: Some(TranslationParameters {
                src_lang: source_code,
                tgt_lang: target_code,
            }),
            options: InferenceOptions::default(),
        };

        let outputs: Vec<TranslationOutput> = self
            .post(&format!("Translation to {}", target_code), &request)
            .await?;

        Ok(outputs
            .into_iter()
            .map(|output| output.translation_text)
            .collect())
    }
}

#[async_trait]
impl QuestionAnswerer for HuggingFaceClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn answer(&self, question: &str, context: &str) -> Result<QaResult, InferenceError> {
        let request: InferenceRequest<_, ()> = InferenceRequest {
            inputs: QaInputs { question, context },
            parameters: None,
            options: InferenceOptions::default(),
        };

        self.post("Question answering", &request).await
    }
}
