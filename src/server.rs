use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use crate::document::{decode_text, DocumentError};
use crate::inference::InferenceError;
use crate::qa::QaGate;
use crate::summarize::SummarizationService;
use crate::translation::{TranslationError, TranslationRouter};
use crate::ui;

/// Services shared by every request. Built once at startup, read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: SummarizationService,
    pub translator: TranslationRouter,
    pub qa: QaGate,
}

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub language: String,
}

/// Text shown in the result box of a tab. Soft errors use this too.
#[derive(Debug, Serialize, Deserialize)]
pub struct OutputResponse {
    pub output: String,
}

impl OutputResponse {
    fn new(output: impl Into<String>) -> Json<Self> {
        Json(Self {
            output: output.into(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub languages: Vec<String>,
}

/// Failures that are not part of the normal output text.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Backend(InferenceError),
}

impl From<InferenceError> for ApiError {
    fn from(error: InferenceError) -> Self {
        ApiError::Backend(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => {
                warn!("Rejected request: {}", message);
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::Backend(e) => {
                error!("Inference backend failed: {}", e);
                (StatusCode::BAD_GATEWAY, e.to_string())
            }
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/languages", get(list_languages))
        .route("/api/summarize", post(summarize))
        .route("/api/translate", post(translate))
        .route("/api/answer", post(answer))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(ui::render_page(&state.translator.languages().names()))
}

async fn health_check() -> &'static str {
    "OK"
}

async fn list_languages(State(state): State<AppState>) -> Json<LanguagesResponse> {
    let languages = state
        .translator
        .languages()
        .names()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(LanguagesResponse { languages })
}

async fn summarize(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<OutputResponse>, ApiError> {
    let summary = state.summarizer.summarize(&req.text).await?;
    Ok(OutputResponse::new(summary))
}

async fn translate(
    State(state): State<AppState>,
    Json(req): Json<TranslateRequest>,
) -> Result<Json<OutputResponse>, ApiError> {
    match state.translator.translate(&req.text, &req.language).await {
        Ok(translated) => Ok(OutputResponse::new(translated)),
        Err(e @ TranslationError::UnknownLanguage(_)) => {
            info!("No FLORES-200 code for '{}'", req.language);
            Ok(OutputResponse::new(e.to_string()))
        }
        Err(TranslationError::Backend(e)) => Err(ApiError::Backend(e)),
    }
}

/// Multipart form: a `file` part holding the document and a `question` part.
async fn answer(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<OutputResponse>, ApiError> {
    let mut document: Option<Result<String, DocumentError>> = None;
    let mut question = String::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => {
                let named = field.file_name().is_some_and(|name| !name.is_empty());
                let upload = match field.bytes().await {
                    Ok(bytes) if !bytes.is_empty() => Ok(decode_text(&bytes)),
                    // Browsers send an empty, unnamed part when no file was picked
                    Ok(_) if !named => continue,
                    Ok(_) => Err(DocumentError::empty()),
                    Err(e) => Err(DocumentError(std::io::Error::other(e.to_string()))),
                };
                document = Some(upload);
            }
            Some("question") => {
                question = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Invalid question field: {}", e)))?;
            }
            _ => {}
        }
    }

    let context = match document.unwrap_or_else(|| Err(DocumentError::missing())) {
        Ok(context) => context,
        Err(e) => {
            warn!("Could not read uploaded document: {}", e);
            return Ok(OutputResponse::new(e.to_string()));
        }
    };

    info!(
        "Answering question over a {}-character document",
        context.chars().count()
    );
    let answer = state.qa.answer(&context, &question).await?;
    Ok(OutputResponse::new(answer))
}
