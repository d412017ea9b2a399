//! Integration tests for the NLP toolkit
//!
//! These tests run the full HTTP application on an ephemeral port and drive it
//! with a real HTTP client. Inference backends are either in-process fakes or
//! the Hugging Face adapter pointed at a wiremock server.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use nlp_toolkit::{
    inference::{
        HuggingFaceClient, InferenceError, LengthBounds, QaResult, QuestionAnswerer, Summarizer,
        Translator,
    },
    languages::LanguageTable,
    qa::{QaGate, NOT_CONFIDENT_MESSAGE},
    retry::RetryConfig,
    server::{self, AppState, LanguagesResponse, OutputResponse},
    summarize::SummarizationService,
    translation::TranslationRouter,
};

// ==================== Test Helpers ====================

struct FakeSummarizer;

#[async_trait]
impl Summarizer for FakeSummarizer {
    fn model(&self) -> &str {
        "fake-summarizer"
    }

    async fn summarize(&self, text: &str, bounds: LengthBounds) -> Result<String, InferenceError> {
        Ok(format!(
            "[{}-{}] {}",
            bounds.min_length,
            bounds.max_length,
            text.split_whitespace().take(3).collect::<Vec<_>>().join(" ")
        ))
    }
}

#[derive(Default)]
struct FakeTranslator {
    targets: Mutex<Vec<String>>,
}

#[async_trait]
impl Translator for FakeTranslator {
    fn model(&self) -> &str {
        "fake-translator"
    }

    async fn translate(
        &self,
        text: &str,
        source_code: &str,
        target_code: &str,
    ) -> Result<Vec<String>, InferenceError> {
        self.targets.lock().unwrap().push(target_code.to_string());
        Ok(vec![format!("{}>{}: {}", source_code, target_code, text)])
    }
}

/// Answers with the first word of the context; the score is read from the
/// question so tests can pick it ("score=0.1 ...").
#[derive(Default)]
struct FakeAnswerer {
    contexts: Mutex<Vec<String>>,
}

#[async_trait]
impl QuestionAnswerer for FakeAnswerer {
    fn model(&self) -> &str {
        "fake-qa"
    }

    async fn answer(&self, question: &str, context: &str) -> Result<QaResult, InferenceError> {
        self.contexts.lock().unwrap().push(context.to_string());
        let score = question
            .strip_prefix("score=")
            .and_then(|rest| rest.split_whitespace().next())
            .and_then(|value| value.parse().ok())
            .unwrap_or(0.9);
        Ok(QaResult {
            answer: context.split_whitespace().next().unwrap_or("").to_string(),
            score,
            start: None,
            end: None,
        })
    }
}

struct TestApp {
    base_url: String,
    client: reqwest::Client,
    translator: Arc<FakeTranslator>,
    answerer: Arc<FakeAnswerer>,
}

fn language_table() -> Arc<LanguageTable> {
    Arc::new(
        LanguageTable::from_json(
            r#"[
                {"Language": "Hindi", "FLORES-200 code": "hin_Deva"},
                {"Language": "French", "FLORES-200 code": "fra_Latn"},
                {"Language": "Tamil", "FLORES-200 code": "tam_Taml"}
            ]"#,
        )
        .expect("Test table should parse"),
    )
}

async fn serve(state: AppState) -> String {
    let app = server::router(state, 1024 * 1024);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Should bind ephemeral port");
    let addr = listener.local_addr().expect("Should have local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server should run");
    });
    format!("http://{}", addr)
}

async fn spawn_fake_app() -> TestApp {
    let translator = Arc::new(FakeTranslator::default());
    let answerer = Arc::new(FakeAnswerer::default());

    let state = AppState {
        summarizer: SummarizationService::new(Arc::new(FakeSummarizer)),
        translator: TranslationRouter::new(language_table(), translator.clone()),
        qa: QaGate::new(answerer.clone()),
    };

    TestApp {
        base_url: serve(state).await,
        client: reqwest::Client::new(),
        translator,
        answerer,
    }
}

fn upload_form(contents: &[u8], question: &str) -> reqwest::multipart::Form {
    reqwest::multipart::Form::new()
        .part(
            "file",
            reqwest::multipart::Part::bytes(contents.to_vec()).file_name("notes.txt"),
        )
        .text("question", question.to_string())
}

// ==================== Page Tests ====================

#[tokio::test]
async fn test_health_check() {
    let app = spawn_fake_app().await;

    let response = app
        .client
        .get(format!("{}/health", app.base_url))
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(response.status(), 200);
    assert_eq!(response.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_index_page_lists_languages() {
    let app = spawn_fake_app().await;

    let response = app.client.get(&app.base_url).send().await.unwrap();
    assert_eq!(response.status(), 200);

    let page = response.text().await.unwrap();
    assert!(page.contains(r#"<option value="Hindi">Hindi</option>"#));
    assert!(page.contains(r#"<option value="Tamil">Tamil</option>"#));
}

#[tokio::test]
async fn test_languages_endpoint_preserves_order() {
    let app = spawn_fake_app().await;

    let body: LanguagesResponse = app
        .client
        .get(format!("{}/api/languages", app.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body.languages, vec!["Hindi", "French", "Tamil"]);
}

// ==================== Summarize Tests ====================

#[tokio::test]
async fn test_summarize_endpoint() {
    let app = spawn_fake_app().await;

    let body: OutputResponse = app
        .client
        .post(format!("{}/api/summarize", app.base_url))
        .json(&serde_json::json!({"text": "one two three four five"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body.output, "[30-120] one two three");
}

#[tokio::test]
async fn test_summarize_rejects_missing_text() {
    let app = spawn_fake_app().await;

    let response = app
        .client
        .post(format!("{}/api/summarize", app.base_url))
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// ==================== Translate Tests ====================

#[tokio::test]
async fn test_translate_endpoint_routes_by_name() {
    let app = spawn_fake_app().await;

    let body: OutputResponse = app
        .client
        .post(format!("{}/api/translate", app.base_url))
        .json(&serde_json::json!({"text": "Hello", "language": "FRENCH"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body.output, "eng_Latn>fra_Latn: Hello");
    assert_eq!(*app.translator.targets.lock().unwrap(), vec!["fra_Latn"]);
}

#[tokio::test]
async fn test_translate_unknown_language_is_soft_error() {
    let app = spawn_fake_app().await;

    let response = app
        .client
        .post(format!("{}/api/translate", app.base_url))
        .json(&serde_json::json!({"text": "Hello", "language": "German"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: OutputResponse = response.json().await.unwrap();
    assert_eq!(
        body.output,
        "Error: FLORES-200 code not found for 'German'. Please select a language from the list."
    );
    assert!(app.translator.targets.lock().unwrap().is_empty());
}

// ==================== Document Q&A Tests ====================

#[tokio::test]
async fn test_answer_endpoint_confident() {
    let app = spawn_fake_app().await;

    let body: OutputResponse = app
        .client
        .post(format!("{}/api/answer", app.base_url))
        .multipart(upload_form(b"Paris is the capital.", "score=0.2 What is the capital?"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body.output, "Paris");
}

#[tokio::test]
async fn test_answer_endpoint_low_confidence() {
    let app = spawn_fake_app().await;

    let body: OutputResponse = app
        .client
        .post(format!("{}/api/answer", app.base_url))
        .multipart(upload_form(b"Paris is the capital.", "score=0.19 What?"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body.output, NOT_CONFIDENT_MESSAGE);
}

#[tokio::test]
async fn test_answer_endpoint_decodes_latin1_upload() {
    let app = spawn_fake_app().await;

    let body: OutputResponse = app
        .client
        .post(format!("{}/api/answer", app.base_url))
        .multipart(upload_form(b"Caf\xE9 au lait", "What?"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body.output, "Café");
    assert_eq!(app.answerer.contexts.lock().unwrap()[0], "Café au lait");
}

#[tokio::test]
async fn test_answer_endpoint_without_file() {
    let app = spawn_fake_app().await;

    let form = reqwest::multipart::Form::new().text("question", "Anything?");
    let response = app
        .client
        .post(format!("{}/api/answer", app.base_url))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: OutputResponse = response.json().await.unwrap();
    assert!(body.output.starts_with("An error occurred"));
    assert!(app.answerer.contexts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_answer_endpoint_empty_upload() {
    let app = spawn_fake_app().await;

    let response = app
        .client
        .post(format!("{}/api/answer", app.base_url))
        .multipart(upload_form(b"", "What?"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: OutputResponse = response.json().await.unwrap();
    assert_eq!(body.output, "An error occurred: the uploaded file is empty");
    assert!(app.answerer.contexts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_answer_endpoint_empty_unnamed_part_is_missing_file() {
    let app = spawn_fake_app().await;

    let form = reqwest::multipart::Form::new()
        .part("file", reqwest::multipart::Part::bytes(Vec::new()))
        .text("question", "What?");
    let body: OutputResponse = app
        .client
        .post(format!("{}/api/answer", app.base_url))
        .multipart(form)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body.output, "An error occurred: no file was uploaded");
    assert!(app.answerer.contexts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_answer_endpoint_accepts_document_as_plain_field() {
    let app = spawn_fake_app().await;

    let form = reqwest::multipart::Form::new()
        .text("file", "The tower is in Paris.")
        .text("question", "Where is the tower?");
    let body: OutputResponse = app
        .client
        .post(format!("{}/api/answer", app.base_url))
        .multipart(form)
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body.output, "The");
    assert_eq!(
        *app.answerer.contexts.lock().unwrap(),
        vec!["The tower is in Paris."]
    );
}

// ==================== Backend Adapter Tests ====================

#[tokio::test]
async fn test_full_stack_against_inference_api() {
    let mock_server = MockServer::start().await;
    let base = format!("{}/models", mock_server.uri());

    Mock::given(method("POST"))
        .and(path("/models/facebook/nllb-200-distilled-600M"))
        .and(body_partial_json(serde_json::json!({
            "parameters": {"src_lang": "eng_Latn", "tgt_lang": "hin_Deva"}
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([{"translation_text": "नमस्ते"}])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/models/t5-base"))
        .respond_with(ResponseTemplate::new(500).set_body_string("model crashed"))
        .mount(&mock_server)
        .await;

    let retry = RetryConfig::new(2, Duration::from_millis(5));
    let backend = |model: &str| {
        HuggingFaceClient::new(reqwest::Client::new(), &base, None, model).with_retry(retry.clone())
    };

    let state = AppState {
        summarizer: SummarizationService::new(Arc::new(backend("t5-base"))),
        translator: TranslationRouter::new(
            language_table(),
            Arc::new(backend("facebook/nllb-200-distilled-600M")),
        ),
        qa: QaGate::new(Arc::new(backend("distilbert-base-uncased-distilled-squad"))),
    };
    let base_url = serve(state).await;
    let client = reqwest::Client::new();

    let body: OutputResponse = client
        .post(format!("{}/api/translate", base_url))
        .json(&serde_json::json!({"text": "Hello", "language": "hindi"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body.output, "नमस्ते");

    let response = client
        .post(format!("{}/api/summarize", base_url))
        .json(&serde_json::json!({"text": "Some text"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 502);
    let error: serde_json::Value = response.json().await.unwrap();
    assert!(error["error"].as_str().unwrap().contains("model crashed"));
}
