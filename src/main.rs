use std::sync::Arc;

use anyhow::{Context, Result};
use nlp_toolkit::{
    config::Config,
    inference::HuggingFaceClient,
    languages::LanguageTable,
    qa::QaGate,
    retry::RetryConfig,
    server::{self, AppState},
    summarize::SummarizationService,
    translation::TranslationRouter,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when not present)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("nlp_toolkit=info".parse()?),
        )
        .init();

    info!("Starting NLP toolkit");

    let config = Config::from_env()?;

    let languages = LanguageTable::load(&config.language_table_path)
        .context("Failed to load language table")?;

    let client = reqwest::Client::new();
    let retry = RetryConfig::inference(config.inference_max_attempts);
    let backend = |model: &str| {
        HuggingFaceClient::new(
            client.clone(),
            &config.inference_api_url,
            config.hf_api_token.clone(),
            model,
        )
        .with_retry(retry.clone())
    };

    let state = AppState {
        summarizer: SummarizationService::new(Arc::new(backend(&config.summarization_model))),
        translator: TranslationRouter::new(
            Arc::new(languages),
            Arc::new(backend(&config.translation_model)),
        ),
        qa: QaGate::new(Arc::new(backend(&config.qa_model))),
    };
    info!("Summarization backend ready: {}", config.summarization_model);
    info!("Translation backend ready: {}", config.translation_model);
    info!("Question-answering backend ready: {}", config.qa_model);

    let app = server::router(state, config.max_upload_bytes);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
