use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Inference backend
    pub inference_api_url: String,
    pub hf_api_token: Option<String>,
    pub inference_max_attempts: u32,

    // Models
    pub summarization_model: String,
    pub translation_model: String,
    pub qa_model: String,

    // Language table
    pub language_table_path: String,

    // Server
    pub port: u16,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{}'", value))?,
            Err(_) => 7860,
        };

        Ok(Self {
            // Inference backend
            inference_api_url: std::env::var("INFERENCE_API_URL")
                .unwrap_or_else(|_| "https://api-inference.huggingface.co/models".to_string()),
            hf_api_token: std::env::var("HF_API_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
            inference_max_attempts: std::env::var("INFERENCE_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(3)
                .max(1),

            // Models
            summarization_model: std::env::var("SUMMARIZATION_MODEL")
                .unwrap_or_else(|_| "t5-base".to_string()),
            translation_model: std::env::var("TRANSLATION_MODEL")
                .unwrap_or_else(|_| "facebook/nllb-200-distilled-600M".to_string()),
            qa_model: std::env::var("QA_MODEL")
                .unwrap_or_else(|_| "distilbert-base-uncased-distilled-squad".to_string()),

            // Language table
            language_table_path: std::env::var("LANGUAGE_TABLE_PATH")
                .unwrap_or_else(|_| "data/languages.json".to_string()),

            // Server
            port,
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(10 * 1024 * 1024),
        })
    }
}
