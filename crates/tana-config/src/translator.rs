use std::env;

use serde::{Deserialize, Serialize};

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_free_api_url() -> String {
    "https://api.mymemory.translated.net/get".to_string()
}

fn default_concurrency() -> usize {
    10
}

fn default_retries() -> u32 {
    4
}

fn default_chunk_pause_ms() -> u64 {
    200
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// OpenAI API key; empty disables the paid backend.
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Use the free machine-translation backend instead of OpenAI.
    #[serde(default)]
    pub use_free_backend: bool,
    #[serde(default = "default_free_api_url")]
    pub free_api_url: String,
    /// Translations in flight per chunk.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// Attempts per text before falling back to the original.
    #[serde(default = "default_retries")]
    pub retries: u32,
    /// Pause between chunks.
    #[serde(default = "default_chunk_pause_ms")]
    pub chunk_pause_ms: u64,
}

impl TranslatorConfig {
    pub fn new() -> Self {
        let api_key = env::var("OPENAI_API_KEY").unwrap_or_default();
        let model = env::var("OPENAI_MODEL").unwrap_or_else(|_| default_model());

        let use_free_backend = env::var("TANA_FREE_TRANSLATOR")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let concurrency = env::var("TANA_TRANSLATE_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_concurrency);

        let retries = env::var("TANA_TRANSLATE_RETRIES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_retries);

        TranslatorConfig {
            api_key,
            model,
            api_url: default_api_url(),
            use_free_backend,
            free_api_url: default_free_api_url(),
            concurrency,
            retries,
            chunk_pause_ms: default_chunk_pause_ms(),
        }
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            api_url: default_api_url(),
            use_free_backend: false,
            free_api_url: default_free_api_url(),
            concurrency: default_concurrency(),
            retries: default_retries(),
            chunk_pause_ms: default_chunk_pause_ms(),
        }
    }
}
