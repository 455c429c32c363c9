pub mod batch;
mod free;
mod openai;
mod provider;

pub use free::MyMemoryBackend;
pub use openai::OpenAiBackend;
pub use provider::Provider;


/// Translation backend interface
#[async_trait::async_trait]
pub trait TranslateBackend: Send + Sync {
    /// Translate one text to the target language
    async fn translate(&self, text: &str) -> Result<String, TranslateError>;

    /// Backend label for logs and reports
    fn name(&self) -> &'static str;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Authentication error")]
    Auth,
}

impl TranslateError {
    /// Whether this error class is worth retrying with backoff. Everything
    /// else fails the attempt immediately.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            TranslateError::RateLimited => true,
            TranslateError::Network(err) => {
                err.status() == Some(reqwest::StatusCode::TOO_MANY_REQUESTS)
            }
            _ => false,
        }
    }
}
