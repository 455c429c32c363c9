use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::{TranslateBackend, TranslateError};

const BACKOFF_BASE: Duration = Duration::from_secs(1);

/// Outcome of the bounded retry loop.
enum Attempted {
    Translated(String),
    GaveUp(TranslateError),
}

/// Fail-soft translation front. Owns the process-lifetime cache; every error
/// is absorbed here and degrades to the untranslated input.
pub struct Provider {
    backend: Option<Arc<dyn TranslateBackend>>,
    cache: Mutex<HashMap<String, String>>,
    retries: u32,
}

impl Provider {
    pub fn new(backend: Option<Arc<dyn TranslateBackend>>, retries: u32) -> Self {
        Self {
            backend,
            cache: Mutex::new(HashMap::new()),
            retries,
        }
    }

    /// Pass-through provider for runs with no backend configured.
    pub fn disabled() -> Self {
        Self::new(None, 0)
    }

    pub fn is_enabled(&self) -> bool {
        self.backend.is_some()
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.as_ref().map_or("none", |b| b.name())
    }

    /// Unique texts translated so far.
    pub fn cache_size(&self) -> usize {
        self.cache.lock().unwrap().len()
    }

    /// Translate one text. Never fails: empty input, a missing backend, and
    /// exhausted retries all return the input unchanged.
    pub async fn translate(&self, text: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        let Some(backend) = &self.backend else {
            return text.to_string();
        };

        let cache_key = text.to_lowercase();
        let cached = self.cache.lock().unwrap().get(&cache_key).cloned();
        if let Some(hit) = cached {
            return hit;
        }

        match self.attempt(backend.as_ref(), text).await {
            Attempted::Translated(translated) => {
                self.cache
                    .lock()
                    .unwrap()
                    .insert(cache_key, translated.clone());
                translated
            }
            Attempted::GaveUp(err) => {
                tracing::warn!("translation failed, keeping original text: {err}");
                text.to_string()
            }
        }
    }

    /// Explicit retry loop: rate-limit errors back off exponentially within
    /// the attempt budget, anything else gives up immediately.
    async fn attempt(&self, backend: &dyn TranslateBackend, text: &str) -> Attempted {
        let mut attempt: u32 = 0;

        loop {
            match backend.translate(text).await {
                Ok(translated) => return Attempted::Translated(translated),
                Err(err) if err.is_rate_limited() && attempt + 1 < self.retries => {
                    let delay = BACKOFF_BASE * 2u32.pow(attempt);
                    tracing::warn!(
                        "rate limited, retrying in {:?} (attempt {}/{})",
                        delay,
                        attempt + 1,
                        self.retries
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Attempted::GaveUp(err),
            }
        }
    }
}
