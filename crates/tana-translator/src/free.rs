use async_trait::async_trait;

use crate::{TranslateBackend, TranslateError};

/// Free machine-translation backend (MyMemory). No API key, tight quota,
/// used when no OpenAI credential is configured.
#[derive(Clone)]
pub struct MyMemoryBackend {
    client: reqwest::Client,
    api_url: String,
    from: String,
    to: String,
}

impl MyMemoryBackend {
    pub fn new(api_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            from: "en".to_string(),
            to: "ja".to_string(),
        }
    }
}

#[async_trait]
impl TranslateBackend for MyMemoryBackend {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let langpair = format!("{}|{}", self.from, self.to);

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslateError::RateLimited);
        }

        if !response.status().is_success() {
            return Err(TranslateError::Api(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::Api(format!("Failed to parse response: {}", e))
        })?;

        // The endpoint reports quota exhaustion in-band with a 200.
        match json["responseStatus"].as_i64() {
            Some(429) => return Err(TranslateError::RateLimited),
            Some(status) if status != 200 => {
                return Err(TranslateError::Api(format!("responseStatus {}", status)));
            }
            _ => {}
        }

        let translated = json["responseData"]["translatedText"]
            .as_str()
            .ok_or_else(|| TranslateError::Api("No translation in response".to_string()))?;

        Ok(translated.to_string())
    }

    fn name(&self) -> &'static str {
        "mymemory"
    }
}
