use async_trait::async_trait;
use serde_json::json;

use crate::{TranslateBackend, TranslateError};

const SYSTEM_PROMPT: &str = "あなたは優秀な翻訳者です。英語のテキストを自然な日本語に翻訳してください。\
技術用語は適切に翻訳し、固有名詞はそのまま残してください。";

/// Chat-completion backend. One request per text, fixed target language.
#[derive(Clone)]
pub struct OpenAiBackend {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl OpenAiBackend {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            model,
        }
    }
}

#[async_trait]
impl TranslateBackend for OpenAiBackend {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::Auth);
        }

        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                {
                    "role": "user",
                    "content": format!(
                        "次の英語テキストを日本語に翻訳してください。翻訳結果のみを返してください：\n\n{text}"
                    ),
                },
            ],
            "temperature": 0.3,
            "max_tokens": 1000,
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TranslateError::RateLimited);
        }

        if response.status() == reqwest::StatusCode::UNAUTHORIZED
            || response.status() == reqwest::StatusCode::FORBIDDEN
        {
            return Err(TranslateError::Auth);
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

        let content = json["choices"]
            .get(0)
            .and_then(|c| c["message"]["content"].as_str())
            .ok_or_else(|| TranslateError::Api("No completion in response".to_string()))?;

        Ok(content.trim().to_string())
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
