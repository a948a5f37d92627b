use std::time::Duration;

use async_trait::async_trait;
use cite_lookup::{LookupError, ProviderMetadata, TextModel};
use reqwest::StatusCode;

use crate::wire::{ErrorEnvelope, GenerateRequest, GenerateResponse};

#[derive(Clone)]
pub struct GeminiModel {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl GeminiModel {
    pub fn new(
        api_key: String,
        api_url: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            api_url,
            model,
        })
    }

    /// `{api_url}/models/{model}:generateContent`
    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl TextModel for GeminiModel {
    async fn generate(&self, prompt: &str) -> Result<String, LookupError> {
        if self.api_key.is_empty() {
            return Err(LookupError::Authentication);
        }

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateRequest::grounded(prompt))
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            tracing::warn!("Gemini rate limit hit (HTTP {})", status);
            return Err(LookupError::RateLimitExceeded);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            tracing::warn!("Gemini rejected the API key (HTTP {})", status);
            return Err(LookupError::Authentication);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or_default();
            tracing::warn!("Gemini request failed: HTTP {} {}", status, detail);

            return Err(LookupError::Api(if detail.is_empty() {
                format!("HTTP {}", status)
            } else {
                format!("HTTP {}: {}", status, detail)
            }));
        }

        let body: GenerateResponse = response.json().await.map_err(|e| {
            LookupError::Api(format!("Failed to parse response: {}", e))
        })?;

        match body.text() {
            Some(text) => Ok(text),
            None => {
                tracing::debug!(
                    "Gemini returned no text (finish reason: {})",
                    body.finish_reason().unwrap_or("none")
                );
                Err(LookupError::EmptyResponse)
            }
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
            model: self.model.clone(),
            search_grounding: true,
        }
    }
}
