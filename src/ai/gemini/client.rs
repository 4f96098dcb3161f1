use super::types::{GenerateContentRequest, GenerateContentResponse, Part};
use crate::ai::GenerativeModelClient;
use crate::error::RemoteError;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Handle to one remote Gemini model, used for a single call.
pub struct GeminiModel {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl GeminiModel {
    /// `model` may carry a `models/` prefix; it is stripped since the URL adds it.
    pub(crate) fn new(
        client: Client,
        api_key: String,
        model: &str,
        base_url: &str,
        timeout: Option<Duration>,
    ) -> Self {
        let model = model.strip_prefix("models/").unwrap_or(model).to_string();

        Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    async fn generate_content(&self, parts: Vec<Part>) -> Result<GenerateContentResponse> {
        tracing::debug!(
            "Sending generateContent request to {} with {} part(s)",
            self.model,
            parts.len()
        );

        let request = GenerateContentRequest::user(parts);

        let mut builder = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!("Failed to send request to Gemini: {}", e);
            e
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await?;
            tracing::error!("Gemini API error (status {}): {}", status, error_text);
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body: error_text,
            }
            .into());
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}\nBody: {}", e, body);
            Error::RemoteGeneration(RemoteError::Parse(e))
        })
    }
}

#[async_trait]
impl GenerativeModelClient for GeminiModel {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn generate_from_text(&self, prompt: &str) -> Result<GenerateContentResponse> {
        self.generate_content(vec![Part::text(prompt)]).await
    }

    async fn generate_from_parts(&self, parts: Vec<Part>) -> Result<GenerateContentResponse> {
        self.generate_content(parts).await
    }
}
