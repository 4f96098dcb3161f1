use super::client::GeminiModel;
use crate::config::{Config, DEFAULT_BASE_URL};
use crate::{Error, Result};
use reqwest::Client;
use std::time::Duration;

/// Builds [`GeminiModel`] handles from an explicitly supplied API key.
///
/// One HTTP connection pool is shared by every handle the factory creates.
#[derive(Clone)]
pub struct ClientFactory {
    client: Client,
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl ClientFactory {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::new_with_client(api_key, Client::new())
    }

    pub fn new_with_client(api_key: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.clone(),
            timeout: config.timeout,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create a handle for `model_id`. No network call is made.
    pub fn create_model(&self, model_id: &str) -> Result<GeminiModel> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Configuration("API key is missing or empty".to_string()));
        }
        if model_id.trim().is_empty() {
            return Err(Error::Configuration(
                "Model identifier is empty".to_string(),
            ));
        }

        let model = GeminiModel::new(
            self.client.clone(),
            self.api_key.clone(),
            model_id,
            &self.base_url,
            self.timeout,
        );
        tracing::debug!("Created generative model handle: {}", model_id);

        Ok(model)
    }
}
