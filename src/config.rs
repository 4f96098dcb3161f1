//! Configuration for the Gemini-backed completion helpers.

use crate::{Error, Result};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-pro";
pub const DEFAULT_VISION_MODEL: &str = "gemini-pro-vision";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub text_model: String,
    pub vision_model: String,
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl Config {
    /// Build a config with default models and endpoint around an explicit key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
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

    /// Load configuration from the process environment (and `.env` if present).
    ///
    /// The key is taken from `GOOGLE_AI_STUDIO_API_KEY`, then `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GOOGLE_AI_STUDIO_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .or_else(|| lookup("GEMINI_API_KEY"))
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| {
                Error::Configuration(
                    "GOOGLE_AI_STUDIO_API_KEY (or GEMINI_API_KEY) not set".to_string(),
                )
            })?;

        let timeout = match lookup("GENAI_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    Error::Configuration(format!("GENAI_TIMEOUT_SECS is not a number: {}", raw))
                })?;
                if secs == 0 {
                    return Err(Error::Configuration(
                        "GENAI_TIMEOUT_SECS must be greater than zero".to_string(),
                    ));
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_key,
            text_model: lookup("GENAI_TEXT_MODEL")
                .unwrap_or_else(|| DEFAULT_TEXT_MODEL.to_string()),
            vision_model: lookup("GENAI_VISION_MODEL")
                .unwrap_or_else(|| DEFAULT_VISION_MODEL.to_string()),
            base_url: lookup("GENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout,
        })
    }
}
