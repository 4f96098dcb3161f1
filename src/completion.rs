//! Text and vision completion entry points.

use crate::ai::{ClientFactory, GenerativeModelClient, Part};
use crate::config::Config;
use crate::files::{files_to_parts, FileInput};
use crate::Result;

/// Ask `model` to complete `prompt` and return the generated text.
pub async fn complete_text_with(model: &dyn GenerativeModelClient, prompt: &str) -> Result<String> {
    let response = model.generate_from_text(prompt).await?;
    Ok(response.text()?)
}

/// Ask `model` to complete `prompt` grounded in `files`.
///
/// All files are read before anything is sent; a single unreadable file
/// aborts the call without contacting the model.
pub async fn complete_with_files_with(
    model: &dyn GenerativeModelClient,
    prompt: &str,
    files: &[FileInput],
) -> Result<String> {
    let file_parts = files_to_parts(files).await?;

    let mut parts = Vec::with_capacity(file_parts.len() + 1);
    parts.push(Part::text(prompt));
    parts.extend(file_parts);

    tracing::debug!(
        "Requesting completion from {} with {} file(s)",
        model.model_id(),
        files.len()
    );

    let response = model.generate_from_parts(parts).await?;
    Ok(response.text()?)
}

/// Text and vision completions against the configured Gemini models.
///
/// A fresh model handle is created for every call.
pub struct GenAi {
    factory: ClientFactory,
    text_model: String,
    vision_model: String,
}

impl GenAi {
    pub fn new(config: &Config) -> Self {
        Self {
            factory: ClientFactory::from_config(config),
            text_model: config.text_model.clone(),
            vision_model: config.vision_model.clone(),
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(&Config::from_env()?))
    }

    pub fn with_factory(factory: ClientFactory, text_model: &str, vision_model: &str) -> Self {
        Self {
            factory,
            text_model: text_model.to_string(),
            vision_model: vision_model.to_string(),
        }
    }

    pub async fn complete_text(&self, prompt: &str) -> Result<String> {
        let model = self.factory.create_model(&self.text_model)?;
        complete_text_with(&model, prompt).await
    }

    pub async fn complete_with_files(&self, prompt: &str, files: &[FileInput]) -> Result<String> {
        let model = self.factory.create_model(&self.vision_model)?;
        complete_with_files_with(&model, prompt, files).await
    }
}
