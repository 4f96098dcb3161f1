//! Generative model integration
//!
//! [`GenerativeModelClient`] is the seam between completion logic and the
//! remote service: [`gemini::GeminiModel`] talks to the Gemini REST API and
//! [`MockGenerativeModel`] records requests for tests.

pub mod gemini;
pub mod mime;
pub mod mock;

pub use gemini::{ClientFactory, GeminiModel, GenerateContentResponse, InlineData, Part};
pub use mock::MockGenerativeModel;

use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait GenerativeModelClient: Send + Sync {
    /// Bare model identifier this handle targets.
    fn model_id(&self) -> &str;

    /// One request whose only part is `prompt`.
    async fn generate_from_text(&self, prompt: &str) -> Result<GenerateContentResponse>;

    /// One request carrying `parts` in the given order.
    async fn generate_from_parts(&self, parts: Vec<Part>) -> Result<GenerateContentResponse>;
}
