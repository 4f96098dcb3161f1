pub mod client;
pub mod factory;
pub mod types;

pub use client::GeminiModel;
pub use factory::ClientFactory;
pub use types::{Candidate, Content, GenerateContentResponse, InlineData, Part, PromptFeedback};
