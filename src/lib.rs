//! Thin helpers for Gemini text and vision completions
//!
//! Create a model handle from an explicit API key, send a prompt (optionally
//! with file attachments as base64 inline data) and get the generated text
//! back.

pub mod ai;
pub mod completion;
pub mod config;
pub mod error;
pub mod files;

pub use completion::{complete_text_with, complete_with_files_with, GenAi};
pub use config::Config;
pub use error::{Error, RemoteError, Result};
pub use files::FileInput;
