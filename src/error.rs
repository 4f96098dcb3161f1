//! Error handling and custom error types
//!
//! Every failure surfaces to the caller unchanged; nothing here retries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Failed to read file '{name}': {source}")]
    FileRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Remote generation error: {0}")]
    RemoteGeneration(#[from] RemoteError),
}

/// Underlying cause of a failed `generateContent` call.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response blocked: {0}")]
    Blocked(String),

    #[error("No text in response")]
    NoText,
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::RemoteGeneration(RemoteError::Http(e))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_keeps_cause_in_message() {
        let err: Error = RemoteError::Status {
            status: 429,
            body: "quota exceeded".to_string(),
        }
        .into();

        assert_eq!(
            err.to_string(),
            "Remote generation error: API error (status 429): quota exceeded"
        );
    }

    #[test]
    fn test_file_read_exposes_io_source() {
        use std::error::Error as _;

        let err = Error::FileRead {
            name: "cat.png".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };

        assert!(err.to_string().contains("cat.png"));
        assert!(err.source().is_some());
    }
}
