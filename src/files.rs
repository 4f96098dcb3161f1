//! File inputs and their conversion to inline-data request parts.

use crate::ai::{mime, Part};
use crate::{Error, Result};
use base64::Engine as _;
use std::path::PathBuf;

/// A file attached to a vision completion: a byte payload plus a media type.
#[derive(Debug, Clone)]
pub enum FileInput {
    Bytes {
        name: String,
        data: Vec<u8>,
        mime_type: String,
    },
    /// Read lazily at conversion time. Without a declared media type it is
    /// sniffed from the file's leading bytes.
    Path {
        path: PathBuf,
        mime_type: Option<String>,
    },
}

impl FileInput {
    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        FileInput::Bytes {
            name: name.into(),
            data,
            mime_type: mime_type.into(),
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        FileInput::Path {
            path: path.into(),
            mime_type: None,
        }
    }

    /// Declare the media type instead of sniffing it.
    pub fn with_mime_type(self, mime_type: impl Into<String>) -> Self {
        match self {
            FileInput::Bytes { name, data, .. } => FileInput::Bytes {
                name,
                data,
                mime_type: mime_type.into(),
            },
            FileInput::Path { path, .. } => FileInput::Path {
                path,
                mime_type: Some(mime_type.into()),
            },
        }
    }

    pub fn name(&self) -> String {
        match self {
            FileInput::Bytes { name, .. } => name.clone(),
            FileInput::Path { path, .. } => path.display().to_string(),
        }
    }

    async fn read(&self) -> Result<(Vec<u8>, String)> {
        match self {
            FileInput::Bytes {
                data, mime_type, ..
            } => Ok((data.clone(), mime_type.clone())),
            FileInput::Path { path, mime_type } => {
                let data = tokio::fs::read(path).await.map_err(|source| {
                    tracing::error!("Failed to read {}: {}", path.display(), source);
                    Error::FileRead {
                        name: path.display().to_string(),
                        source,
                    }
                })?;
                let mime_type = mime_type
                    .clone()
                    .unwrap_or_else(|| mime::detect_mime(&data).to_string());
                Ok((data, mime_type))
            }
        }
    }
}

/// Read `file` completely and package it as a base64 inline-data part.
pub async fn file_to_part(file: &FileInput) -> Result<Part> {
    let (data, mime_type) = file.read().await?;

    tracing::debug!(
        "Converted {} ({} bytes, {}) to inline data",
        file.name(),
        data.len(),
        mime_type
    );

    let encoded = base64::engine::general_purpose::STANDARD.encode(&data);
    Ok(Part::inline_data(mime_type, encoded))
}

/// Convert every file concurrently, preserving input order.
///
/// Fails as a whole if any single file cannot be read.
pub async fn files_to_parts(files: &[FileInput]) -> Result<Vec<Part>> {
    futures::future::try_join_all(files.iter().map(file_to_part)).await
}
