pub mod filename;
pub mod handlers;

use std::io;
use std::path::PathBuf;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::UploadConfig;
use crate::uploads::filename::{escape_path_segment, extension_of, sanitize_file_name};

pub const NO_FILE_PART: &str = "No file part";
pub const NO_SELECTED_FILE: &str = "No selected file";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("{0}")]
    NoFile(&'static str),

    #[error("File type not allowed")]
    UnsupportedType { extension: Option<String> },

    #[error("Upload not found: {0}")]
    NotFound(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A file part pulled out of a multipart request.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub file_name: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredUpload {
    pub filename: String,
    pub url: String,
}

/// Image uploads, written flat into the configured directory.
#[derive(Debug, Clone)]
pub struct UploadStore {
    config: UploadConfig,
}

impl UploadStore {
    pub fn new(config: UploadConfig) -> Self {
        UploadStore { config }
    }

    pub fn is_allowed(&self, file_name: &str) -> bool {
        extension_of(file_name).is_some_and(|ext| {
            self.config
                .allowed_extensions
                .iter()
                .any(|allowed| *allowed == ext)
        })
    }

    /// Validates and writes an upload. A file with the same sanitized name is
    /// overwritten.
    pub async fn accept(&self, file: Option<IncomingFile>) -> Result<StoredUpload, UploadError> {
        let file = file.ok_or(UploadError::NoFile(NO_FILE_PART))?;
        if file.file_name.is_empty() {
            return Err(UploadError::NoFile(NO_SELECTED_FILE));
        }
        if !self.is_allowed(&file.file_name) {
            return Err(UploadError::UnsupportedType {
                extension: extension_of(&file.file_name),
            });
        }

        let filename = sanitize_file_name(&file.file_name);
        if filename.is_empty() {
            return Err(UploadError::NoFile(NO_SELECTED_FILE));
        }

        let dir = &self.config.dir;
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|source| UploadError::Io {
                path: dir.clone(),
                source,
            })?;
        let path = dir.join(&filename);
        tokio::fs::write(&path, &file.bytes)
            .await
            .map_err(|source| UploadError::Io {
                path: path.clone(),
                source,
            })?;

        info!(filename = %filename, bytes = file.bytes.len(), "Upload stored");
        Ok(StoredUpload {
            url: format!("/uploads/{}", escape_path_segment(&filename)),
            filename,
        })
    }

    /// Reads a previously stored file. Names that are not already a single
    /// sanitized segment are treated as absent.
    pub async fn read(&self, name: &str) -> Result<Bytes, UploadError> {
        let sanitized = sanitize_file_name(name);
        if sanitized.is_empty() || sanitized != name {
            return Err(UploadError::NotFound(name.to_string()));
        }

        let path = self.config.dir.join(&sanitized);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Bytes::from(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(UploadError::NotFound(name.to_string()))
            }
            Err(source) => Err(UploadError::Io { path, source }),
        }
    }
}

/// Content type for a stored file, by extension.
pub fn content_type_for(name: &str) -> &'static str {
    match extension_of(name).as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}
