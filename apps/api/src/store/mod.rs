//! Flat-file document store.
//!
//! One JSON document per [`ResourceKind`], kept in a single directory and
//! replaced wholesale on every save. There is no locking: concurrent saves of
//! the same kind race and the last rename wins.
//!
//! `AppState` holds an `Arc<dyn DocumentStore>`; [`FileStore`] is the on-disk
//! backend.

use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

/// Which singleton document a store operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Portfolio,
    Resume,
}

impl ResourceKind {
    pub fn file_name(self) -> &'static str {
        match self {
            ResourceKind::Portfolio => "portfolio.json",
            ResourceKind::Resume => "resume.json",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Portfolio => "Portfolio",
            ResourceKind::Resume => "Resume",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(ResourceKind),

    #[error("{kind} data is corrupt: {source}")]
    CorruptData {
        kind: ResourceKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode {kind} document: {source}")]
    Encode {
        kind: ResourceKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Persistence seam for the two singleton documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Replaces the stored document for `kind` entirely.
    async fn save(&self, kind: ResourceKind, document: &Value) -> Result<(), StoreError>;

    async fn load(&self, kind: ResourceKind) -> Result<Value, StoreError>;
}

/// Serializes `document` and saves it under `kind`.
pub async fn save_as<T: Serialize + Sync>(
    store: &dyn DocumentStore,
    kind: ResourceKind,
    document: &T,
) -> Result<(), StoreError> {
    let value =
        serde_json::to_value(document).map_err(|source| StoreError::Encode { kind, source })?;
    store.save(kind, &value).await
}

/// Loads `kind` and decodes it as `T`. A document of the wrong shape counts
/// as corrupt.
pub async fn load_as<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    kind: ResourceKind,
) -> Result<T, StoreError> {
    let value = store.load(kind).await?;
    serde_json::from_value(value).map_err(|source| StoreError::CorruptData { kind, source })
}

/// Stores each document as `<dir>/<kind>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn path_for(&self, kind: ResourceKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }
}

#[async_trait]
impl DocumentStore for FileStore {
    async fn save(&self, kind: ResourceKind, document: &Value) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(document)
            .map_err(|source| StoreError::Encode { kind, source })?;
        let dir = self.dir.clone();
        let path = self.path_for(kind);

        tokio::task::spawn_blocking(move || replace_file(&dir, &path, &bytes))
            .await
            .map_err(|e| StoreError::Io {
                path: self.path_for(kind),
                source: io::Error::other(e),
            })??;

        info!(kind = %kind, "Document saved");
        Ok(())
    }

    async fn load(&self, kind: ResourceKind) -> Result<Value, StoreError> {
        let path = self.path_for(kind);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(kind = %kind, "No stored document");
                return Err(StoreError::NotFound(kind));
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        serde_json::from_slice(&bytes).map_err(|source| StoreError::CorruptData { kind, source })
    }
}

/// Writes `bytes` to a temp file beside `path`, then renames it into place so
/// readers never observe a half-written document.
fn replace_file(dir: &Path, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let io_err = |source: io::Error| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    std::fs::create_dir_all(dir).map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
    tmp.write_all(bytes).map_err(io_err)?;
    tmp.flush().map_err(io_err)?;
    tmp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{PortfolioDocument, Project};
    use serde_json::json;

    #[tokio::test]
    async fn test_load_missing_document_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let err = store.load(ResourceKind::Resume).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(ResourceKind::Resume)));
    }

    #[tokio::test]
    async fn test_save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileStore::new(&nested);
        store
            .save(ResourceKind::Resume, &json!({"personalInfo": {}}))
            .await
            .unwrap();
        assert!(nested.join("resume.json").is_file());
    }

    #[tokio::test]
    async fn test_save_overwrites_rather_than_merges() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store
            .save(ResourceKind::Resume, &json!({"a": 1, "b": 2}))
            .await
            .unwrap();
        store
            .save(ResourceKind::Resume, &json!({"c": 3}))
            .await
            .unwrap();
        let loaded = store.load(ResourceKind::Resume).await.unwrap();
        assert_eq!(loaded, json!({"c": 3}));
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        store
            .save(ResourceKind::Portfolio, &json!({"name": "x"}))
            .await
            .unwrap();
        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("portfolio.json")]);
    }

    #[tokio::test]
    async fn test_invalid_json_on_disk_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("portfolio.json"), b"{not json").unwrap();
        let store = FileStore::new(dir.path());
        let err = store.load(ResourceKind::Portfolio).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::CorruptData {
                kind: ResourceKind::Portfolio,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_wrong_shape_is_corrupt_for_typed_load() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("portfolio.json"), br#""just text""#).unwrap();
        let store = FileStore::new(dir.path());
        let err = load_as::<PortfolioDocument>(&store, ResourceKind::Portfolio)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::CorruptData { .. }));
    }

    #[tokio::test]
    async fn test_portfolio_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let doc = PortfolioDocument {
            name: "Ada".to_string(),
            skills: vec!["Rust".to_string(), "SQL".to_string()],
            projects: vec![Project {
                title: "Engine".to_string(),
                description: "Analytical".to_string(),
            }],
            ..PortfolioDocument::default()
        };
        save_as(&store, ResourceKind::Portfolio, &doc).await.unwrap();
        let loaded: PortfolioDocument = load_as(&store, ResourceKind::Portfolio).await.unwrap();
        assert_eq!(loaded, doc);
    }

    #[tokio::test]
    async fn test_resume_key_order_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        let submitted: Value =
            serde_json::from_str(r#"{"skills":[],"personalInfo":{"z":1,"a":2},"experience":[]}"#)
                .unwrap();
        store.save(ResourceKind::Resume, &submitted).await.unwrap();
        let loaded = store.load(ResourceKind::Resume).await.unwrap();
        assert_eq!(
            serde_json::to_string(&loaded).unwrap(),
            serde_json::to_string(&submitted).unwrap()
        );
    }
}
