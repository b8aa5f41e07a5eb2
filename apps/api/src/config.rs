use std::path::PathBuf;

use anyhow::{Context, Result};

/// Image extensions accepted by the upload endpoint.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// 16 MiB request body ceiling.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Reserved for cookie/session signing. Nothing in the service signs yet.
    pub secret_key: Option<String>,
    /// Directory holding `portfolio.json`, `resume.json` and uploaded images.
    pub storage_dir: PathBuf,
    pub static_dir: PathBuf,
    pub upload: UploadConfig,
}

/// Settings handed to the upload store at construction.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub dir: PathBuf,
    pub allowed_extensions: Vec<String>,
    pub max_bytes: usize,
}

impl UploadConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        UploadConfig {
            dir: dir.into(),
            allowed_extensions: DEFAULT_ALLOWED_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            max_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let storage_dir = PathBuf::from(optional_env("STORAGE_DIR", "uploads"));
        let max_bytes = std::env::var("MAX_UPLOAD_BYTES")
            .ok()
            .map(|raw| {
                raw.parse::<usize>()
                    .context("MAX_UPLOAD_BYTES must be a byte count")
            })
            .transpose()?
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG", "info"),
            secret_key: std::env::var("SECRET_KEY").ok().filter(|k| !k.is_empty()),
            static_dir: PathBuf::from(optional_env("STATIC_DIR", "static")),
            upload: UploadConfig {
                max_bytes,
                ..UploadConfig::new(storage_dir.clone())
            },
            storage_dir,
        })
    }

    /// Config rooted at `dir`, used by tests that need an isolated store.
    #[cfg(test)]
    pub fn local(dir: impl Into<PathBuf>) -> Self {
        let storage_dir = dir.into();
        Config {
            port: 0,
            rust_log: "debug".to_string(),
            secret_key: None,
            static_dir: storage_dir.join("static"),
            upload: UploadConfig::new(storage_dir.clone()),
            storage_dir,
        }
    }
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
