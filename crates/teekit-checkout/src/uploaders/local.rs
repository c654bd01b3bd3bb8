//! Local filesystem uploader.
//!
//! Stores payloads under a base directory, one subdirectory per logical
//! folder, and serves them from a configured base URL. Useful for
//! development setups and self-hosted deployments without an external image
//! host.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;
use uuid::Uuid;

use teekit_core::UploadError;

use crate::traits::{ImageUploader, UploadFolder};

/// Filesystem-backed image uploader.
#[derive(Debug, Clone)]
pub struct LocalUploader {
    base_path: PathBuf,
    base_url: String,
}

impl LocalUploader {
    /// Creates the uploader, ensuring the base directory exists.
    ///
    /// # Arguments
    /// * `base_path` - Root directory for stored files
    /// * `base_url` - Base URL files are served from (no trailing slash)
    pub async fn new(
        base_path: impl Into<PathBuf>,
        base_url: impl Into<String>,
    ) -> Result<Self, UploadError> {
        let base_path = base_path.into();
        fs::create_dir_all(&base_path)
            .await
            .map_err(|e| UploadError::Failed {
                reason: format!(
                    "failed to create upload directory {}: {}",
                    base_path.display(),
                    e
                ),
            })?;
        Ok(Self {
            base_path,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Builds a collision-free storage key from the folder and hint.
    fn generate_key(folder: UploadFolder, filename_hint: Option<&str>) -> String {
        let stem = filename_hint
            .map(sanitize_hint)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "asset".to_string());
        format!(
            "{}/{}-{}.png",
            folder.as_str(),
            stem,
            Uuid::new_v4().simple()
        )
    }
}

/// Keeps only characters safe for a filename.
fn sanitize_hint(hint: &str) -> String {
    hint.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

#[async_trait]
impl ImageUploader for LocalUploader {
    async fn upload(
        &self,
        data: Bytes,
        folder: UploadFolder,
        filename_hint: Option<&str>,
    ) -> Result<String, UploadError> {
        if data.is_empty() {
            return Err(UploadError::InvalidPayload {
                reason: "empty payload".to_string(),
            });
        }

        let key = Self::generate_key(folder, filename_hint);
        let path = self.base_path.join(&key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| UploadError::Failed {
                    reason: format!("failed to create {}: {}", parent.display(), e),
                })?;
        }

        fs::write(&path, &data)
            .await
            .map_err(|e| UploadError::Failed {
                reason: format!("failed to write {}: {}", path.display(), e),
            })?;

        debug!(key = %key, bytes = data.len(), "stored upload locally");
        Ok(format!("{}/{}", self.base_url, key))
    }
}
