use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Error)]
pub enum FileError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("URL does not belong to this file store: {0}")]
    ForeignUrl(String),
    #[error("no stored file for URL: {0}")]
    Missing(String),
}

impl From<FileError> for ApiError {
    fn from(err: FileError) -> Self {
        match err {
            FileError::Io(e) => {
                tracing::error!("file store I/O error: {}", e);
                ApiError::internal()
            }
            FileError::ForeignUrl(url) => {
                ApiError::bad_request(format!("URL is not a managed upload: {}", url))
            }
            FileError::Missing(url) => ApiError::not_found(format!("no upload found for {}", url)),
        }
    }
}

/// File-hosting collaborator: store a buffer, get back a public URL; delete
/// by that URL later. The admin panel uses it for project images, avatars
/// and resume files.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn store(&self, filename: &str, bytes: &[u8]) -> Result<String, FileError>;
    async fn remove(&self, url: &str) -> Result<(), FileError>;
}

/// Local-disk implementation. Files land in a configured directory under a
/// random name (only the original extension survives) and are served
/// statically under `public_base`.
pub struct LocalFileStore {
    root: PathBuf,
    public_base: String,
}

impl LocalFileStore {
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Map a stored URL back to the bare file name, rejecting anything that
    /// does not point into this store.
    fn file_name_from_url(&self, url: &str) -> Result<String, FileError> {
        let path = match Url::parse(url) {
            Ok(parsed) => parsed.path().to_string(),
            // Relative URLs ("/uploads/abc.png") don't parse as absolute
            Err(_) => url.to_string(),
        };

        let name = path
            .strip_prefix(&format!("{}/", self.public_base))
            .ok_or_else(|| FileError::ForeignUrl(url.to_string()))?;

        if name.is_empty() || name.contains('/') || name.contains("..") {
            return Err(FileError::ForeignUrl(url.to_string()));
        }
        Ok(name.to_string())
    }
}

#[async_trait]
impl FileStore for LocalFileStore {
    async fn store(&self, filename: &str, bytes: &[u8]) -> Result<String, FileError> {
        tokio::fs::create_dir_all(&self.root).await?;

        // Client-supplied names are untrusted; keep only a sane extension
        let extension: String = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or_default()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .take(10)
            .collect::<String>()
            .to_ascii_lowercase();

        let name = if extension.is_empty() {
            Uuid::new_v4().simple().to_string()
        } else {
            format!("{}.{}", Uuid::new_v4().simple(), extension)
        };

        tokio::fs::write(self.root.join(&name), bytes).await?;
        Ok(format!("{}/{}", self.public_base, name))
    }

    async fn remove(&self, url: &str) -> Result<(), FileError> {
        let name = self.file_name_from_url(url)?;
        match tokio::fs::remove_file(self.root.join(&name)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(FileError::Missing(url.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
