use async_trait::async_trait;
use scholora_core::model::{ArtifactRef, UploadedFile};
use url::Url;

use crate::repository::StorageError;

/// Turns an uploaded paper into something the UI can display.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the upload cannot be referenced.
    async fn store_upload(&self, file: &UploadedFile) -> Result<ArtifactRef, StorageError>;
}

/// Leaves uploads where they are and hands back a `file://` URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalArtifactStore;

impl LocalArtifactStore {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn store_upload(&self, file: &UploadedFile) -> Result<ArtifactRef, StorageError> {
        let url = Url::from_file_path(file.path())
            .map_err(|()| StorageError::InvalidPath(file.path().display().to_string()))?;
        Ok(ArtifactRef::from_url(&url))
    }
}
