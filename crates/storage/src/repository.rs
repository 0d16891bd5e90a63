use std::sync::Arc;

use thiserror::Error;

use crate::artifacts::{ArtifactStore, LocalArtifactStore};
use crate::catalog::{Catalog, StaticCatalog};

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("invalid upload path: {0}")]
    InvalidPath(String),
}

/// Aggregates the catalog and artifact store behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn Catalog>,
    pub artifacts: Arc<dyn ArtifactStore>,
}

impl Storage {
    /// Built-in paper list plus local-file uploads.
    #[must_use]
    pub fn in_memory() -> Self {
        let catalog: Arc<dyn Catalog> = Arc::new(StaticCatalog::papers());
        let artifacts: Arc<dyn ArtifactStore> = Arc::new(LocalArtifactStore::new());
        Self { catalog, artifacts }
    }
}
