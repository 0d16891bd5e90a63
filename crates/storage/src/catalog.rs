use async_trait::async_trait;
use scholora_core::model::ArtifactRef;

use crate::repository::StorageError;

/// A paper title the catalog can offer, with its bundled asset if one exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: String,
    pub asset: Option<ArtifactRef>,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            asset: None,
        }
    }

    #[must_use]
    pub fn with_asset(mut self, path: impl Into<String>) -> Self {
        self.asset = Some(ArtifactRef::new(path));
        self
    }
}

/// Lookup contract for selectable papers.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Titles containing `query`, ignoring case, in catalog order.
    ///
    /// An empty query matches every title.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing source cannot be read.
    async fn search(&self, query: &str) -> Result<Vec<String>, StorageError>;

    /// Fixed asset location for a catalog title.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` if the title is not in the catalog.
    async fn asset_for(&self, title: &str) -> Result<Option<ArtifactRef>, StorageError>;
}

/// Catalog backed by a fixed in-memory list.
#[derive(Clone, Debug, Default)]
pub struct StaticCatalog {
    entries: Vec<CatalogEntry>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// The bundled list of landmark machine-learning papers.
    #[must_use]
    pub fn papers() -> Self {
        Self::new(vec![
            CatalogEntry::new("Attention Is All You Need").with_asset("/attention.pdf"),
            CatalogEntry::new(
                "BERT: Pre-training of Deep Bidirectional Transformers for Language Understanding",
            )
            .with_asset("/bert.pdf"),
            CatalogEntry::new("Deep Residual Learning for Image Recognition"),
            CatalogEntry::new("Generative Adversarial Networks"),
            CatalogEntry::new("ImageNet Classification with Deep Convolutional Neural Networks"),
            CatalogEntry::new("Long Short-Term Memory"),
            CatalogEntry::new("Sequence to Sequence Learning with Neural Networks"),
            CatalogEntry::new(
                "Transformer-XL: Attentive Language Models Beyond a Fixed-Length Context",
            ),
            CatalogEntry::new("YOLO: Real-Time Object Detection"),
            CatalogEntry::new("ZeRO: Memory Optimizations Toward Training Trillion Parameter Models"),
        ])
    }

    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn search(&self, query: &str) -> Result<Vec<String>, StorageError> {
        let needle = query.to_lowercase();
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.title.to_lowercase().contains(&needle))
            .map(|entry| entry.title.clone())
            .collect())
    }

    async fn asset_for(&self, title: &str) -> Result<Option<ArtifactRef>, StorageError> {
        self.entries
            .iter()
            .find(|entry| entry.title == title)
            .map(|entry| entry.asset.clone())
            .ok_or(StorageError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let catalog = StaticCatalog::papers();
        let hits = catalog.search("bert").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert!(hits[0].contains("BERT"));
    }

    #[tokio::test]
    async fn search_preserves_catalog_order() {
        let catalog = StaticCatalog::papers();
        let hits = catalog.search("NETWORKS").await.unwrap();
        assert_eq!(
            hits,
            vec![
                "Generative Adversarial Networks".to_string(),
                "ImageNet Classification with Deep Convolutional Neural Networks".to_string(),
                "Sequence to Sequence Learning with Neural Networks".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn empty_query_matches_everything() {
        let catalog = StaticCatalog::papers();
        assert_eq!(catalog.search("").await.unwrap().len(), catalog.entries().len());
    }

    #[tokio::test]
    async fn asset_lookup_distinguishes_missing_asset_from_unknown_title() {
        let catalog = StaticCatalog::papers();
        let asset = catalog.asset_for("Attention Is All You Need").await.unwrap();
        assert_eq!(asset, Some(ArtifactRef::new("/attention.pdf")));
        assert_eq!(catalog.asset_for("Long Short-Term Memory").await.unwrap(), None);
        assert!(matches!(
            catalog.asset_for("Unknown Paper").await,
            Err(StorageError::NotFound)
        ));
    }
}
