use std::sync::Arc;

use storage::catalog::Catalog;

use crate::error::LessonError;

/// Search over the paper catalog for the upload page.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<dyn Catalog>,
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Arc<dyn Catalog>) -> Self {
        Self { catalog }
    }

    /// Titles matching the search box.
    ///
    /// A blank box shows no results rather than the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::Storage` if the catalog cannot be read.
    pub async fn search(&self, query: &str) -> Result<Vec<String>, LessonError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        Ok(self.catalog.search(query).await?)
    }
}
