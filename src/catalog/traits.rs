use super::snapshot::Catalog;
use crate::error::Result;
use async_trait::async_trait;

/// Somewhere a property catalog can be loaded from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load and validate the full catalog
    async fn load(&self) -> Result<Catalog>;

    /// Get the name of the source, for logging
    fn source_name(&self) -> &'static str;
}
