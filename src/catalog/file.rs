use super::snapshot::Catalog;
use super::traits::CatalogSource;
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Catalog bundled as a JSON file next to the site
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for JsonFileSource {
    async fn load(&self) -> Result<Catalog> {
        info!("Loading catalog from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path).await?;
        debug!("Read {} bytes of catalog JSON", json.len());

        Catalog::from_json(&json)
    }

    fn source_name(&self) -> &'static str {
        "file"
    }
}
