use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::database::manager::DatabaseError;
use crate::database::models::{ProductSummary, ProductType, Subcategory};
use crate::database::store::CatalogStore;
use crate::search::engine;

/// Catalog contents as stored in a JSON fixture file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFixture {
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
    #[serde(default)]
    pub product_types: Vec<ProductType>,
    #[serde(default)]
    pub products: Vec<ProductSummary>,
}

/// In-process `CatalogStore` over fixed vectors. Reads return clones, so every
/// call sees its own snapshot.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogStore {
    data: CatalogFixture,
}

impl MemoryCatalogStore {
    pub fn new(
        subcategories: Vec<Subcategory>,
        product_types: Vec<ProductType>,
        products: Vec<ProductSummary>,
    ) -> Self {
        Self {
            data: CatalogFixture { subcategories, product_types, products },
        }
    }

    pub fn from_fixture(data: CatalogFixture) -> Self {
        Self { data }
    }

    pub fn from_json(json: &str) -> Result<Self, DatabaseError> {
        let data: CatalogFixture =
            serde_json::from_str(json).map_err(|e| DatabaseError::Fixture(e.to_string()))?;
        Ok(Self::from_fixture(data))
    }

    pub fn from_fixture_file(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| DatabaseError::Fixture(format!("{}: {}", path.display(), e)))?;
        let store = Self::from_json(&contents)?;
        tracing::info!(
            "Loaded catalog fixture {} ({} subcategories, {} product types, {} products)",
            path.display(),
            store.data.subcategories.len(),
            store.data.product_types.len(),
            store.data.products.len()
        );
        Ok(store)
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn subcategories(&self) -> Result<Vec<Subcategory>, DatabaseError> {
        Ok(self.data.subcategories.clone())
    }

    async fn product_types_for_subcategories(
        &self,
        subcategory_ids: &[i64],
    ) -> Result<Vec<ProductType>, DatabaseError> {
        Ok(engine::product_types_in(&self.data.product_types, subcategory_ids))
    }

    async fn products_for_product_types(
        &self,
        product_type_ids: &[i64],
    ) -> Result<Vec<ProductSummary>, DatabaseError> {
        Ok(engine::products_of_types(&self.data.products, product_type_ids))
    }

    async fn subcategories_with_prefix(&self, prefix: &str) -> Result<Vec<Subcategory>, DatabaseError> {
        let prefix = prefix.to_lowercase();
        Ok(self
            .data
            .subcategories
            .iter()
            .filter(|s| s.name.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
