use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::{ProductSummary, ProductType, Subcategory};

/// Read-only view of the catalog tables consumed by product search.
///
/// Each call is an independent read; no transaction spans a sequence of calls.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// All subcategories, `id` and `name` only, in storage order
    async fn subcategories(&self) -> Result<Vec<Subcategory>, DatabaseError>;

    /// Product types whose `subcategory_id` is one of `subcategory_ids`
    async fn product_types_for_subcategories(
        &self,
        subcategory_ids: &[i64],
    ) -> Result<Vec<ProductType>, DatabaseError>;

    /// Products whose `product_type_id` is one of `product_type_ids`
    async fn products_for_product_types(
        &self,
        product_type_ids: &[i64],
    ) -> Result<Vec<ProductSummary>, DatabaseError>;

    /// Subcategories whose name starts with `prefix`, compared case-insensitively
    async fn subcategories_with_prefix(&self, prefix: &str) -> Result<Vec<Subcategory>, DatabaseError>;

    /// Connectivity check for `/health`
    async fn ping(&self) -> Result<(), DatabaseError>;

    /// Backend label reported by `/health`
    fn backend(&self) -> &'static str;
}
