use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{ProductSummary, ProductType, Subcategory};
use crate::database::store::CatalogStore;

// Fetch order breaks ties in the title sort, so every select is ordered.
const SUBCATEGORIES_SQL: &str = "SELECT id::bigint AS id, name FROM subcategories ORDER BY id";

const PRODUCT_TYPES_SQL: &str = "SELECT id::bigint AS id, subcategory_id::bigint AS subcategory_id
     FROM product_types
     WHERE subcategory_id = ANY($1)
     ORDER BY id";

const PRODUCTS_SQL: &str = "SELECT product_id::bigint AS product_id, title, image_url,
            gender_id::bigint AS gender_id,
            product_type_id::bigint AS product_type_id,
            colour_id::bigint AS colour_id,
            usage_id::bigint AS usage_id
     FROM products
     WHERE product_type_id = ANY($1)
     ORDER BY product_id";

const SUBCATEGORIES_WITH_PREFIX_SQL: &str = "SELECT id::bigint AS id, name
     FROM subcategories
     WHERE lower(name) LIKE $1 ESCAPE '\\'
     ORDER BY lower(name), id";

/// `CatalogStore` backed by the PostgreSQL catalog tables.
///
/// Integer columns are cast to `bigint` in every projection so rows decode
/// into `i64` regardless of the declared column width.
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a store on the shared pool from `DatabaseManager`
    pub async fn connect() -> Result<Self, DatabaseError> {
        Ok(Self::new(DatabaseManager::pool().await?))
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn subcategories(&self) -> Result<Vec<Subcategory>, DatabaseError> {
        let rows = sqlx::query_as::<_, Subcategory>(SUBCATEGORIES_SQL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn product_types_for_subcategories(
        &self,
        subcategory_ids: &[i64],
    ) -> Result<Vec<ProductType>, DatabaseError> {
        if subcategory_ids.is_empty() {
            return Ok(vec![]);
        }
        let rows = sqlx::query_as::<_, ProductType>(PRODUCT_TYPES_SQL)
            .bind(subcategory_ids.to_vec())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn products_for_product_types(
        &self,
        product_type_ids: &[i64],
    ) -> Result<Vec<ProductSummary>, DatabaseError> {
        if product_type_ids.is_empty() {
            return Ok(vec![]);
        }
        let rows = sqlx::query_as::<_, ProductSummary>(PRODUCTS_SQL)
            .bind(product_type_ids.to_vec())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn subcategories_with_prefix(&self, prefix: &str) -> Result<Vec<Subcategory>, DatabaseError> {
        let pattern = format!("{}%", escape_like(&prefix.to_lowercase()));
        let rows = sqlx::query_as::<_, Subcategory>(SUBCATEGORIES_WITH_PREFIX_SQL)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

/// Escape LIKE metacharacters so user input only ever matches literally
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
