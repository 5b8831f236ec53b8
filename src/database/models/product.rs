use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Product row with the fixed field projection returned by search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ProductSummary {
    pub product_id: i64,
    pub title: String,
    pub image_url: Option<String>,
    pub gender_id: i64,
    pub product_type_id: i64,
    pub colour_id: i64,
    pub usage_id: i64,
}
