use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ProductType {
    pub id: i64,
    pub subcategory_id: i64,
}

impl ProductType {
    pub fn new(id: i64, subcategory_id: i64) -> Self {
        Self { id, subcategory_id }
    }
}
