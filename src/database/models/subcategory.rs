use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Subcategory projection used by the prefix search (`id`, `name` only)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Subcategory {
    pub id: i64,
    pub name: String,
}

impl Subcategory {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}
