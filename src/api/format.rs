use serde::{Deserialize, Serialize};

use crate::database::models::ProductSummary;
use crate::search::{Pagination, SearchOutcome};

pub const SEARCH_SUCCESS_MESSAGE: &str = "Products searched by subcategory successfully.";

/// Wire format of `GET /products/search-by-subcategory-binary`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub message: String,
    pub data: Vec<ProductSummary>,
    pub pagination: Pagination,
    pub binary_search_steps_subcategory: u32,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            message: SEARCH_SUCCESS_MESSAGE.to_string(),
            data: outcome.products,
            pagination: outcome.pagination,
            binary_search_steps_subcategory: outcome.steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{search, PageRequest};
    use crate::testing::sample_snapshot;

    #[test]
    fn serializes_expected_fields() {
        let outcome = search(&sample_snapshot(), "shi", PageRequest::new(1, 20).unwrap());
        let body = serde_json::to_value(SearchResponse::from(outcome)).unwrap();

        assert_eq!(body["message"], SEARCH_SUCCESS_MESSAGE);
        assert_eq!(body["binary_search_steps_subcategory"], 3);
        for key in ["total", "per_page", "current_page", "last_page", "from", "to"] {
            assert!(body["pagination"].get(key).is_some(), "missing pagination.{}", key);
        }
        let first = &body["data"][0];
        for key in ["product_id", "title", "image_url", "gender_id", "product_type_id", "colour_id", "usage_id"] {
            assert!(first.get(key).is_some(), "missing data.{}", key);
        }
        assert_eq!(first["title"], "Linen Shirt");
    }

    #[test]
    fn missing_image_serializes_as_null() {
        let mut snapshot = sample_snapshot();
        snapshot.products.iter_mut().for_each(|p| p.image_url = None);
        let outcome = search(&snapshot, "bag", PageRequest::new(1, 20).unwrap());
        let body = serde_json::to_value(SearchResponse::from(outcome)).unwrap();
        assert!(body["data"][0]["image_url"].is_null());
    }
}
