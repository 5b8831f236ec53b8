use std::sync::Arc;

use tracing::info;

use crate::config::SearchStrategySetting;
use crate::database::store::CatalogStore;
use crate::search::engine::{self, SearchOutcome};
use crate::search::{normalize_query, PageRequest, PrefixMatch, SearchError};

/// How matching subcategories are located
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Load every subcategory and binary-search the sorted names in process
    BinarySearch,
    /// Ask the store for its own prefix match; reports zero steps
    StoreNative,
}

impl From<SearchStrategySetting> for MatchStrategy {
    fn from(setting: SearchStrategySetting) -> Self {
        match setting {
            SearchStrategySetting::BinarySearch => MatchStrategy::BinarySearch,
            SearchStrategySetting::StoreNative => MatchStrategy::StoreNative,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub page: i64,
    pub per_page: i64,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, page: i64, per_page: i64) -> Self {
        Self { query: query.into(), page, per_page }
    }
}

/// Runs product-by-subcategory searches against a `CatalogStore`
pub struct ProductSearchService {
    store: Arc<dyn CatalogStore>,
    strategy: MatchStrategy,
}

impl ProductSearchService {
    pub fn new(store: Arc<dyn CatalogStore>, strategy: MatchStrategy) -> Self {
        Self { store, strategy }
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome, SearchError> {
        let page = PageRequest::new(request.page, request.per_page)?;
        let query = normalize_query(&request.query);

        info!("Product search by subcategory: searching for query \"{}\"", query);

        let matched = self.match_subcategories(&query).await?;
        info!(
            "Product search by subcategory: found {} matching subcategory IDs in {} steps",
            matched.ids.len(),
            matched.steps
        );

        let product_types = self.store.product_types_for_subcategories(&matched.ids).await?;
        let type_ids = engine::product_type_ids(&product_types, &matched.ids);
        info!(
            "Product search by subcategory: found {} matching product type IDs",
            type_ids.len()
        );

        let products = self.store.products_for_product_types(&type_ids).await?;

        Ok(engine::finish(products, matched, page))
    }

    async fn match_subcategories(&self, query: &str) -> Result<PrefixMatch, SearchError> {
        match self.strategy {
            MatchStrategy::BinarySearch => {
                let subcategories = self.store.subcategories().await?;
                Ok(engine::match_subcategories(&subcategories, query))
            }
            MatchStrategy::StoreNative => {
                let subcategories = if query.is_empty() {
                    self.store.subcategories().await?
                } else {
                    self.store.subcategories_with_prefix(query).await?
                };
                Ok(PrefixMatch {
                    ids: subcategories.iter().map(|s| s.id).collect(),
                    steps: 0,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::database::manager::DatabaseError;
    use crate::database::models::{ProductSummary, ProductType, Subcategory};
    use crate::testing::{sample_snapshot, sample_store};

    fn service(strategy: MatchStrategy) -> ProductSearchService {
        ProductSearchService::new(sample_store(), strategy)
    }

    #[tokio::test]
    async fn binary_search_strategy_finds_products() {
        let outcome = service(MatchStrategy::BinarySearch)
            .search(&SearchRequest::new("SH", 1, 20))
            .await
            .unwrap();
        assert_eq!(outcome.pagination.total, 5);
        assert!(outcome.steps >= 1 && outcome.steps <= 3);
        let titles: Vec<&str> = outcome.products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Cargo Shorts", "leather boot", "Linen Shirt", "oxford shirt", "Running Shoe"]
        );
    }

    #[tokio::test]
    async fn strategies_agree_on_products() {
        for query in ["", "s", "sh", "sho", "bag", "w", "zzz"] {
            let request = SearchRequest::new(query, 1, 50);
            let binary = service(MatchStrategy::BinarySearch).search(&request).await.unwrap();
            let native = service(MatchStrategy::StoreNative).search(&request).await.unwrap();
            assert_eq!(binary.products, native.products, "query {:?}", query);
            assert_eq!(binary.pagination, native.pagination, "query {:?}", query);
            assert_eq!(native.steps, 0);
        }
    }

    #[tokio::test]
    async fn service_matches_snapshot_pipeline() {
        let snapshot = sample_snapshot();
        for strategy in [MatchStrategy::BinarySearch, MatchStrategy::StoreNative] {
            let svc = service(strategy);
            for query in ["", "S", "sh", "shi", "Sho", "bag", "watches", "zzz"] {
                for (page, per_page) in [(1, 2), (2, 2), (3, 2), (1, 50)] {
                    let served = svc.search(&SearchRequest::new(query, page, per_page)).await.unwrap();
                    let expected = engine::search(&snapshot, query, PageRequest::new(page, per_page).unwrap());
                    assert_eq!(served.products, expected.products, "{:?} page {}", query, page);
                    assert_eq!(served.pagination, expected.pagination, "{:?} page {}", query, page);
                }
            }
        }
    }

    #[tokio::test]
    async fn second_page_continues_ordering() {
        let svc = service(MatchStrategy::BinarySearch);
        let first = svc.search(&SearchRequest::new("sh", 1, 3)).await.unwrap();
        let second = svc.search(&SearchRequest::new("sh", 2, 3)).await.unwrap();
        assert_eq!(first.products.len(), 3);
        assert_eq!(second.products.len(), 2);
        assert_eq!(second.pagination.from, 4);
        assert_eq!(second.pagination.to, 5);
        assert_eq!(second.pagination.last_page, 2);
        assert!(first.products[2].title.to_lowercase() <= second.products[0].title.to_lowercase());
    }

    #[tokio::test]
    async fn invalid_pagination_is_rejected_before_reading() {
        let err = service(MatchStrategy::BinarySearch)
            .search(&SearchRequest::new("sh", 1, 0))
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Input { field: "per_page", .. }));

        let err = service(MatchStrategy::BinarySearch)
            .search(&SearchRequest::new("sh", 0, 10))
            .await
            .unwrap_err();
        assert!(matches!(err, SearchError::Input { field: "page", .. }));
    }

    struct FailingStore;

    #[async_trait]
    impl CatalogStore for FailingStore {
        async fn subcategories(&self) -> Result<Vec<Subcategory>, DatabaseError> {
            Err(DatabaseError::ConnectionError("connection refused".into()))
        }
        async fn product_types_for_subcategories(&self, _: &[i64]) -> Result<Vec<ProductType>, DatabaseError> {
            Ok(vec![])
        }
        async fn products_for_product_types(&self, _: &[i64]) -> Result<Vec<ProductSummary>, DatabaseError> {
            Ok(vec![])
        }
        async fn subcategories_with_prefix(&self, _: &str) -> Result<Vec<Subcategory>, DatabaseError> {
            Err(DatabaseError::ConnectionError("connection refused".into()))
        }
        async fn ping(&self) -> Result<(), DatabaseError> {
            Err(DatabaseError::ConnectionError("connection refused".into()))
        }
        fn backend(&self) -> &'static str {
            "failing"
        }
    }

    #[tokio::test]
    async fn store_errors_propagate() {
        let svc = ProductSearchService::new(Arc::new(FailingStore), MatchStrategy::BinarySearch);
        let err = svc.search(&SearchRequest::new("sh", 1, 20)).await.unwrap_err();
        assert!(matches!(err, SearchError::Store(DatabaseError::ConnectionError(_))));
    }
}
