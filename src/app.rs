use std::sync::Arc;

use axum::{http::{HeaderValue, Method}, routing::get, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{ApiConfig, AppConfig, Environment, StoreBackend};
use crate::database::{CatalogStore, DatabaseError, MemoryCatalogStore, PgCatalogStore};
use crate::handlers;
use crate::services::{MatchStrategy, ProductSearchService};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub search: Arc<ProductSearchService>,
    pub default_per_page: i64,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, strategy: MatchStrategy, default_per_page: i64) -> Self {
        let search = Arc::new(ProductSearchService::new(store.clone(), strategy));
        Self { store, search, default_per_page }
    }

    /// Build the store selected by config and wrap it in handler state
    pub async fn from_config(config: &AppConfig) -> Result<Self, DatabaseError> {
        let store: Arc<dyn CatalogStore> = match config.server.store {
            StoreBackend::Postgres => Arc::new(PgCatalogStore::connect().await?),
            StoreBackend::Memory if config.environment == Environment::Production => {
                return Err(DatabaseError::UnsupportedBackend("memory store in production".to_string()));
            }
            StoreBackend::Memory => match &config.server.fixture_path {
                Some(path) => Arc::new(MemoryCatalogStore::from_fixture_file(path)?),
                None => {
                    tracing::warn!("CATALOG_STORE=memory without CATALOG_FIXTURE; serving an empty catalog");
                    Arc::new(MemoryCatalogStore::default())
                }
            },
        };

        tracing::info!(
            "Catalog store: {}, match strategy: {:?}",
            store.backend(),
            config.search.strategy
        );

        Ok(Self::new(store, config.search.strategy.into(), config.search.default_per_page))
    }
}

pub fn router(state: AppState, api: &ApiConfig) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .merge(product_routes())
        .fallback(handlers::not_found)
        .with_state(state)
        // Global middleware
        .layer(cors_layer(&api.cors_origins));

    if api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn product_routes() -> Router<AppState> {
    Router::new().route(
        "/products/search-by-subcategory-binary",
        get(handlers::search_by_subcategory),
    )
}

/// Permissive when no origins are configured, otherwise an explicit allow-list
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET])
        .allow_headers(Any)
}
