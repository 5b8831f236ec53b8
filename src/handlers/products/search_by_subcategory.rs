use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use crate::api::format::SearchResponse;
use crate::app::AppState;
use crate::error::ApiError;
use crate::services::SearchRequest;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// GET /products/search-by-subcategory-binary - products whose subcategory name starts with `query`
///
/// Query parameters (all optional):
/// - query: case-insensitive subcategory name prefix, empty matches everything
/// - page: 1-based page number (default 1)
/// - per_page: page size (default from config, 20)
///
/// Expected Output (Success):
/// ```json
/// {
///   "message": "Products searched by subcategory successfully.",
///   "data": [{ "product_id": 1, "title": "...", "image_url": null, "gender_id": 1,
///              "product_type_id": 1, "colour_id": 1, "usage_id": 1 }],
///   "pagination": { "total": 1, "per_page": 20, "current_page": 1, "last_page": 1, "from": 1, "to": 1 },
///   "binary_search_steps_subcategory": 3
/// }
/// ```
pub async fn search_by_subcategory(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

    let request = SearchRequest::new(
        params.query.unwrap_or_default(),
        params.page.unwrap_or(1),
        params.per_page.unwrap_or(state.default_per_page),
    );

    let outcome = state.search.search(&request).await?;
    Ok(Json(outcome.into()))
}
