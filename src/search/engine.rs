use std::collections::HashSet;

use crate::database::models::{ProductSummary, ProductType, Subcategory};

use super::pagination::{paginate, PageRequest, Pagination};
use super::prefix::{NameIndex, PrefixMatch};

/// The three tables a search reads, captured once per call
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub subcategories: Vec<Subcategory>,
    pub product_types: Vec<ProductType>,
    pub products: Vec<ProductSummary>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub products: Vec<ProductSummary>,
    pub pagination: Pagination,
    /// Binary-search iterations spent locating the subcategory run
    pub steps: u32,
    pub matched_subcategory_ids: Vec<i64>,
}

/// Queries are matched against lower-cased names
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase()
}

/// Search a snapshot for products whose subcategory name starts with `query`.
///
/// Pure over its inputs: the snapshot is only read. `ProductSearchService`
/// runs the same phases against a `CatalogStore`, through the helpers below.
pub fn search(snapshot: &CatalogSnapshot, query: &str, page: PageRequest) -> SearchOutcome {
    let query = normalize_query(query);
    let matched = match_subcategories(&snapshot.subcategories, &query);
    let type_ids = product_type_ids(&snapshot.product_types, &matched.ids);
    let products = products_of_types(&snapshot.products, &type_ids);

    finish(products, matched, page)
}

/// Phase one: sort the subcategories and locate the prefix run
pub fn match_subcategories(subcategories: &[Subcategory], query: &str) -> PrefixMatch {
    NameIndex::build(subcategories).prefix_run(query)
}

/// Product types belonging to any of `subcategory_ids`, in input order
pub fn product_types_in(product_types: &[ProductType], subcategory_ids: &[i64]) -> Vec<ProductType> {
    let wanted: HashSet<i64> = subcategory_ids.iter().copied().collect();
    product_types
        .iter()
        .filter(|pt| wanted.contains(&pt.subcategory_id))
        .cloned()
        .collect()
}

/// Ids of the product types that belong to any of `subcategory_ids`
pub fn product_type_ids(product_types: &[ProductType], subcategory_ids: &[i64]) -> Vec<i64> {
    product_types_in(product_types, subcategory_ids)
        .into_iter()
        .map(|pt| pt.id)
        .collect()
}

/// Products whose type is one of `type_ids`, in input order
pub fn products_of_types(products: &[ProductSummary], type_ids: &[i64]) -> Vec<ProductSummary> {
    let wanted: HashSet<i64> = type_ids.iter().copied().collect();
    products
        .iter()
        .filter(|p| wanted.contains(&p.product_type_id))
        .cloned()
        .collect()
}

/// Sort by title, case-insensitively; equal titles keep fetch order
pub fn sort_by_title(products: &mut [ProductSummary]) {
    products.sort_by_cached_key(|p| p.title.to_lowercase());
}

/// Final phase: order the fetched products and cut out the requested page
pub fn finish(mut products: Vec<ProductSummary>, matched: PrefixMatch, page: PageRequest) -> SearchOutcome {
    sort_by_title(&mut products);
    let (products, pagination) = paginate(products, page);

    SearchOutcome {
        products,
        pagination,
        steps: matched.steps,
        matched_subcategory_ids: matched.ids,
    }
}
