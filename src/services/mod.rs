pub mod product_search;

pub use product_search::{MatchStrategy, ProductSearchService, SearchRequest};
