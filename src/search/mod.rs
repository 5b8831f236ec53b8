//! Subcategory prefix search.
//!
//! Products are located by the name prefix of their subcategory: the
//! subcategory list is sorted, the leftmost prefix match is found by binary
//! search, the contiguous run of matches around it is collected, and the
//! matches are expanded through product types to products.

pub mod engine;
pub mod error;
pub mod pagination;
pub mod prefix;

pub use engine::{normalize_query, search, CatalogSnapshot, SearchOutcome};
pub use error::SearchError;
pub use pagination::{PageRequest, Pagination};
pub use prefix::{NameIndex, PrefixMatch};
