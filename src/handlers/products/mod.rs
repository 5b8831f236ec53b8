pub mod search_by_subcategory;

pub use search_by_subcategory::search_by_subcategory;
