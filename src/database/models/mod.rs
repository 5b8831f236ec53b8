pub mod product;
pub mod product_type;
pub mod subcategory;

pub use product::ProductSummary;
pub use product_type::ProductType;
pub use subcategory::Subcategory;
