pub mod catalog_store;
pub mod manager;
pub mod memory;
pub mod models;
pub mod store;

pub use catalog_store::PgCatalogStore;
pub use manager::{DatabaseError, DatabaseManager};
pub use memory::{CatalogFixture, MemoryCatalogStore};
pub use store::CatalogStore;
