// handlers/mod.rs - HTTP handlers
//
// Every catalog read endpoint is public. Write access to the catalog lives in
// the admin CRUD layer, which is not part of this service.

pub mod products; // Product search endpoints
pub mod system;   // Service info and health

pub use products::*;
pub use system::*;
