use std::sync::Arc;

use crate::database::memory::{CatalogFixture, MemoryCatalogStore};
use crate::database::models::{ProductSummary, ProductType, Subcategory};
use crate::search::CatalogSnapshot;

/// Product row with fixed gender/colour/usage ids
pub fn product(product_id: i64, title: &str, product_type_id: i64) -> ProductSummary {
    ProductSummary {
        product_id,
        title: title.to_string(),
        image_url: Some(format!("https://img.example.com/{}.jpg", product_id)),
        gender_id: 1,
        product_type_id,
        colour_id: 2,
        usage_id: 3,
    }
}

/// Small catalog: three "sh" subcategories plus Bags and Watches, one product
/// type per subcategory, seven products.
pub fn sample_snapshot() -> CatalogSnapshot {
    CatalogSnapshot {
        subcategories: vec![
            Subcategory::new(1, "Shoes"),
            Subcategory::new(2, "Shirts"),
            Subcategory::new(3, "Shorts"),
            Subcategory::new(4, "Bags"),
            Subcategory::new(5, "Watches"),
        ],
        product_types: vec![
            ProductType::new(10, 1),
            ProductType::new(20, 2),
            ProductType::new(30, 3),
            ProductType::new(40, 4),
            ProductType::new(50, 5),
        ],
        products: vec![
            product(100, "Running Shoe", 10),
            product(101, "leather boot", 10),
            product(200, "oxford shirt", 20),
            product(201, "Linen Shirt", 20),
            product(300, "Cargo Shorts", 30),
            product(400, "Tote Bag", 40),
            product(500, "Dive Watch", 50),
        ],
    }
}

pub fn sample_store() -> Arc<MemoryCatalogStore> {
    let snapshot = sample_snapshot();
    Arc::new(MemoryCatalogStore::from_fixture(CatalogFixture {
        subcategories: snapshot.subcategories,
        product_types: snapshot.product_types,
        products: snapshot.products,
    }))
}
