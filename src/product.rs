//! The product catalog for the shop.

use std::sync::Arc;

use axum::{
    Json,
    extract::{FromRef, State},
};
use serde::{Deserialize, Deserializer, Serialize};

use crate::AppState;

/// The ID of a product.
pub type ProductId = String;

/// Something that can be bought in the shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// The ID of the product.
    pub id: ProductId,
    /// The display name of the product.
    pub name: String,
    /// The unit price of the product. Never negative.
    pub price: f64,
}

impl Product {
    fn new(id: &str, name: &str, price: f64) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            price,
        }
    }
}

/// The read-only list of products for sale.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a list of products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Find a product by its ID.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl Default for Catalog {
    /// The technology products the shop sells.
    fn default() -> Self {
        Self::new(vec![
            Product::new("1", "Laptop Pro 14\"", 8999.9),
            Product::new("2", "Wireless Mouse", 149.9),
            Product::new("3", "Mechanical Keyboard", 459.0),
            Product::new("4", "27\" 4K Monitor", 2399.0),
            Product::new("5", "Noise-Cancelling Headphones", 1299.0),
            Product::new("6", "USB-C Dock", 699.0),
            Product::new("7", "Smartphone X", 4999.0),
            Product::new("8", "1TB External SSD", 599.9),
        ])
    }
}

impl FromRef<AppState> for Arc<Catalog> {
    fn from_ref(state: &AppState) -> Self {
        state.catalog.clone()
    }
}

/// Deserialize a product ID from either a JSON string or a JSON integer.
pub fn deserialize_product_id<'de, D>(deserializer: D) -> Result<ProductId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawProductId {
        Text(String),
        Number(u64),
    }

    Ok(match RawProductId::deserialize(deserializer)? {
        RawProductId::Text(id) => id,
        RawProductId::Number(id) => id.to_string(),
    })
}

/// A route handler for listing the catalog.
pub async fn get_products_endpoint(State(catalog): State<Arc<Catalog>>) -> Json<Vec<Product>> {
    Json(catalog.products().to_vec())
}
