use serde::{Deserialize, Serialize};

use crate::product::{Product, Stock};

/// Published to the product-created topic after a committed write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreatedNotification {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub stock: u32,
}

impl ProductCreatedNotification {
    pub fn new(product: &Product, stock: &Stock) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            description: product.description.clone(),
            price: product.price,
            stock: stock.count,
        }
    }

    /// The topic subject line naming the product.
    pub fn subject(&self) -> String {
        format!("New product created: {}", self.title)
    }
}
