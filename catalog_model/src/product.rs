use serde::{Deserialize, Serialize};

/// A sellable product's descriptive record, keyed by `id` in the products table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
}

/// The available count paired to a [Product], keyed by `product_id` in the stocks table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    pub product_id: String,
    #[serde(default)]
    pub count: u32,
}

/// The merged catalog + inventory view served by the read API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailableProduct {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub count: u32,
}

/// Body of `POST /products`. Any client-supplied id is ignored; ids are
/// always generated server side.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub count: Option<u32>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("missing required fields: title or price")]
    MissingRequiredField,
    #[error("price must be non-negative")]
    NegativePrice,
}

impl CreateProductRequest {
    /// Validates the request and splits it into the product (with the given
    /// server-generated id) and its paired stock record.
    pub fn into_product_and_stock(self, id: String) -> Result<(Product, Stock), ValidationError> {
        let title = match self.title {
            Some(title) if !title.is_empty() => title,
            _ => return Err(ValidationError::MissingRequiredField),
        };
        let price = self.price.ok_or(ValidationError::MissingRequiredField)?;
        if price < 0.0 {
            return Err(ValidationError::NegativePrice);
        }

        let product = Product {
            id: id.clone(),
            title,
            description: self.description.unwrap_or_default(),
            price,
        };
        let stock = Stock {
            product_id: id,
            count: self.count.unwrap_or(0),
        };
        Ok((product, stock))
    }
}

/// Merges one product with its (possibly missing) stock record.
pub fn merge_product_with_stock(product: Product, stock: Option<Stock>) -> AvailableProduct {
    AvailableProduct {
        count: stock.map(|s| s.count).unwrap_or(0),
        id: product.id,
        title: product.title,
        description: product.description,
        price: product.price,
    }
}

/// In-memory left-join of stocks onto products by id. A product without a
/// matching stock row gets count 0.
pub fn merge_products_with_stocks(
    products: Vec<Product>,
    stocks: Vec<Stock>,
) -> Vec<AvailableProduct> {
    products
        .into_iter()
        .map(|product| {
            let stock = stocks.iter().find(|s| s.product_id == product.id).cloned();
            merge_product_with_stock(product, stock)
        })
        .collect()
}
