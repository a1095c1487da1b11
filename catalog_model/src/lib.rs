//! Domain types and wire contracts shared across the catalog handlers.

/// Storage key prefix shared by the upload URL issuer and the CSV parser.
/// Objects created outside this prefix never enter the ingest pipeline.
pub const UPLOAD_KEY_PREFIX: &str = "uploaded/";

mod ingest;
mod notification;
mod product;

pub use ingest::{IngestQueueMessage, IngestRecord};
pub use notification::ProductCreatedNotification;
pub use product::{
    merge_product_with_stock, merge_products_with_stocks, AvailableProduct, CreateProductRequest,
    Product, Stock, ValidationError,
};
