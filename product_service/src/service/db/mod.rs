mod create_product;
mod get_item;
mod scan;

use anyhow::{Context, Result};
use aws_sdk_dynamodb as dynamodb;
use catalog_model::{Product, Stock};
#[allow(unused_imports)]
use mockall::automock;
use serde_dynamo::{from_item, from_items};

#[cfg(test)]
pub use MockDbClient as DB;
#[cfg(not(test))]
pub use DbClient as DB;

#[derive(Clone, Debug)]
pub struct DbClient {
    inner: dynamodb::Client,
    products_table: String,
    stocks_table: String,
}

#[cfg_attr(test, automock)]
impl DbClient {
    pub fn new(inner: dynamodb::Client, products_table: String, stocks_table: String) -> Self {
        Self {
            inner,
            products_table,
            stocks_table,
        }
    }

    /// Unfiltered full scan of the products table. Returns the entire table
    /// contents; suitable only for small catalogs.
    #[tracing::instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let items = scan::scan_table(&self.inner, &self.products_table).await?;
        from_items(items).context("failed to deserialize products")
    }

    /// Unfiltered full scan of the stocks table.
    #[tracing::instrument(skip(self))]
    pub async fn list_stocks(&self) -> Result<Vec<Stock>> {
        let items = scan::scan_table(&self.inner, &self.stocks_table).await?;
        from_items(items).context("failed to deserialize stocks")
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        let item = get_item::get_by_key(&self.inner, &self.products_table, "id", id).await?;
        item.map(|data| from_item(data).context("failed to deserialize product"))
            .transpose()
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_stock(&self, product_id: &str) -> Result<Option<Stock>> {
        let item =
            get_item::get_by_key(&self.inner, &self.stocks_table, "product_id", product_id).await?;
        item.map(|data| from_item(data).context("failed to deserialize stock"))
            .transpose()
    }

    /// Writes the product and its stock record in one transaction containing
    /// exactly two puts.
    #[tracing::instrument(skip(self), fields(product_id=%product.id))]
    pub async fn create_product(&self, product: Product, stock: Stock) -> Result<()> {
        create_product::create_product(
            &self.inner,
            &self.products_table,
            &self.stocks_table,
            product,
            stock,
        )
        .await
    }
}
