mod create_product;

use anyhow::Result;
use aws_sdk_dynamodb as dynamodb;
use catalog_model::{Product, Stock};
#[allow(unused_imports)]
use mockall::automock;

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

    /// Writes the product and its stock record in one transaction containing
    /// exactly two puts. Either both rows land or neither does.
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
