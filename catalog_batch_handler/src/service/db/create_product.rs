use anyhow::{Context, Result};
use aws_sdk_dynamodb as dynamodb;
use aws_sdk_dynamodb::types::{Put, TransactWriteItem};
use catalog_model::{Product, Stock};
use serde_dynamo::{to_item, Item};

pub async fn create_product(
    client: &dynamodb::Client,
    products_table: &str,
    stocks_table: &str,
    product: Product,
    stock: Stock,
) -> Result<()> {
    let product_item: Item = to_item(product).context("failed to convert product")?;
    let stock_item: Item = to_item(stock).context("failed to convert stock")?;

    let product_put = Put::builder()
        .table_name(products_table)
        .set_item(Some(product_item.into()))
        .build()?;
    let stock_put = Put::builder()
        .table_name(stocks_table)
        .set_item(Some(stock_item.into()))
        .build()?;

    client
        .transact_write_items()
        .transact_items(TransactWriteItem::builder().put(product_put).build())
        .transact_items(TransactWriteItem::builder().put(stock_put).build())
        .send()
        .await
        .context("could not write product and stock transactionally")?;

    Ok(())
}
