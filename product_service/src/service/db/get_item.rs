use anyhow::{Context, Result};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;

pub async fn get_by_key(
    client: &Client,
    table: &str,
    key_name: &str,
    key_value: &str,
) -> Result<Option<HashMap<String, AttributeValue>>> {
    Ok(client
        .get_item()
        .table_name(table)
        .key(key_name, AttributeValue::S(key_value.to_owned()))
        .send()
        .await
        .context(format!("failed to get item from table {table}"))?
        .item()
        .map(|v| v.to_owned()))
}
