use anyhow::{Context, Result};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;

/// One unpaginated scan call. The read API deliberately returns the whole
/// table in a single response; this is a documented scaling limit.
pub async fn scan_table(
    client: &Client,
    table: &str,
) -> Result<Vec<HashMap<String, AttributeValue>>> {
    let output = client
        .scan()
        .table_name(table)
        .send()
        .await
        .context(format!("failed to scan table {table}"))?;

    Ok(output.items.unwrap_or_default())
}
