use aws_lambda_events::event::sqs::{BatchItemFailure, SqsBatchResponse, SqsEvent, SqsMessage};
use catalog_model::{IngestQueueMessage, Product, ProductCreatedNotification, Stock};
use lambda_runtime::{Error, LambdaEvent};
use uuid::Uuid;

use crate::service;

enum Outcome {
    /// Product and stock committed (and notification attempted).
    Stored,
    /// Message was invalid and dropped with a warning; redelivery would not help.
    Skipped,
}

/// Handles one queue batch. Messages are processed independently and only
/// failed message ids are reported back, so the queue redelivers just those.
#[tracing::instrument(skip_all)]
pub async fn handler(
    db_client: &service::db::DB,
    notify_client: &service::notify::Notify,
    event: LambdaEvent<SqsEvent>,
) -> Result<SqsBatchResponse, Error> {
    tracing::trace!(
        records = event.payload.records.len(),
        "processing sqs batch"
    );

    let mut batch_item_failures = Vec::new();

    for record in event.payload.records {
        let message_id = record.message_id.clone().unwrap_or_default();

        if let Err(err) = process_message(db_client, notify_client, record).await {
            tracing::error!(error=?err, message_id=%message_id, "failed to process message");
            batch_item_failures.push(BatchItemFailure {
                item_identifier: message_id,
            });
        }
    }

    Ok(SqsBatchResponse {
        batch_item_failures,
    })
}

#[tracing::instrument(skip_all, fields(message_id=?record.message_id))]
async fn process_message(
    db_client: &service::db::DB,
    notify_client: &service::notify::Notify,
    record: SqsMessage,
) -> anyhow::Result<Outcome> {
    let body = record.body.as_deref().unwrap_or_default();

    let message = match serde_json::from_str::<IngestQueueMessage>(body) {
        Ok(message) => message,
        Err(err) => {
            tracing::warn!(error=?err, "dropping unparsable message body");
            return Ok(Outcome::Skipped);
        }
    };

    let row = message.record;

    if row.title.is_empty() {
        tracing::warn!(key=%message.key, "dropping row without a title");
        return Ok(Outcome::Skipped);
    }
    if row.price < 0.0 {
        tracing::warn!(key=%message.key, price=row.price, "dropping row with negative price");
        return Ok(Outcome::Skipped);
    }

    // Ids are always generated here; the queue contract carries none.
    let product = Product {
        id: Uuid::new_v4().to_string(),
        title: row.title,
        description: row.description,
        price: row.price,
    };
    let stock = Stock {
        product_id: product.id.clone(),
        count: row.count,
    };

    db_client.create_product(product.clone(), stock.clone()).await?;

    tracing::info!(product_id=%product.id, title=%product.title, "inserted product");

    // The write is already committed; a failed publish is logged and never
    // escalated into a retry of this message.
    let notification = ProductCreatedNotification::new(&product, &stock);
    if let Err(err) = notify_client.publish_product_created(notification).await {
        tracing::error!(error=?err, product_id=%product.id, "failed to publish notification");
    }

    Ok(Outcome::Stored)
}
