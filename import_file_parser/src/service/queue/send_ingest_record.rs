use anyhow::{Context, Result};
use aws_sdk_sqs as sqs;
use catalog_model::IngestQueueMessage;

pub async fn send_ingest_record(
    sqs_client: &sqs::Client,
    queue_url: &str,
    message: IngestQueueMessage,
) -> Result<String> {
    let message_str = serde_json::to_string(&message)?;

    let output = sqs_client
        .send_message()
        .queue_url(queue_url)
        .message_body(message_str)
        .send()
        .await
        .context("could not send message to ingest queue")?;

    output
        .message_id()
        .map(|id| id.to_string())
        .context("no message id returned")
}
