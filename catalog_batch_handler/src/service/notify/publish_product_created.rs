use anyhow::{Context, Result};
use aws_sdk_sns as sns;
use catalog_model::ProductCreatedNotification;

pub async fn publish_product_created(
    client: &sns::Client,
    topic_arn: &str,
    notification: ProductCreatedNotification,
) -> Result<()> {
    let message = serde_json::to_string(&notification)?;

    client
        .publish()
        .topic_arn(topic_arn)
        .subject(notification.subject())
        .message(message)
        .send()
        .await
        .context("could not publish product created notification")?;

    Ok(())
}
