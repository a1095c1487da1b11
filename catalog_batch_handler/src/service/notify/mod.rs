mod publish_product_created;

use anyhow::Result;
use aws_sdk_sns as sns;
use catalog_model::ProductCreatedNotification;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockNotifyClient as Notify;
#[cfg(not(test))]
pub use NotifyClient as Notify;

#[derive(Clone, Debug)]
pub struct NotifyClient {
    inner: sns::Client,
    topic_arn: String,
}

#[cfg_attr(test, automock)]
impl NotifyClient {
    pub fn new(inner: sns::Client, topic_arn: String) -> Self {
        Self { inner, topic_arn }
    }

    /// Publishes one product-created notification with a subject naming the
    /// product. Best effort; the caller never retries or rolls back on failure.
    #[tracing::instrument(skip(self, notification))]
    pub async fn publish_product_created(
        &self,
        notification: ProductCreatedNotification,
    ) -> Result<()> {
        publish_product_created::publish_product_created(&self.inner, &self.topic_arn, notification)
            .await
    }
}
