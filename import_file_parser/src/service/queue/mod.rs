mod send_ingest_record;

use anyhow::Result;
use aws_sdk_sqs as sqs;
use catalog_model::IngestQueueMessage;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockQueueClient as Queue;
#[cfg(not(test))]
pub use QueueClient as Queue;

#[derive(Clone, Debug)]
pub struct QueueClient {
    inner: sqs::Client,
    queue_url: String,
}

#[cfg_attr(test, automock)]
impl QueueClient {
    pub fn new(inner: sqs::Client, queue_url: String) -> Self {
        Self { inner, queue_url }
    }

    /// Sends one normalized row to the ingest queue. Returns the message id.
    #[tracing::instrument(skip(self, message))]
    pub async fn send_ingest_record(&self, message: IngestQueueMessage) -> Result<String> {
        send_ingest_record::send_ingest_record(&self.inner, &self.queue_url, message).await
    }
}
