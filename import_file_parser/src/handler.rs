use aws_lambda_events::event::s3::{S3Event, S3EventRecord};
use catalog_model::{IngestQueueMessage, UPLOAD_KEY_PREFIX};
use futures::future::join_all;
use lambda_runtime::{Error, LambdaEvent};

use crate::parse;
use crate::service;

/// Handles one object-creation notification batch. Each record is processed
/// independently; a failure in one does not abort the others, but any
/// failure makes the invocation fail so the notification is retried.
#[tracing::instrument(skip_all)]
pub async fn handler(
    s3_client: &service::s3::S3,
    queue_client: &service::queue::Queue,
    event: LambdaEvent<S3Event>,
) -> Result<(), Error> {
    tracing::trace!("processing s3 event");

    let mut failed_objects = 0usize;

    for record in event.payload.records {
        if let Err(err) = process_record(s3_client, queue_client, record).await {
            tracing::error!(error=?err, "failed to process object notification");
            failed_objects += 1;
        }
    }

    if failed_objects > 0 {
        return Err(Error::from(format!(
            "{failed_objects} object notification(s) failed"
        )));
    }

    Ok(())
}

#[tracing::instrument(skip_all)]
async fn process_record(
    s3_client: &service::s3::S3,
    queue_client: &service::queue::Queue,
    record: S3EventRecord,
) -> anyhow::Result<()> {
    let bucket = record.s3.bucket.name.unwrap_or_default();
    let key = record.s3.object.key.unwrap_or_default();

    // S3 notifications encode the key with '+' for spaces
    let key = match urlencoding::decode(&key.replace('+', " ")) {
        Ok(decoded) => decoded.to_string(),
        Err(err) => {
            tracing::warn!(error=?err, key=%key, "unable to decode key, skipping");
            return Ok(());
        }
    };

    if !key.starts_with(UPLOAD_KEY_PREFIX) {
        tracing::trace!(key=%key, "skipping object outside the upload prefix");
        return Ok(());
    }

    tracing::info!(bucket=%bucket, key=%key, "processing uploaded file");

    let bytes = s3_client.get_object_bytes(&bucket, &key).await?;
    let rows = parse::parse_catalog_rows(&bytes)?;

    tracing::info!(rows = rows.len(), key=%key, "parsed catalog rows");

    // Rows are enqueued independently; one failed send is logged and does
    // not stop the rest, so partial emission is possible and not rolled back.
    let sends = rows.into_iter().map(|row| {
        let message = IngestQueueMessage {
            bucket: bucket.clone(),
            key: key.clone(),
            record: row,
        };
        async move { queue_client.send_ingest_record(message).await }
    });

    for result in join_all(sends).await {
        match result {
            Ok(message_id) => tracing::trace!(message_id=%message_id, "enqueued row"),
            Err(err) => tracing::error!(error=?err, "failed to enqueue row"),
        }
    }

    Ok(())
}
