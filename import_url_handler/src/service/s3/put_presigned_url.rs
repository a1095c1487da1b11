use anyhow::{Context, Result};
use aws_sdk_s3 as s3;
use aws_sdk_s3::presigning::PresigningConfig;
use std::time::Duration;

/// Generate a URL for a presigned PUT request. Does not check whether the
/// key already exists, so a consumed grant can silently overwrite.
pub async fn put_presigned_url(
    client: &s3::Client,
    bucket: &str,
    key: &str,
    content_type: &str,
    duration_seconds: u64,
) -> Result<String> {
    let expires_in = Duration::from_secs(duration_seconds);
    let presigned_request = client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type(content_type)
        .presigned(PresigningConfig::expires_in(expires_in)?)
        .await
        .context(format!("could not presign put for key {key}"))?;

    Ok(presigned_request.uri().to_string())
}
