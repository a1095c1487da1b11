mod put_presigned_url;

use anyhow::Result;
use aws_sdk_s3 as s3;
#[allow(unused_imports)]
use mockall::automock;

#[cfg(test)]
pub use MockS3Client as S3;
#[cfg(not(test))]
pub use S3Client as S3;

#[derive(Clone, Debug)]
pub struct S3Client {
    /// Inner S3 client
    inner: s3::Client,
}

#[cfg_attr(test, automock)]
impl S3Client {
    pub fn new(inner: s3::Client) -> Self {
        Self { inner }
    }

    /// Generates a presigned PUT URL granting write access to exactly one key.
    #[tracing::instrument(skip(self))]
    pub async fn put_presigned_url(
        &self,
        bucket: &str,
        key: &str,
        content_type: &str,
        duration_seconds: u64,
    ) -> Result<String> {
        put_presigned_url::put_presigned_url(&self.inner, bucket, key, content_type, duration_seconds)
            .await
    }
}
