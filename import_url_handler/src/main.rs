use anyhow::Context;
use aws_config::meta::region::RegionProviderChain;
use aws_config::Region;
use lambda_http::{run, service_fn, Error, Request};
use shop_entrypoint::ShopEntrypoint;
use std::sync::Arc;

mod handler;
mod service;

#[tokio::main]
async fn main() -> Result<(), Error> {
    ShopEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let upload_bucket =
        std::env::var("UPLOAD_BUCKET_NAME").context("UPLOAD_BUCKET_NAME must be provided")?;

    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    let s3_client = service::s3::S3::new(aws_sdk_s3::Client::new(
        &aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await,
    ));

    let shared_s3_client = Arc::new(s3_client);
    let shared_bucket = Arc::new(upload_bucket);

    let func = service_fn(move |event: Request| {
        let s3_client = shared_s3_client.clone();
        let bucket = shared_bucket.clone();

        async move { handler::handler(&s3_client, &bucket, event).await }
    });

    run(func).await
}
