use anyhow::Context;
use aws_config::meta::region::RegionProviderChain;
use aws_config::Region;
use aws_lambda_events::event::s3::S3Event;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use shop_entrypoint::ShopEntrypoint;
use std::sync::Arc;

mod handler;
mod parse;
mod service;

#[tokio::main]
async fn main() -> Result<(), Error> {
    ShopEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let queue_url = std::env::var("SQS_QUEUE_URL").context("SQS_QUEUE_URL must be provided")?;

    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    let s3_client = service::s3::S3::new(aws_sdk_s3::Client::new(&config));
    let queue_client = service::queue::Queue::new(aws_sdk_sqs::Client::new(&config), queue_url);

    let shared_s3_client = Arc::new(s3_client);
    let shared_queue_client = Arc::new(queue_client);

    let func = service_fn(move |event: LambdaEvent<S3Event>| {
        let s3_client = shared_s3_client.clone();
        let queue_client = shared_queue_client.clone();

        async move { handler::handler(&s3_client, &queue_client, event).await }
    });

    run(func).await
}
