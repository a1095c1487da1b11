use anyhow::Context;
use aws_config::meta::region::RegionProviderChain;
use aws_config::Region;
use aws_lambda_events::event::sqs::SqsEvent;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use shop_entrypoint::ShopEntrypoint;
use std::sync::Arc;

mod handler;
mod service;

#[tokio::main]
async fn main() -> Result<(), Error> {
    ShopEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let products_table =
        std::env::var("PRODUCTS_TABLE_NAME").context("PRODUCTS_TABLE_NAME must be provided")?;
    let stocks_table =
        std::env::var("STOCKS_TABLE_NAME").context("STOCKS_TABLE_NAME must be provided")?;
    let topic_arn = std::env::var("SNS_TOPIC_ARN").context("SNS_TOPIC_ARN must be provided")?;

    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    let db_client = service::db::DB::new(
        aws_sdk_dynamodb::Client::new(&config),
        products_table,
        stocks_table,
    );
    let notify_client =
        service::notify::Notify::new(aws_sdk_sns::Client::new(&config), topic_arn);

    let shared_db_client = Arc::new(db_client);
    let shared_notify_client = Arc::new(notify_client);

    let func = service_fn(move |event: LambdaEvent<SqsEvent>| {
        let db_client = shared_db_client.clone();
        let notify_client = shared_notify_client.clone();

        async move { handler::handler(&db_client, &notify_client, event).await }
    });

    run(func).await
}
