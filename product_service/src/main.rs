use aws_config::meta::region::RegionProviderChain;
use aws_config::Region;
use lambda_http::{run, service_fn, Error, Request};
use shop_entrypoint::ShopEntrypoint;
use std::sync::Arc;

mod api;
mod config;
mod service;

#[tokio::main]
async fn main() -> Result<(), Error> {
    ShopEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let config = config::Config::from_env()?;

    let region_provider = RegionProviderChain::default_provider().or_else(Region::new("us-east-1"));
    let db_client = service::db::DB::new(
        aws_sdk_dynamodb::Client::new(
            &aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(region_provider)
                .load()
                .await,
        ),
        config.products_table,
        config.stocks_table,
    );

    let shared_db_client = Arc::new(db_client);

    let func = service_fn(move |event: Request| {
        let db_client = shared_db_client.clone();

        async move { api::router(&db_client, event).await }
    });

    run(func).await
}
