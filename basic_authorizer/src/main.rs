use anyhow::Context;
use aws_lambda_events::apigw::ApiGatewayCustomAuthorizerRequest;
use handler::Credentials;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use shop_entrypoint::ShopEntrypoint;
use std::sync::Arc;

mod handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    ShopEntrypoint::default().init();

    tracing::trace!("initiating lambda");

    let raw_credentials =
        std::env::var("AUTH_CREDENTIALS").context("AUTH_CREDENTIALS must be provided")?;
    let credentials = Credentials::parse(&raw_credentials)
        .context("AUTH_CREDENTIALS must be in user=pass format")?;

    let shared_credentials = Arc::new(credentials);

    let func = service_fn(move |event: LambdaEvent<ApiGatewayCustomAuthorizerRequest>| {
        let credentials = shared_credentials.clone();

        async move { handler::handler(&credentials, event).await }
    });

    run(func).await
}
