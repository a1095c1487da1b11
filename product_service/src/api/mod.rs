mod create_product;
mod get_product;
mod list_products;

use lambda_http::http::{Method, StatusCode};
use lambda_http::{Body, Request, Response};
use shop_http::{message_response, preflight};

use crate::service;

pub const PRODUCTS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const PRODUCT_ALLOW_METHODS: &str = "GET, OPTIONS";

/// Routes one API Gateway request. Preflight is answered before any
/// business logic runs.
#[tracing::instrument(skip(db_client, event), fields(method=%event.method(), path=%event.uri().path()))]
pub async fn router(
    db_client: &service::db::DB,
    event: Request,
) -> Result<Response<Body>, lambda_http::Error> {
    let method = event.method().clone();
    let path = event.uri().path().to_string();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    let response = match (method, segments.as_slice()) {
        (Method::OPTIONS, ["products"]) => preflight(PRODUCTS_ALLOW_METHODS),
        (Method::OPTIONS, _) => preflight(PRODUCT_ALLOW_METHODS),
        (Method::GET, ["products"]) => list_products::handle_list_products(db_client).await,
        (Method::POST, ["products"]) => {
            create_product::handle_create_product(db_client, event).await
        }
        (Method::GET, ["products", product_id]) => {
            get_product::handle_get_product(db_client, product_id).await
        }
        _ => message_response(StatusCode::NOT_FOUND, PRODUCT_ALLOW_METHODS, "Not Found"),
    };

    Ok(response)
}
