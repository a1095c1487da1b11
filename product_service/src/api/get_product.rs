use catalog_model::merge_product_with_stock;
use lambda_http::http::StatusCode;
use lambda_http::{Body, Response};
use shop_http::{json_response, message_response};

use super::PRODUCT_ALLOW_METHODS;
use crate::service;

/// `GET /products/{productId}`: exact key lookup, then a second lookup for
/// the paired stock record with count defaulting to 0.
#[tracing::instrument(skip(db_client))]
pub async fn handle_get_product(db_client: &service::db::DB, product_id: &str) -> Response<Body> {
    let product = match db_client.get_product(product_id).await {
        Ok(Some(product)) => product,
        Ok(None) => {
            return message_response(
                StatusCode::NOT_FOUND,
                PRODUCT_ALLOW_METHODS,
                "Product not found",
            )
        }
        Err(err) => {
            tracing::error!(error=?err, "error fetching product");
            return message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                PRODUCT_ALLOW_METHODS,
                "Internal Server Error",
            );
        }
    };

    match db_client.get_stock(product_id).await {
        Ok(stock) => {
            let merged = merge_product_with_stock(product, stock);
            json_response(StatusCode::OK, PRODUCT_ALLOW_METHODS, &merged)
        }
        Err(err) => {
            tracing::error!(error=?err, "error fetching stock");
            message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                PRODUCT_ALLOW_METHODS,
                "Internal Server Error",
            )
        }
    }
}
