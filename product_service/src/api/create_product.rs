use catalog_model::{merge_product_with_stock, CreateProductRequest};
use lambda_http::http::StatusCode;
use lambda_http::{Body, Request, Response};
use shop_http::{json_response, message_response};
use uuid::Uuid;

use super::PRODUCTS_ALLOW_METHODS;
use crate::service;

/// `POST /products`: validates the body, assigns a fresh id and writes the
/// product and its stock in one transaction.
#[tracing::instrument(skip_all)]
pub async fn handle_create_product(
    db_client: &service::db::DB,
    event: Request,
) -> Response<Body> {
    let request: CreateProductRequest = match serde_json::from_slice(event.body()) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(error=%err, "invalid request body");
            return message_response(
                StatusCode::BAD_REQUEST,
                PRODUCTS_ALLOW_METHODS,
                "Invalid product payload",
            );
        }
    };

    let id = Uuid::new_v4().to_string();
    let (product, stock) = match request.into_product_and_stock(id) {
        Ok(pair) => pair,
        Err(err) => {
            return message_response(StatusCode::BAD_REQUEST, PRODUCTS_ALLOW_METHODS, &err.to_string())
        }
    };

    if let Err(err) = db_client
        .create_product(product.clone(), stock.clone())
        .await
    {
        tracing::error!(error=?err, "error creating product");
        return message_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            PRODUCTS_ALLOW_METHODS,
            "Internal Server Error",
        );
    }

    let created = merge_product_with_stock(product, Some(stock));
    json_response(StatusCode::CREATED, PRODUCTS_ALLOW_METHODS, &created)
}
