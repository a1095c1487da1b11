use catalog_model::merge_products_with_stocks;
use lambda_http::http::StatusCode;
use lambda_http::{Body, Response};
use shop_http::{json_response, message_response};

use super::PRODUCTS_ALLOW_METHODS;
use crate::service;

/// `GET /products`: full scan of both tables, merged in memory. A product
/// without a stock row gets count 0.
#[tracing::instrument(skip(db_client))]
pub async fn handle_list_products(db_client: &service::db::DB) -> Response<Body> {
    let (products, stocks) = tokio::join!(db_client.list_products(), db_client.list_stocks());

    match (products, stocks) {
        (Ok(products), Ok(stocks)) => {
            let merged = merge_products_with_stocks(products, stocks);
            json_response(StatusCode::OK, PRODUCTS_ALLOW_METHODS, &merged)
        }
        (Err(err), _) | (_, Err(err)) => {
            tracing::error!(error=?err, "error fetching products");
            message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                PRODUCTS_ALLOW_METHODS,
                "Internal Server Error",
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_model::{AvailableProduct, Product, Stock};

    fn product(id: &str, title: &str) -> Product {
        Product {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            price: 10.0,
        }
    }

    fn body_json(response: &Response<Body>) -> serde_json::Value {
        match response.body() {
            Body::Text(text) => serde_json::from_str(text).unwrap(),
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[tokio::test]
    async fn lists_every_product_merged_with_its_count() {
        let mut db_client = service::db::DB::default();
        db_client
            .expect_list_products()
            .returning(|| Ok(vec![product("p1", "Laptop"), product("p2", "Mouse")]));
        db_client.expect_list_stocks().returning(|| {
            Ok(vec![Stock {
                product_id: "p1".to_string(),
                count: 5,
            }])
        });

        let response = handle_list_products(&db_client).await;
        assert_eq!(response.status(), StatusCode::OK);

        let items: Vec<AvailableProduct> = serde_json::from_value(body_json(&response)).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].count, 5);
        assert_eq!(items[1].count, 0);
    }

    #[tokio::test]
    async fn storage_failure_is_a_generic_server_error() {
        let mut db_client = service::db::DB::default();
        db_client
            .expect_list_products()
            .returning(|| Err(anyhow::anyhow!("scan failed")));
        db_client.expect_list_stocks().returning(|| Ok(vec![]));

        let response = handle_list_products(&db_client).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(&response)["message"], "Internal Server Error");
    }
}
