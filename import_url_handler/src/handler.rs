use catalog_model::UPLOAD_KEY_PREFIX;
use lambda_http::http::{Method, StatusCode};
use lambda_http::{Body, Request, RequestExt, Response};
use shop_http::{message_response, preflight, text_response};

use crate::service;

const ALLOW_METHODS: &str = "GET, OPTIONS";
const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// How long an issued upload grant stays valid. The grant is not tracked
/// after issuance; there is no record of whether it was consumed.
pub const UPLOAD_URL_EXPIRY_SECONDS: u64 = 300;

/// Handles `GET /import?name=<file>&contentType=<mime>`: issues a
/// time-limited write URL for one object under the upload prefix.
#[tracing::instrument(skip(s3_client, event))]
pub async fn handler(
    s3_client: &service::s3::S3,
    upload_bucket: &str,
    event: Request,
) -> Result<Response<Body>, lambda_http::Error> {
    if event.method() == Method::OPTIONS {
        return Ok(preflight(ALLOW_METHODS));
    }

    let params = event.query_string_parameters();

    let file_name = match params.first("name") {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            tracing::warn!("no file name provided in query parameters");
            return Ok(message_response(
                StatusCode::BAD_REQUEST,
                ALLOW_METHODS,
                "File name is required",
            ));
        }
    };

    let content_type = params
        .first("contentType")
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_CONTENT_TYPE)
        .to_string();

    let object_key = format!("{UPLOAD_KEY_PREFIX}{file_name}");

    tracing::info!(key = %object_key, content_type = %content_type, "issuing upload url");

    match s3_client
        .put_presigned_url(
            upload_bucket,
            &object_key,
            &content_type,
            UPLOAD_URL_EXPIRY_SECONDS,
        )
        .await
    {
        Ok(signed_url) => Ok(text_response(StatusCode::OK, ALLOW_METHODS, signed_url)),
        Err(err) => {
            tracing::error!(error=?err, "error generating signed url");
            Ok(message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                ALLOW_METHODS,
                "Internal Server Error",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_http::http;
    use std::collections::HashMap;

    fn get_request(query: &[(&str, &str)]) -> Request {
        let params: HashMap<String, Vec<String>> = query
            .iter()
            .map(|(k, v)| (k.to_string(), vec![v.to_string()]))
            .collect();
        http::Request::builder()
            .method(Method::GET)
            .uri("https://example.test/import")
            .body(Body::Empty)
            .unwrap()
            .with_query_string_parameters(params)
    }

    #[tokio::test]
    async fn issues_signed_url_under_upload_prefix() {
        let mut s3_client = service::s3::S3::default();
        s3_client
            .expect_put_presigned_url()
            .withf(|_bucket, key, content_type, expiry| {
                key == "uploaded/items.csv" && content_type == "text/csv" && *expiry == 300
            })
            .returning(|_, _, _, _| Ok("https://signed.example/put".to_string()));

        let response = handler(
            &s3_client,
            "shop-uploads",
            get_request(&[("name", "items.csv"), ("contentType", "text/csv")]),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "text/plain"
        );
        match response.body() {
            Body::Text(url) => assert_eq!(url, "https://signed.example/put"),
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[tokio::test]
    async fn content_type_defaults_to_octet_stream() {
        let mut s3_client = service::s3::S3::default();
        s3_client
            .expect_put_presigned_url()
            .withf(|_, _, content_type, _| content_type == "application/octet-stream")
            .returning(|_, _, _, _| Ok("https://signed.example/put".to_string()));

        let response = handler(&s3_client, "shop-uploads", get_request(&[("name", "x.csv")]))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_name_is_a_client_error() {
        let s3_client = service::s3::S3::default();

        let response = handler(&s3_client, "shop-uploads", get_request(&[]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(response
            .headers()
            .contains_key("Access-Control-Allow-Origin"));
    }

    #[tokio::test]
    async fn presign_failure_surfaces_as_generic_server_error() {
        let mut s3_client = service::s3::S3::default();
        s3_client
            .expect_put_presigned_url()
            .returning(|_, _, _, _| Err(anyhow::anyhow!("presign exploded")));

        let response = handler(&s3_client, "shop-uploads", get_request(&[("name", "x.csv")]))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        match response.body() {
            Body::Text(body) => assert!(!body.contains("exploded")),
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[tokio::test]
    async fn options_preflight_short_circuits() {
        let s3_client = service::s3::S3::default();
        let request = http::Request::builder()
            .method(Method::OPTIONS)
            .uri("https://example.test/import")
            .body(Body::Empty)
            .unwrap();

        let response = handler(&s3_client, "shop-uploads", request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(matches!(response.body(), Body::Empty));
    }
}
