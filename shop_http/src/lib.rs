//! Response helpers shared by the API Gateway handlers.
//!
//! Every response, success or error, carries the CORS headers, and error
//! bodies are always JSON with a single `message` field.

use lambda_http::http::{header, StatusCode};
use lambda_http::{Body, Response};
use serde::Serialize;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Content-Type,Authorization";

fn builder(status: StatusCode, allow_methods: &str) -> lambda_http::http::response::Builder {
    Response::builder()
        .status(status)
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .header("Access-Control-Allow-Methods", allow_methods)
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
}

/// Short-circuit response for an OPTIONS preflight. No body.
pub fn preflight(allow_methods: &str) -> Response<Body> {
    builder(StatusCode::OK, allow_methods)
        .body(Body::Empty)
        .expect("failed to render response")
}

/// A JSON response with CORS headers.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    allow_methods: &str,
    value: &T,
) -> Response<Body> {
    match serde_json::to_string(value) {
        Ok(body) => builder(status, allow_methods)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .expect("failed to render response"),
        Err(err) => {
            tracing::error!(error=?err, "failed to serialize response body");
            message_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                allow_methods,
                "Internal Server Error",
            )
        }
    }
}

/// A JSON `{"message": ...}` response, used for every error surface.
pub fn message_response(status: StatusCode, allow_methods: &str, message: &str) -> Response<Body> {
    let body = serde_json::json!({ "message": message }).to_string();
    builder(status, allow_methods)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .expect("failed to render response")
}

/// A plain-text response with CORS headers.
pub fn text_response(status: StatusCode, allow_methods: &str, body: String) -> Response<Body> {
    builder(status, allow_methods)
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from(body))
        .expect("failed to render response")
}
