// src/logging_middleware.rs
//! Middleware that logs request and response bodies at debug level.
//! Validation endpoints are pure request/response, so the two bodies
//! together are a complete trace of a call.

use axum::{
    body::{to_bytes, Body, Bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::debug;

pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    let (parts, body) = request.into_parts();
    let bytes = buffer_body(body).await?;
    if !bytes.is_empty() {
        debug!(
            method = %parts.method,
            uri = %parts.uri,
            body = %render_body(&bytes),
            "request"
        );
    }
    let request = Request::from_parts(parts, Body::from(bytes));

    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let bytes = buffer_body(body).await?;
    if !bytes.is_empty() {
        debug!(
            status = %parts.status,
            body = %render_body(&bytes),
            "response"
        );
    }
    Ok(Response::from_parts(parts, Body::from(bytes)))
}

async fn buffer_body(body: Body) -> Result<Bytes, StatusCode> {
    to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Pretty-prints JSON bodies; anything else is logged as-is.
fn render_body(bytes: &Bytes) -> String {
    let raw = String::from_utf8_lossy(bytes);
    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(json) => serde_json::to_string_pretty(&json).unwrap_or_else(|_| raw.into_owned()),
        Err(_) => raw.into_owned(),
    }
}
