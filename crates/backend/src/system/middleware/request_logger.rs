use axum::body::Body;
use axum::http::{header, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::shared::format::format_size;

/// Logs method, path, status, latency and (when declared) response size.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let size = response
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<usize>().ok());
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();

    if status.is_server_error() {
        tracing::error!(%method, %path, status = status.as_u16(), elapsed_ms, size = %format_size(size), "request failed");
    } else {
        tracing::info!(%method, %path, status = status.as_u16(), elapsed_ms, size = %format_size(size), "request");
    }

    response
}
