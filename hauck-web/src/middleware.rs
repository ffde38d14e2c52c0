//! Request tracing middleware.

use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use hauck_common::logging::trace_id_from_headers;
use std::time::Instant;
use tracing::Instrument;

/// Attach a trace ID span to every request and echo the ID back in the
/// `X-Trace-Id` response header.
pub async fn trace_request(request: Request, next: Next) -> Response {
    let trace_id = trace_id_from_headers(request.headers());
    let span = hauck_common::request_span!(
        "http_request",
        trace_id,
        method = %request.method(),
        path = %request.uri().path()
    );

    let start = Instant::now();
    let mut response = next.run(request).instrument(span.clone()).await;
    let status = response.status();

    span.in_scope(|| {
        tracing::info!(
            status = status.as_u16(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Request completed"
        );
    });

    if let Ok(value) = HeaderValue::from_str(&trace_id) {
        response.headers_mut().insert("X-Trace-Id", value);
    }

    response
}
