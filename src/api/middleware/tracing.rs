//! HTTP request/response tracing middleware.

use axum::{extract::Request, http::Response};
use std::time::Duration;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::TraceLayer;
use tracing::{Span, info_span};

/// Creates a tracing middleware for HTTP requests.
///
/// Opens an `INFO` span per request carrying the method and path only; query
/// strings are left out of the logs. Responses are logged with their status
/// and latency, and 5xx responses are reported as failures by the default
/// classifier.
///
/// # Example Logs
///
/// ```text
/// INFO request{method=POST path=/}: status=200 latency_ms=3
/// INFO request{method=GET path=/AbC234}: status=302 latency_ms=1
/// ```
pub fn layer() -> TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    impl Fn(&Request) -> Span + Clone,
    (),
    impl Fn(&Response<axum::body::Body>, Duration, &Span) + Clone,
> {
    TraceLayer::new_for_http()
        .make_span_with(|request: &Request| {
            info_span!(
                "request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        })
        .on_request(())
        .on_response(
            |response: &Response<axum::body::Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis() as u64,
                    "response"
                );
            },
        )
}
