//! Request tracing for the public resolver and the management API.

use tower_http::LatencyUnit;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub type HttpTraceLayer = TraceLayer<SharedClassifier<ServerErrorsAsFailures>>;

/// Builds the HTTP trace layer.
///
/// Every request gets an `INFO` span carrying method, URI and version; the
/// response is logged with status and latency in milliseconds. 5xx responses
/// are additionally reported at `ERROR`.
///
/// ```text
/// INFO request{method=GET uri=/promo version=HTTP/1.1}: finished processing request latency=3 ms status=307
/// INFO request{method=POST uri=/api/links version=HTTP/1.1}: finished processing request latency=9 ms status=201
/// ```
///
/// Headers are never recorded, so the admin passkey stays out of the logs.
pub fn layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(
            DefaultMakeSpan::new()
                .level(Level::INFO)
                .include_headers(false),
        )
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
        .on_failure(
            DefaultOnFailure::new()
                .level(Level::ERROR)
                .latency_unit(LatencyUnit::Millis),
        )
}
