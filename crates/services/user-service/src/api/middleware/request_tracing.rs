//! Request id, request logging and timeout layers.

use std::time::Duration;

use axum::{body::Body, http::Request, Router};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::{Level, Span};

/// Header carrying the per-request identifier
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Wrap `router` so that every request:
/// - gets an `x-request-id` (kept when the client sent one) echoed on the response
/// - is logged on completion with status and latency
/// - is aborted with 408 once `request_timeout` elapses
pub fn with_request_layers(router: Router, request_timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            // Outside the timeout so a 408 still carries the id
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_request_span)
                    .on_response(
                        DefaultOnResponse::new()
                            .level(Level::INFO)
                            .latency_unit(LatencyUnit::Millis),
                    ),
            )
            .layer(TimeoutLayer::new(request_timeout)),
    )
}

fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}
