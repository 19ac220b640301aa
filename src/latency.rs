//! Middleware that delays every request by a fixed amount.

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

/// Wait for `delay` before handling the request.
///
/// A zero delay passes the request straight through.
pub async fn simulate_latency(
    State(delay): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    next.run(request).await
}
