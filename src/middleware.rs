//! Request logging middleware.

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use nanoid::nanoid;
use std::time::Instant;
use tracing::info;

use crate::colors::{colored_id, colored_status};

/// Middleware that logs each request and its outcome under a short colored ID
///
/// Logs the method and path on arrival, then the response status, the
/// redirect target if any, and the latency once the handler chain is done.
pub async fn log_requests(req: Request<Body>, next: Next) -> Response {
    let id = nanoid!(5);
    let start_time = Instant::now();
    info!("{} → {} {}", colored_id(&id), req.method(), req.uri().path());

    let response = next.run(req).await;

    let latency = start_time.elapsed();
    match response.headers().get(axum::http::header::LOCATION) {
        Some(location) => info!(
            "{} ← {} {:?} ({}ms)",
            colored_id(&id),
            colored_status(response.status()),
            location,
            latency.as_millis()
        ),
        None => info!(
            "{} ← {} ({}ms)",
            colored_id(&id),
            colored_status(response.status()),
            latency.as_millis()
        ),
    }
    response
}
