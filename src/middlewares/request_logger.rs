// Start of file: /src/middlewares/request_logger.rs

use std::{
    convert::Infallible,
    time::Instant,
};
use axum::{
    body::Body,
    http::{Method, Request, Response},
    middleware::Next,
};
use tracing::info;

// Logs one line per request: method, path, status, and elapsed time.
// The body is never touched, so the greeting goes out exactly as the
// handler produced it.
pub async fn request_logger(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    // Pull out the start time from request extensions (if present).
    // If it's missing for some reason, default to "now()".
    let start_time: Instant = req
        .extensions()
        .get::<Instant>()
        .copied()
        .unwrap_or_else(Instant::now);

    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    // Call the inner handler
    let response: Response<Body> = next.run(req).await;

    let duration_ms: u128 = start_time.elapsed().as_millis();

    info!(
        "{} {} -> {} ({} ms)",
        method,
        path,
        response.status().as_u16(),
        duration_ms
    );

    Ok(response)
}

// End of file: /src/middlewares/request_logger.rs
