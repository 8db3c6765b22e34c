// Start of file: /src/routes/root.rs

/*
    * This file defines the root endpoint: one GET route at `/` that
    * returns the fixed greeting with status 200.
*/

use axum::{
    extract::State,
    response::Html,
    routing::get,
    Router,
};

use crate::config::state::AppState;

// The entire payload of this service. 64 ASCII bytes, served verbatim.
pub const GREETING: &str = "Hello, World! This is a Flask app running in a Docker container.";

// Stateless and idempotent; `Html` sets `text/html; charset=utf-8`.
#[tracing::instrument(skip(_state))]
pub async fn hello_world_handler(State(_state): State<AppState>) -> Html<&'static str> {
    Html(GREETING)
}

pub fn root_routes() -> Router<AppState> {
    Router::new().route("/", get(hello_world_handler))
}

// End of file: /src/routes/root.rs
