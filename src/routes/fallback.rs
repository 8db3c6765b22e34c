// Start of file: /src/routes/fallback.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

// Any path other than `/` lands here. Plain 404, no body contract.
pub async fn fallback_handler() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

// End of file: /src/routes/fallback.rs
