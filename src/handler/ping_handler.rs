use axum::response::IntoResponse;

/// Body returned for every request on `/`.
pub const PAYLOAD: &str = "pong";

// Request is never inspected, so the handler takes no extractors.
// Status and content type are whatever axum picks for a static str.
pub async fn ping() -> impl IntoResponse {
    PAYLOAD
}
