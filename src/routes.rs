use crate::handler::ping_handler::ping;
use axum::{Router, routing::any};

/// Single route on `/` accepting every method.
/// Other paths fall through to axum's default 404.
pub fn create_router() -> Router {
    Router::new().route("/", any(ping))
}
