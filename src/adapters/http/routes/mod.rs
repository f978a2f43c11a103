pub mod billing;

use axum::{Router, routing::get};

use crate::adapters::http::app_state::AppState;

pub const GREETING: &str = "Hello World!";

/// GET /
async fn index() -> &'static str {
    GREETING
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .merge(billing::router())
}
