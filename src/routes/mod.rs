// src/routes/mod.rs
pub mod query;

use axum::{
    Router,
    routing::{get, post},
};
use query::{health_handler, query_handler};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/query", post(query_handler))
        .layer(TraceLayer::new_for_http())
}
