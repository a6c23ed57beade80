use axum::Json;

use crate::message::{HealthResponse, QueryRequest, QueryResponse};
use crate::services::reply::generate_reply;

/// Checks if the server is running.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "property-ai-core",
    })
}

/// Receives user text and returns the simulated AI response. The `Json`
/// extractor rejects bodies missing `text` before this runs.
pub async fn query_handler(Json(payload): Json<QueryRequest>) -> Json<QueryResponse> {
    tracing::info!(text = %payload.text, "received query");

    // TODO: Connect this to the real AI logic once that component exists.
    // For now the reply is simulated so the frontend can be built against it.
    let reply_text = generate_reply(&payload.text);

    Json(QueryResponse {
        status: "success".to_string(),
        reply_text,
        data: None,
    })
}
