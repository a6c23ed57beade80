// src/message.rs
use serde::{Deserialize, Serialize};

fn default_session_id() -> String {
    "default".to_string()
}

fn default_user_id() -> String {
    "guest".to_string()
}

/// The contract the frontend must follow: `text` is required, the rest
/// falls back to documented defaults.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub text: String,
    #[serde(default = "default_session_id")]
    pub session_id: String,
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub status: String,
    pub reply_text: String,
    pub data: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}
