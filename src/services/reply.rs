// src/services/reply.rs

/// Mock reply while the real AI logic is being connected. The user's text
/// is substituted verbatim, embedded quotes and whitespace included.
pub fn generate_reply(text: &str) -> String {
    format!(
        "I received your request: '{text}'. The AI logic is currently being connected."
    )
}
