// src/error.rs
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    // Availability errors carry self-descriptive detail strings, so Display
    // is the bare detail; the tool layer prefixes them with "Transcript Error: ".
    #[error("{0}")]
    NoTranscript(String),

    #[error("{0}")]
    TranscriptsDisabled(String),

    #[error("Tool not found")]
    ToolNotFound,

    #[error("Method not found")]
    MethodNotFound,

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl ServiceError {
    /// Transcript-availability failures are reported as successful tool
    /// results carrying an error-shaped text body, not as protocol errors.
    pub fn is_transcript_error(&self) -> bool {
        matches!(
            self,
            ServiceError::NoTranscript(_) | ServiceError::TranscriptsDisabled(_)
        )
    }

    pub fn to_jsonrpc_error(&self) -> serde_json::Value {
        let (code, message) = match self {
            ServiceError::InvalidParams(msg) => (-32602, msg.to_string()),
            ServiceError::ToolNotFound => (-32602, "Tool not found".to_string()),
            ServiceError::MethodNotFound => (-32601, "Method not found".to_string()),
            ServiceError::InternalError(msg) => (-32603, msg.to_string()),
            ServiceError::Other(msg) => (-32603, msg.to_string()),
            err => (-32603, err.to_string()),
        };

        json!({
            "code": code,
            "message": message,
        })
    }
}
