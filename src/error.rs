use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AltTextError {
    #[error("Missing base64 or mimeType")]
    MissingInput,
    #[error("unsupported image: {0}")]
    UnsupportedImage(String),
    #[error(
        "Ollama is not reachable ({0}). Please start Ollama and ensure a vision model is installed (e.g., `ollama pull llava`)"
    )]
    EndpointUnavailable(String),
    #[error("Ollama API error: {0}")]
    EndpointError(String),
    #[error("No content returned from Ollama")]
    EmptyResponse,
    #[error("Failed to parse JSON: {0}")]
    MalformedResponse(String),
    #[error("Invalid response structure: {0}")]
    InvalidShape(String),
}

impl AltTextError {
    /// Only unparsable model output earns another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AltTextError::MalformedResponse(_))
    }
}

impl IntoResponse for AltTextError {
    fn into_response(self) -> Response {
        match self {
            AltTextError::MissingInput => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            AltTextError::UnsupportedImage(_) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            other => internal_error(other.to_string()),
        }
    }
}

/// 500 body for anything the handlers did not expect.
pub fn internal_error(message: impl Into<String>) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Failed to generate alt text",
            "message": message.into(),
        })),
    )
        .into_response()
}
