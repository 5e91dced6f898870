//! API error type

use serde::Deserialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response (network, CORS, aborted)
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-success HTTP status; `message` comes from the body when present
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not logged in")]
    Unauthenticated,
}

/// `{ "message": "..." }` error envelope
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiError {
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty());
        ApiError::Status { status, message }
    }

    /// One-line text shown to the user; the API's own message wins.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status { message: Some(m), .. } => m.clone(),
            ApiError::Unauthenticated => "Please log in first".to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_from_body() {
        let err = ApiError::from_status(400, r#"{"error":"Bad Request","message":"Title is required"}"#);
        assert_eq!(err.user_message("Failed"), "Title is required");
        assert_eq!(err.to_string(), "HTTP 400: Title is required");
    }

    #[test]
    fn test_status_without_message_uses_fallback() {
        let err = ApiError::from_status(500, "<html>oops</html>");
        assert_eq!(err, ApiError::Status { status: 500, message: None });
        assert_eq!(err.user_message("Failed to add category!"), "Failed to add category!");
    }
}
