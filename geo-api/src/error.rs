use serde::Deserialize;
use std::fmt;

/// Errors that can occur when calling the analytics API.
#[derive(Debug, PartialEq, Clone)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, DNS).
    Transport(String),
    /// The backend answered with a non-success status. `message` is the
    /// `error` field of the body when one could be parsed.
    Status { status: u16, message: Option<String> },
    /// A success response whose body did not match the expected schema.
    Decode(String),
}

/// Body shape the backend uses for failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    /// Build a `Status` error from a failed response, extracting the
    /// structured `error` text if the body carries one.
    pub fn from_failed_body(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|m| !m.trim().is_empty());
        ApiError::Status { status, message }
    }

    /// Message to show the user: the backend's own text when present,
    /// otherwise the caller's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "Request failed: {}", e),
            ApiError::Status {
                status,
                message: Some(message),
            } => write!(f, "Backend returned {}: {}", status, message),
            ApiError::Status {
                status,
                message: None,
            } => write!(f, "Backend returned {}", status),
            ApiError::Decode(e) => write!(f, "Unexpected response shape: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
