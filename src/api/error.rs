//! Error types for the network access layer.
//!
//! Provides structured error classification for failed fetches and a short
//! user-facing message for each kind.

use reqwest::StatusCode;
use thiserror::Error;

/// Longest response body excerpt kept on a status error.
const BODY_SNIPPET_LIMIT: usize = 200;

/// Errors that can occur while fetching records.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Base URL or endpoint does not form a valid URL
    #[error("Invalid backend URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Could not reach the backend
    #[error("Connection failed to '{url}': {source}")]
    Connect {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Request exceeded the configured total timeout
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// Backend answered with a non-success status
    #[error("Backend returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Success status but the body is not a JSON array of records
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Any other transport failure (reading the body, redirects, ...)
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),
}

impl NetworkError {
    /// Build a status error, keeping only a short excerpt of the body.
    pub fn status(status: StatusCode, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        let trimmed = text.trim();
        let body = match trimmed.char_indices().nth(BODY_SNIPPET_LIMIT) {
            Some((cut, _)) => format!("{}...", &trimmed[..cut]),
            None => trimmed.to_string(),
        };
        NetworkError::Status { status, body }
    }

    /// Short classification string, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            NetworkError::InvalidUrl { .. } => "invalid_url",
            NetworkError::Connect { .. } => "connect",
            NetworkError::Timeout { .. } => "timeout",
            NetworkError::Status { .. } => "status",
            NetworkError::Decode(_) => "decode",
            NetworkError::Transport(_) => "transport",
        }
    }

    /// User-friendly headline for the notification popup.
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::InvalidUrl { .. } => "Backend URL is invalid",
            NetworkError::Connect { .. } => "Could not reach the backend",
            NetworkError::Timeout { .. } => "The backend took too long to answer",
            NetworkError::Status { .. } => "The backend rejected the request",
            NetworkError::Decode(_) => "The backend sent data in an unexpected format",
            NetworkError::Transport(_) => "Lost connection to the backend",
        }
    }
}
