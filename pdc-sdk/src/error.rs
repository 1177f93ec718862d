// ABOUTME: Custom error types for the PDC SDK with user-friendly messages
// ABOUTME: Maps HTTP statuses and transport failures onto PDC-specific error variants

use crate::constants::errors;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PdcError {
    #[error("Authentication failed. Check your PDC token")]
    Auth,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Unexpected HTTP status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Rate limit exceeded. Please wait before making more requests")]
    RateLimit,

    #[error("Invalid API response format: {0}")]
    InvalidResponse(String),

    #[error("Timeout: Request took too long to complete")]
    Timeout,

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PdcError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            PdcError::Auth => Some(
                "Set a token for this server in the config file or the PDC_TOKEN environment variable",
            ),
            PdcError::NotFound(_) => Some("Check that the server URL points at the PDC API root"),
            PdcError::Network(_) => Some("Check your network connection and try again"),
            PdcError::RateLimit => Some("Wait a moment before making another request"),
            PdcError::Timeout => Some("Try again or check your network connection"),
            PdcError::Configuration(_) => {
                Some("Pass --server with a configured server name or an API root URL")
            }
            _ => None,
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PdcError::Network(_) | PdcError::Timeout | PdcError::RateLimit | PdcError::Server { .. }
        )
    }

    /// Classify a non-success HTTP response.
    pub fn from_status(status: u16, url: &str, body: &str) -> Self {
        let message = excerpt(body);
        match status {
            401 | 403 => PdcError::Auth,
            404 => PdcError::NotFound(url.to_string()),
            429 => PdcError::RateLimit,
            errors::SERVER_ERROR_MIN..=errors::SERVER_ERROR_MAX => {
                PdcError::Server { status, message }
            }
            _ => PdcError::Http { status, message },
        }
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(errors::MAX_BODY_EXCERPT) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}

impl From<reqwest::Error> for PdcError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PdcError::Timeout
        } else if err.is_decode() {
            PdcError::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            let url = err.url().map(|u| u.to_string()).unwrap_or_default();
            PdcError::from_status(status.as_u16(), &url, &err.to_string())
        } else {
            PdcError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PdcError {
    fn from(err: serde_json::Error) -> Self {
        PdcError::InvalidResponse(err.to_string())
    }
}

impl From<url::ParseError> for PdcError {
    fn from(err: url::ParseError) -> Self {
        PdcError::Configuration(format!("Invalid URL: {}", err))
    }
}
