//! Gateway Error Types
//!
//! Error handling for the sports data gateway.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::fmt;

use crate::routes::Provider;

/// Main error type for gateway operations
#[derive(Debug)]
pub enum GatewayError {
    /// Configuration errors (missing env vars, invalid listen address, etc.)
    Config(String),

    /// Upstream provider responded with a non-200 status
    Upstream {
        provider: Provider,
        status: StatusCode,
    },

    /// Transport failure reaching the upstream (DNS, connect, timeout, body read)
    Transport(String),

    /// Generic internal error
    Internal(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GatewayError::Upstream { provider, status } => {
                write!(f, "{} upstream responded with status {}", provider, status)
            }
            GatewayError::Transport(msg) => write!(f, "Transport error: {}", msg),
            GatewayError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Transport(format!("Request timeout: {}", err))
        } else if err.is_connect() {
            GatewayError::Transport(format!("Connection failed: {}", err))
        } else if err.is_decode() {
            GatewayError::Transport(format!("Failed to read response: {}", err))
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

impl IntoResponse for GatewayError {
    /// Render the error the way the inbound API surfaces it: the upstream's
    /// status with a fixed provider label for `Upstream`, 500 with the error
    /// description for everything else.
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            GatewayError::Upstream { provider, status } => {
                (status, provider.error_label().to_string())
            }
            GatewayError::Transport(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            GatewayError::Config(msg) | GatewayError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;
