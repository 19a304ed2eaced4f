//! Error types for request handling
//!
//! Separates the two failure families a caller can observe:
//! - Caller input errors (malformed JSON, unknown tool, empty text, bad audience)
//! - Engine failures (configuration or invariant defects)

use checklist_core::EngineError;
use serde::{Deserialize, Serialize};

/// Errors while handling a tool call
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// Request body is not valid JSON or has the wrong shape
    #[error("malformed request: {0}")]
    Malformed(String),

    /// Tool name is not served here
    #[error("unknown tool: '{0}'")]
    UnknownTool(String),

    /// Text is empty after trimming
    #[error("text must not be empty")]
    EmptyText,

    /// Audience other than `agent`
    #[error("unsupported audience: '{0}' (expected 'agent')")]
    InvalidAudience(String),

    /// Engine failed
    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl RequestError {
    /// Check if the caller is at fault
    #[inline]
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        !matches!(self, Self::Engine(_))
    }

    /// HTTP-style status code
    #[inline]
    #[must_use]
    pub fn status_code(&self) -> u16 {
        if self.is_caller_error() {
            400
        } else {
            500
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

/// Serialized failure body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error details
    pub error: ErrorBody,
}

/// Status and human-readable detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// HTTP-style status code
    pub status: u16,
    /// Error message
    pub detail: String,
}

impl ErrorResponse {
    /// Create response with status and detail
    #[must_use]
    pub fn new(status: u16, detail: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                status,
                detail: detail.into(),
            },
        }
    }
}

impl From<&RequestError> for ErrorResponse {
    fn from(err: &RequestError) -> Self {
        Self::new(err.status_code(), err.to_string())
    }
}
