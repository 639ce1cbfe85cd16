//! Error types for classgate.
//!
//! A permission denial is never an error: every decision predicate answers
//! `false` for "no". Errors only occur at the string boundary (parsing role,
//! action, or scope names out of requests) and in the session registry.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("unknown action: {0}")]
    UnknownAction(String),
    #[error("unknown analytics scope: {0}")]
    UnknownScope(String),
    #[error("invalid token")]
    InvalidToken,
    #[error("token expired")]
    TokenExpired,
}

/// Result type alias for classgate operations
pub type Result<T> = std::result::Result<T, GateError>;
