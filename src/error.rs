//! Error types for the circulation desk

use thiserror::Error;

/// Desk operation error type.
///
/// Every failure a desk operation can report is one of these four kinds;
/// none of them is fatal and none propagates past the desk boundary. The
/// shell renders the message and the user re-invokes the action with
/// corrected input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeskError {
    /// A required text field was blank.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The referenced book or member does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The requested state transition collides with existing state
    /// (a book already on loan).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Fine or payment text did not parse as a decimal amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

impl DeskError {
    /// The bare display message, without the kind prefix `Display` adds.
    pub fn message(&self) -> &str {
        match self {
            DeskError::Validation(msg)
            | DeskError::NotFound(msg)
            | DeskError::Conflict(msg)
            | DeskError::InvalidAmount(msg) => msg,
        }
    }
}

/// Result type alias for desk operations
pub type DeskResult<T> = Result<T, DeskError>;
