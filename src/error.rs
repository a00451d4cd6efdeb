//! caseshift Error Types
//!
//! Centralized error handling for the conversion workflow.

use thiserror::Error;

/// Central error type for caseshift
#[derive(Error, Debug)]
pub enum CaseError {
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for caseshift operations
pub type CaseResult<T> = Result<T, CaseError>;

impl From<arboard::Error> for CaseError {
    fn from(err: arboard::Error) -> Self {
        CaseError::Clipboard(err.to_string())
    }
}
