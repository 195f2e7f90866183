//! Error types for promptforge.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Rejected answers are not errors: see [`crate::answer::Rejection`].

use crate::exit_codes;
use crate::flow::Phase;
use thiserror::Error;

/// Main error type for promptforge operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForgeError {
    /// A flow operation was called in a phase that does not permit it.
    ///
    /// The flow state is left unchanged.
    #[error("cannot {operation} while the flow is in the {phase} phase")]
    InvalidTransition {
        operation: &'static str,
        phase: Phase,
    },

    /// The current question was requested while no question is active.
    #[error("no current question: the flow is in the {phase} phase")]
    OutOfRange { phase: Phase },

    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// An answer set failed validation against the question list.
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// A file could not be read or written.
    #[error("I/O failed: {0}")]
    IoError(String),
}

impl ForgeError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ForgeError::InvalidTransition { .. } => exit_codes::USER_ERROR,
            ForgeError::OutOfRange { .. } => exit_codes::USER_ERROR,
            ForgeError::UserError(_) => exit_codes::USER_ERROR,
            ForgeError::ValidationError(_) => exit_codes::VALIDATION_FAILURE,
            ForgeError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for promptforge operations.
pub type Result<T> = std::result::Result<T, ForgeError>;
