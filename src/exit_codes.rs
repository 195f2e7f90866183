//! Exit code constants for the promptforge CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, misuse of the flow, bad config)
//! - 2: Validation failure (answers rejected by a question)
//! - 3: I/O failure (export, config or event log writes)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid configuration, or an operation called in the wrong phase.
pub const USER_ERROR: i32 = 1;

/// Validation failure: an answer was missing or rejected by its question.
pub const VALIDATION_FAILURE: i32 = 2;

/// I/O failure: a file could not be read or written.
pub const IO_FAILURE: i32 = 3;
