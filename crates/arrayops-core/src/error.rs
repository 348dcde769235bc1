//! Error types for the operation core
//!
//! All fallible operations return `Result<T, Error>`.
//! Precondition failures always carry the message naming the failed
//! condition, so callers can surface it verbatim.

/// Operation core error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An operation was executed on input violating its precondition
    #[error("precondition failed: {0}")]
    PreconditionViolation(String),

    /// An operation produced a result violating its postcondition
    #[error("postcondition failed: {0}")]
    PostconditionViolation(String),

    /// Input text contains a token that is not a signed decimal integer
    #[error("parse error: {0}")]
    ParseError(String),

    /// Arithmetic overflow during execution (checked 64-bit addition)
    #[error("arithmetic overflow: {0}")]
    Overflow(String),
}

/// Result type alias for operation core functions
pub type Result<T> = std::result::Result<T, Error>;
