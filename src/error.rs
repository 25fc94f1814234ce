//! Error types for OBJ reading and writing
//!
//! All errors include error codes for categorization. Validation messages are
//! part of the crate's external contract: callers (and the test suite) match
//! on their exact text.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! - **E1xxx**: I/O errors on the underlying stream
//! - **E2xxx**: malformed text (line-qualified)
//! - **E3xxx**: invariant violations and counter mismatches

use std::io;
use thiserror::Error;

/// Result type for OBJ operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when reading or writing OBJ data
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error on the caller-provided stream
    ///
    /// **Error Code**: E1001
    ///
    /// The stream itself is owned by the caller; this library never opens or
    /// closes it.
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed text encountered while parsing
    ///
    /// **Error Code**: E2001
    ///
    /// Carries the 1-based number of the line the error originated on.
    /// Raised for non-numeric tokens, bad index groups and faces with too
    /// few corners. Fatal: parsing stops at the first such line.
    #[error("[E2001] parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number of the offending input line
        line: usize,
        /// Description of what failed to parse
        message: String,
    },

    /// A structural invariant was violated
    ///
    /// **Error Code**: E3001
    ///
    /// Raised eagerly at channel construction (bad arity, non-multiple
    /// counts, index range violations) or during streaming (out-of-range
    /// texture coordinate components). The carried message is the exact
    /// contract text asserted by the test suite.
    #[error("[E3001] validation error: {0}")]
    Validation(String),

    /// Post-call counters do not match the caller's accumulated structure
    ///
    /// **Error Code**: E3002
    ///
    /// Never raised by the read/write engine itself; produced by the
    /// [`reconcile`](crate::ReadResult::reconcile) helpers that callers are
    /// expected to run after a read or write completes.
    #[error("[E3002] reconciliation error: {0}")]
    Reconciliation(String),
}

impl Error {
    /// Create a line-qualified parse error
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }

    /// Create a validation error carrying the given contract message
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}
