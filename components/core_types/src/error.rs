//! Error objects and value-construction errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The kind of JavaScript error.
///
/// These correspond to JavaScript's built-in error constructors. All of them
/// produce objects with the internal class Error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Generic Error
    Error,
    /// Type error (e.g., calling a non-function)
    TypeError,
    /// Value out of allowed range
    RangeError,
    /// Reference to an undefined variable
    ReferenceError,
    /// Syntax error in JavaScript code
    SyntaxError,
    /// Error in URI handling functions
    URIError,
    /// Error in eval() function
    EvalError,
    /// Multiple errors combined
    AggregateError,
}

impl ErrorKind {
    /// Every error constructor
    pub const ALL: [ErrorKind; 8] = [
        ErrorKind::Error,
        ErrorKind::TypeError,
        ErrorKind::RangeError,
        ErrorKind::ReferenceError,
        ErrorKind::SyntaxError,
        ErrorKind::URIError,
        ErrorKind::EvalError,
        ErrorKind::AggregateError,
    ];

    /// Get the error name as a string
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::Error => "Error",
            ErrorKind::TypeError => "TypeError",
            ErrorKind::RangeError => "RangeError",
            ErrorKind::ReferenceError => "ReferenceError",
            ErrorKind::SyntaxError => "SyntaxError",
            ErrorKind::URIError => "URIError",
            ErrorKind::EvalError => "EvalError",
            ErrorKind::AggregateError => "AggregateError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Internal slots of an Error object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorData {
    /// Constructor that created the error
    pub kind: ErrorKind,
    /// `error.message`
    pub message: String,
}

/// `Error.prototype.toString`: `"TypeError: message"`, or just the name
/// when the message is empty.
impl fmt::Display for ErrorData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.message)
        }
    }
}

/// Failure while building a value
#[derive(Debug, Error)]
pub enum ValueError {
    /// The RegExp pattern did not compile
    #[error("Invalid regular expression: /{pattern}/: {reason}")]
    InvalidRegExp {
        /// Pattern as given
        pattern: String,
        /// Compiler diagnostic
        reason: String,
    },

    /// Unknown, duplicated or conflicting RegExp flags
    #[error("Invalid flags supplied to RegExp constructor '{0}'")]
    InvalidFlags(String),

    /// JSON text could not be parsed
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
