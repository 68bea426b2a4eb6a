/// Parsing errors.
///
/// Defines all error types that can occur while lexing and parsing input.
/// Parse errors cover unrecognized characters, missing punctuation, tokens of
/// the wrong kind and the internal pushback invariant.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types raised while evaluating a statement: division by
/// zero, square roots of negative numbers, symbol table violations and bad
/// `pow` exponents.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error;

/// Any failure that can escape a statement.
///
/// Lexical, syntax and semantic failures abort the current statement only;
/// I/O failures and internal invariant violations end the session.
#[derive(Debug, Error)]
pub enum Error {
    /// A lexing or parsing failure.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// An evaluation failure.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` when the session may discard the rest of the statement
    /// and carry on with the next one.
    ///
    /// # Example
    /// ```
    /// use deskcalc::error::{Error, ParseError, RuntimeError};
    ///
    /// let err: Error = RuntimeError::DivisionByZero { line: 1 }.into();
    /// assert!(err.is_recoverable());
    ///
    /// let err: Error = ParseError::PutbackIntoFullBuffer { line: 1 }.into();
    /// assert!(!err.is_recoverable());
    /// ```
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::Parse(ParseError::PutbackIntoFullBuffer { .. }) | Self::Io(_) => false,
            Self::Parse(_) | Self::Runtime(_) => true,
        }
    }
}
