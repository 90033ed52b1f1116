//! Error types for sgudr

use thiserror::Error;

/// Result type alias for sgudr operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for sgudr
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Address text does not match the expected layout
    #[error("Malformed address '{input}': {reason}")]
    MalformedAddress { input: String, reason: String },

    /// A character that is not a hex digit where one was required
    #[error("Invalid hex digit {found:?} at position {position} in '{input}'")]
    InvalidDigit {
        input: String,
        position: usize,
        found: char,
    },

    /// Hex text with an odd digit count or misplaced separators
    #[error("Invalid hex text: {0}")]
    InvalidHex(String),

    /// Invalid parameter error
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl Error {
    /// Create a malformed address error
    pub fn malformed_address<S: Into<String>, R: Into<String>>(input: S, reason: R) -> Self {
        Error::MalformedAddress {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid digit error
    pub fn invalid_digit<S: Into<String>>(input: S, position: usize, found: char) -> Self {
        Error::InvalidDigit {
            input: input.into(),
            position,
            found,
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        Error::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
