//! Error types for the card authorizer
//!
//! Authorization outcomes are never errors; they are violation codes. The
//! errors here cover the plumbing around the engine.
//!
//! # Error Categories
//!
//! - **I/O Errors**: reading input or writing responses failed (fatal)
//! - **Decode Errors**: an input line is not a valid request (recoverable,
//!   the line is skipped)
//! - **Encode Errors**: a response could not be serialized (fatal)

use thiserror::Error;

/// Main error type for the card authorizer
#[derive(Debug, Error)]
pub enum AuthorizerError {
    /// I/O error while reading requests or writing responses
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },

    /// Input line could not be decoded into a request
    #[error("Decode error at line {line}: {message}")]
    Decode {
        /// 1-based input line number
        line: u64,
        /// Description of the decoding failure
        message: String,
    },

    /// Response could not be encoded
    #[error("Encode error: {message}")]
    Encode {
        /// Description of the encoding failure
        message: String,
    },
}

impl From<std::io::Error> for AuthorizerError {
    fn from(error: std::io::Error) -> Self {
        AuthorizerError::Io {
            message: error.to_string(),
        }
    }
}

// serde_json reports I/O failures of the underlying writer through its own
// error type, so those are split back out here.
impl From<serde_json::Error> for AuthorizerError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_io() {
            AuthorizerError::Io {
                message: error.to_string(),
            }
        } else {
            AuthorizerError::Encode {
                message: error.to_string(),
            }
        }
    }
}

impl AuthorizerError {
    /// Create a Decode error for a given input line
    pub fn decode(line: u64, error: &serde_json::Error) -> Self {
        AuthorizerError::Decode {
            line,
            message: error.to_string(),
        }
    }

    /// Whether processing can continue after this error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AuthorizerError::Decode { .. })
    }
}
