//! Parse error types for calculator tokens.

use thiserror::Error;

/// An error that occurred while classifying a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token is neither a numeral candidate nor a known operator.
    #[error("unrecognized token '{token}'")]
    Unrecognized { token: String },
}
