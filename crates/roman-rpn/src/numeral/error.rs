//! Error types for the numeral codec.

use thiserror::Error;

use super::codec::MAX_VALUE;

/// An error that occurred while decoding a Roman numeral.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// The numeral has no symbols.
    #[error("empty numeral")]
    Empty,

    /// A character outside `I V X L C D M`.
    #[error("invalid symbol '{symbol}' at byte {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// The symbols decode to a value whose canonical rendering differs.
    #[error("'{text}' is not canonical, expected '{canonical}'")]
    NonCanonical { text: String, canonical: String },

    /// The symbols decode to a value outside `1..=MAX_VALUE`.
    #[error("value {value} is outside 1..={max}", max = MAX_VALUE)]
    OutOfRange { value: i64 },
}
