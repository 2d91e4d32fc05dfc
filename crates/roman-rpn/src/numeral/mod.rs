//! Roman numeral codec.
//!
//! Converts between Roman numeral strings and unsigned integers. Decoding is
//! strict: only the canonical rendering of a value in `1..=MAX_VALUE` is
//! accepted, so every decoded token re-encodes to itself.

mod codec;
mod error;

pub use codec::{
    MAX_VALUE, NUMERAL_TABLE, is_numeral, numeral_to_value, symbol_value, value_to_numeral,
};
pub use error::NumeralError;
