//! Token parser for calculator input.
//!
//! Classifies raw input text into numerals and operators, and splits
//! whitespace-separated expressions into tokens with their source offsets.

pub mod error;
mod expression;
mod token;

pub use error::ParseError;
pub use expression::{SpannedToken, tokenize};
pub use token::{Operator, Token, parse_token};
