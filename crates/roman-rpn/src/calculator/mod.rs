//! RPN calculator over Roman numerals.
//!
//! This module provides the evaluation engine: a bounded stack of values,
//! token-at-a-time evaluation, and the string/error-code boundary used by
//! text front-ends.

mod config;
mod error;
mod evaluator;
mod session;
mod stack;

pub use config::{CalculatorConfig, DEFAULT_CAPACITY};
pub use error::{CalcError, ErrorKind};
pub use evaluator::Calculator;
pub use session::{CLEAR_MESSAGE, ERROR_MESSAGE, Session};
pub(crate) use stack::Stack;
