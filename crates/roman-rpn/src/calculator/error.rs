//! Error types for the calculator.

use libc::c_int;
use serde::Serialize;
use thiserror::Error;

use crate::numeral::{MAX_VALUE, NumeralError};
use crate::parser::Operator;

/// An error that occurred while evaluating a token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// The token looked like a numeral but did not decode.
    #[error("invalid numeral '{token}': {source}")]
    InvalidNumeral {
        token: String,
        #[source]
        source: NumeralError,
    },

    /// The token is neither a numeral nor one of `+ - * /`.
    #[error("unrecognized operator '{token}'")]
    UnrecognizedOperator { token: String },

    /// An operator was given with fewer than two values on the stack.
    #[error("operator '{operator}' needs two operands, stack holds {available}")]
    InsufficientOperands { operator: Operator, available: usize },

    /// A push was attempted on a full stack.
    #[error("stack is full ({capacity} values)")]
    StackOverflow { capacity: usize },

    /// Division with a zero right operand. Both operands are consumed.
    #[error("division by zero")]
    DivideByZero,

    /// Arithmetic produced a value with no Roman rendering. Both operands
    /// are consumed.
    #[error("result {value} is outside 0..={max}", max = MAX_VALUE)]
    ResultOutOfRange { value: i64 },
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::InvalidNumeral { .. } => ErrorKind::InvalidNumeral,
            CalcError::UnrecognizedOperator { .. } => ErrorKind::UnrecognizedOperator,
            CalcError::InsufficientOperands { .. } => ErrorKind::InsufficientOperands,
            CalcError::StackOverflow { .. } => ErrorKind::StackOverflow,
            CalcError::DivideByZero => ErrorKind::DivideByZero,
            CalcError::ResultOutOfRange { .. } => ErrorKind::ResultOutOfRange,
        }
    }

    /// The errno-style code reported for this error.
    pub fn code(&self) -> c_int {
        self.kind().code()
    }
}

/// Failure category, independent of the offending token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidNumeral,
    UnrecognizedOperator,
    InsufficientOperands,
    StackOverflow,
    DivideByZero,
    ResultOutOfRange,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 6] = [
        ErrorKind::InvalidNumeral,
        ErrorKind::UnrecognizedOperator,
        ErrorKind::InsufficientOperands,
        ErrorKind::StackOverflow,
        ErrorKind::DivideByZero,
        ErrorKind::ResultOutOfRange,
    ];

    /// Platform errno value for this kind. Every kind maps to a distinct,
    /// non-zero code; division by zero is `ERANGE`.
    pub fn code(self) -> c_int {
        match self {
            ErrorKind::InvalidNumeral => libc::EINVAL,
            ErrorKind::UnrecognizedOperator => libc::ENOSYS,
            ErrorKind::InsufficientOperands => libc::ENOENT,
            ErrorKind::StackOverflow => libc::ENOSPC,
            ErrorKind::DivideByZero => libc::ERANGE,
            ErrorKind::ResultOutOfRange => libc::EDOM,
        }
    }
}
