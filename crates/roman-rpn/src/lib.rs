pub mod calculator;
pub mod numeral;
pub mod parser;

#[cfg(feature = "global-calculator")]
mod global;

pub use calculator::{
    CLEAR_MESSAGE, CalcError, Calculator, CalculatorConfig, DEFAULT_CAPACITY, ERROR_MESSAGE,
    ErrorKind, Session,
};
#[cfg(feature = "global-calculator")]
pub use global::{clear, error_code, input, set_error_code, with_session};
pub use numeral::{MAX_VALUE, NumeralError, numeral_to_value, value_to_numeral};
pub use parser::{Operator, Token};
