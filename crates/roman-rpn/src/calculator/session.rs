//! String-in, string-out boundary with an errno-style status slot.

use libc::c_int;

use super::Calculator;

/// Text returned for every failed input.
pub const ERROR_MESSAGE: &str = "Error";

/// Text returned by a clear.
pub const CLEAR_MESSAGE: &str = "Cleared";

/// A calculator behind a text interface.
///
/// Results and failures are both plain strings; callers distinguish them by
/// reading [`Session::error_code`] after each call. A successful input
/// resets the code to 0, a failed one stores the error's code, and a clear
/// leaves it alone.
///
/// # Example
///
/// ```
/// use roman_rpn::{ERROR_MESSAGE, Session};
///
/// let mut session = Session::new();
/// assert_eq!(session.input("+"), ERROR_MESSAGE);
/// assert_ne!(session.error_code(), 0);
/// assert_eq!(session.input("XX"), "XX");
/// assert_eq!(session.error_code(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    calculator: Calculator,
    error_code: c_int,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_calculator(calculator: Calculator) -> Self {
        Self {
            calculator,
            error_code: 0,
        }
    }

    /// Evaluate one token, returning its result or [`ERROR_MESSAGE`].
    pub fn input(&mut self, token: &str) -> String {
        match self.calculator.input(token) {
            Ok(result) => {
                self.error_code = 0;
                result
            }
            Err(error) => {
                self.error_code = error.code();
                ERROR_MESSAGE.to_string()
            }
        }
    }

    /// Empty the stack, returning [`CLEAR_MESSAGE`].
    pub fn clear(&mut self) -> String {
        self.calculator.clear()
    }

    pub fn error_code(&self) -> c_int {
        self.error_code
    }

    pub fn set_error_code(&mut self, code: c_int) {
        self.error_code = code;
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}
