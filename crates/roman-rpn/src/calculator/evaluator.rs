//! Token-at-a-time RPN evaluation.

use tracing::debug;

use super::session::CLEAR_MESSAGE;
use super::{CalcError, CalculatorConfig, Stack};
use crate::numeral::{MAX_VALUE, numeral_to_value, value_to_numeral};
use crate::parser::{Operator, ParseError, Token, parse_token};

/// An RPN calculator over Roman numerals.
///
/// Each call to [`Calculator::input`] consumes one token. Numerals are pushed
/// onto a bounded stack; operators pop two values, compute, and push the
/// result. Successful calls return the Roman rendering of the value pushed.
///
/// # Example
///
/// ```
/// use roman_rpn::Calculator;
///
/// let mut calculator = Calculator::new();
/// calculator.input("XVI").unwrap();
/// calculator.input("III").unwrap();
/// assert_eq!(calculator.input("*").unwrap(), "XLVIII");
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    stack: Stack,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Create a calculator with the default capacity.
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            stack: Stack::new(config.capacity),
        }
    }

    /// Evaluate one token.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An all-letter token is not a canonical numeral
    /// - The token is neither a numeral nor one of `+ - * /`
    /// - A numeral is pushed onto a full stack
    /// - An operator finds fewer than two values
    /// - The divisor is zero, or the result falls outside `0..=3999`
    ///
    /// The stack is unchanged on error, except that operator failures after
    /// the operands were popped (division by zero, out-of-range results)
    /// leave both operands consumed.
    pub fn input(&mut self, token: &str) -> Result<String, CalcError> {
        let result = match parse_token(token) {
            Ok(Token::Numeral(text)) => self.push_numeral(text),
            Ok(Token::Operator(operator)) => self.apply(operator),
            Err(ParseError::Unrecognized { token }) => {
                Err(CalcError::UnrecognizedOperator { token })
            }
        };

        match &result {
            Ok(text) => debug!(token, result = %text, depth = self.stack.len(), "accepted token"),
            Err(error) => debug!(token, %error, code = error.code(), "rejected token"),
        }
        result
    }

    /// Decode a numeral and push its value.
    ///
    /// Returns the canonical rendering of the pushed value.
    pub fn push_numeral(&mut self, text: &str) -> Result<String, CalcError> {
        let value = numeral_to_value(text).map_err(|source| CalcError::InvalidNumeral {
            token: text.to_string(),
            source,
        })?;
        self.stack.push(value)?;
        Ok(value_to_numeral(value))
    }

    /// Pop two operands, apply `operator`, and push the result.
    ///
    /// The most recently pushed value is the right operand. Both operands
    /// are popped before the arithmetic is checked.
    pub fn apply(&mut self, operator: Operator) -> Result<String, CalcError> {
        let Some((left, right)) = self.stack.pop_pair() else {
            return Err(CalcError::InsufficientOperands {
                operator,
                available: self.stack.len(),
            });
        };
        let value = compute(operator, left, right)?;
        self.stack.push(value)?;
        Ok(value_to_numeral(value))
    }

    /// Empty the stack and return the confirmation text.
    pub fn clear(&mut self) -> String {
        let discarded = self.stack.len();
        self.stack.clear();
        debug!(discarded, "cleared stack");
        CLEAR_MESSAGE.to_string()
    }

    /// Values from bottom to top.
    pub fn stack(&self) -> &[u32] {
        self.stack.as_slice()
    }

    pub fn top(&self) -> Option<u32> {
        self.stack.peek()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.stack.is_full()
    }

    pub fn capacity(&self) -> usize {
        self.stack.capacity()
    }
}

/// Apply `operator` to two stack values, requiring a result in `0..=MAX_VALUE`.
fn compute(operator: Operator, left: u32, right: u32) -> Result<u32, CalcError> {
    let (left, right) = (i64::from(left), i64::from(right));
    let value = match operator {
        Operator::Add => left + right,
        Operator::Subtract => left - right,
        Operator::Multiply => left * right,
        Operator::Divide => left.checked_div(right).ok_or(CalcError::DivideByZero)?,
    };
    u32::try_from(value)
        .ok()
        .filter(|value| *value <= MAX_VALUE)
        .ok_or(CalcError::ResultOutOfRange { value })
}
