//! Single-token classification using winnow.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use winnow::combinator::alt;
use winnow::prelude::*;
use winnow::stream::AsChar;
use winnow::token::take_while;

use super::error::ParseError;

/// A binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators in symbol order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The single-character symbol for this operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_token(s)? {
            Token::Operator(operator) => Ok(operator),
            Token::Numeral(_) => Err(ParseError::Unrecognized {
                token: s.to_string(),
            }),
        }
    }
}

/// A classified input token.
///
/// Numeral tokens are only candidates: any run of ASCII letters (including
/// the empty token) lands here and is validated later by the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Numeral(&'a str),
    Operator(Operator),
}

/// Classify a single token.
///
/// # Example
///
/// ```
/// use roman_rpn::parser::{Operator, Token, parse_token};
///
/// assert_eq!(parse_token("+"), Ok(Token::Operator(Operator::Add)));
/// assert_eq!(parse_token("XIV"), Ok(Token::Numeral("XIV")));
/// assert!(parse_token("^").is_err());
/// ```
///
/// # Errors
///
/// Returns [`ParseError::Unrecognized`] when the token is neither one of
/// `+ - * /` nor made only of ASCII letters.
pub fn parse_token(text: &str) -> Result<Token<'_>, ParseError> {
    token.parse(text).map_err(|_| ParseError::Unrecognized {
        token: text.to_string(),
    })
}

fn token<'s>(input: &mut &'s str) -> ModalResult<Token<'s>> {
    alt((
        operator.map(Token::Operator),
        take_while(0.., AsChar::is_alpha).map(Token::Numeral),
    ))
    .parse_next(input)
}

fn operator(input: &mut &str) -> ModalResult<Operator> {
    alt((
        '+'.value(Operator::Add),
        '-'.value(Operator::Subtract),
        '*'.value(Operator::Multiply),
        '/'.value(Operator::Divide),
    ))
    .parse_next(input)
}
