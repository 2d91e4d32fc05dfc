//! Whitespace-separated expression splitting.

use std::ops::Range;

use winnow::prelude::*;
use winnow::token::{take_till, take_while};

/// A raw token together with its byte offset in the source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpannedToken<'a> {
    pub text: &'a str,
    pub offset: usize,
}

impl SpannedToken<'_> {
    /// Byte range of this token in the source line.
    pub fn span(&self) -> Range<usize> {
        self.offset..self.offset + self.text.len()
    }
}

/// Split a line into whitespace-separated tokens.
///
/// Tokens are not classified; pass each `text` to the calculator.
///
/// # Example
///
/// ```
/// use roman_rpn::parser::tokenize;
///
/// let tokens = tokenize("  XX II +");
/// let texts: Vec<_> = tokens.iter().map(|t| t.text).collect();
/// assert_eq!(texts, ["XX", "II", "+"]);
/// assert_eq!(tokens[1].offset, 5);
/// ```
pub fn tokenize(line: &str) -> Vec<SpannedToken<'_>> {
    let mut remaining = line;
    let mut tokens = Vec::new();
    while let Ok(text) = word(&mut remaining) {
        let offset = line.len() - remaining.len() - text.len();
        tokens.push(SpannedToken { text, offset });
    }
    tokens
}

fn word<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(0.., char::is_whitespace).parse_next(input)?;
    take_till(1.., char::is_whitespace).parse_next(input)
}
