//! Miette diagnostic wrapper for rejected calculator tokens.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, NamedSource, SourceSpan};
use roman_rpn::parser::SpannedToken;
use roman_rpn::{CalcError, NumeralError, MAX_VALUE};
use thiserror::Error;

/// A miette-compatible diagnostic pointing at the token the calculator
/// rejected.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(roman::eval))]
pub struct TokenDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("rejected here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl TokenDiagnostic {
    /// Create a diagnostic for `token` within the evaluated expression.
    pub fn from_calc_error(source: &str, token: &SpannedToken<'_>, err: &CalcError) -> Self {
        // Clamp to the source to avoid a miette panic on out-of-bounds spans
        let offset = token.offset.min(source.len());
        let length = token.text.len().min(source.len() - offset);

        TokenDiagnostic {
            src: NamedSource::new("expression", source.to_string()),
            span: (offset, length).into(),
            message: err.to_string(),
            help: help_for(err),
        }
    }
}

/// Suggest a fix for the given error, if one applies.
fn help_for(err: &CalcError) -> Option<String> {
    match err {
        CalcError::InvalidNumeral {
            source: NumeralError::NonCanonical { canonical, .. },
            ..
        } => Some(format!("did you mean '{canonical}'?")),
        CalcError::InvalidNumeral { .. } => {
            Some("numerals use the uppercase symbols I V X L C D M".to_string())
        }
        CalcError::UnrecognizedOperator { .. } => {
            Some("supported operators are + - * /".to_string())
        }
        CalcError::InsufficientOperands { .. } => {
            Some("push two values before applying an operator".to_string())
        }
        CalcError::StackOverflow { capacity } => Some(format!(
            "the stack holds at most {capacity} values; apply an operator or raise --capacity"
        )),
        CalcError::ResultOutOfRange { .. } => {
            Some(format!("results must lie between 0 and {MAX_VALUE}"))
        }
        CalcError::DivideByZero => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_covers_rejected_token() {
        let token = SpannedToken {
            text: "IIII",
            offset: 3,
        };
        let err = CalcError::InvalidNumeral {
            token: "IIII".to_string(),
            source: NumeralError::NonCanonical {
                text: "IIII".to_string(),
                canonical: "IV".to_string(),
            },
        };
        let diagnostic = TokenDiagnostic::from_calc_error("XX IIII +", &token, &err);
        assert_eq!(diagnostic.span.offset(), 3);
        assert_eq!(diagnostic.span.len(), 4);
        assert_eq!(diagnostic.help.as_deref(), Some("did you mean 'IV'?"));
    }

    #[test]
    fn span_is_clamped_to_source() {
        let token = SpannedToken {
            text: "^",
            offset: 40,
        };
        let err = CalcError::UnrecognizedOperator {
            token: "^".to_string(),
        };
        let diagnostic = TokenDiagnostic::from_calc_error("XX", &token, &err);
        assert_eq!(diagnostic.span.offset(), 2);
        assert_eq!(diagnostic.span.len(), 0);
    }
}
