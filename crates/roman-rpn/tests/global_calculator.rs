#![cfg(feature = "global-calculator")]

//! Integration tests for the process-wide `input`/`clear` interface.

use std::sync::{Mutex, MutexGuard, PoisonError};

use roman_rpn::{CLEAR_MESSAGE, DEFAULT_CAPACITY, ERROR_MESSAGE, ErrorKind};

static SERIAL: Mutex<()> = Mutex::new(());

/// Serializes tests that share the global calculator and starts each one
/// from an empty stack with a zero error code.
fn fresh() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
    roman_rpn::clear();
    roman_rpn::set_error_code(0);
    guard
}

// =========================================================================
// Results
// =========================================================================

#[test]
fn parses_numerals() {
    let _guard = fresh();
    assert_eq!(roman_rpn::input("XX"), "XX");
}

#[test]
fn performs_calculations() {
    let _guard = fresh();
    let steps: [(&[&str], &str); 6] = [
        (&["XX", "II", "+"], "XXII"),
        (&["XX", "XX", "-"], ""),
        (&["XVI", "III", "*"], "XLVIII"),
        (&["XX", "XX", "/"], "I"),
        (
            &[
                "XV", "VII", "I", "I", "+", "-", "/", "III", "*", "II", "I", "I", "+", "+", "-",
            ],
            "V",
        ),
        (&["MMXIX", "MDCCLXXVI", "-"], "CCXLIII"),
    ];
    for (tokens, expected) in steps {
        let mut result = String::new();
        for token in tokens {
            result = roman_rpn::input(token);
        }
        assert_eq!(result, expected, "tokens {tokens:?}");
        assert_eq!(roman_rpn::error_code(), 0);
    }
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn displays_error_if_input_invalid() {
    let _guard = fresh();
    assert_eq!(roman_rpn::input("Z"), ERROR_MESSAGE);
    assert_ne!(roman_rpn::error_code(), 0);
}

#[test]
fn gives_range_error_for_divide_by_zero() {
    let _guard = fresh();
    for token in ["V", "I", "I", "-"] {
        roman_rpn::input(token);
    }
    assert_eq!(roman_rpn::input("/"), ERROR_MESSAGE);
    assert_eq!(roman_rpn::error_code(), libc::ERANGE);
}

#[test]
fn fails_if_unrecognized_operator_is_given() {
    let _guard = fresh();
    roman_rpn::input("M");
    roman_rpn::input("D");
    assert_eq!(roman_rpn::input("^"), ERROR_MESSAGE);
    assert_eq!(
        roman_rpn::error_code(),
        ErrorKind::UnrecognizedOperator.code()
    );
    roman_rpn::with_session(|session| {
        assert_eq!(session.calculator().stack(), &[1000, 500]);
    });
}

#[test]
fn fails_if_stack_is_short_when_operator_is_given() {
    let _guard = fresh();
    assert_eq!(roman_rpn::input("+"), ERROR_MESSAGE);
    assert_ne!(roman_rpn::error_code(), 0);

    roman_rpn::set_error_code(0);
    roman_rpn::input("D");
    assert_eq!(roman_rpn::input("+"), ERROR_MESSAGE);
    assert_eq!(
        roman_rpn::error_code(),
        ErrorKind::InsufficientOperands.code()
    );
}

#[test]
fn fails_if_stack_gets_full() {
    let _guard = fresh();
    for _ in 0..DEFAULT_CAPACITY {
        roman_rpn::input("I");
    }
    assert_eq!(roman_rpn::input("I"), ERROR_MESSAGE);
    assert_ne!(roman_rpn::error_code(), 0);
}

#[test]
fn with_session_drives_the_shared_calculator() {
    let _guard = fresh();
    let result = roman_rpn::with_session(|session| {
        session.input("X");
        session.input("V");
        session.input("-")
    });
    assert_eq!(result, "V");
    assert_eq!(roman_rpn::error_code(), 0);
    assert_eq!(roman_rpn::input("V"), "V");
    assert_eq!(roman_rpn::input("/"), "I");
}

// =========================================================================
// Clear
// =========================================================================

#[test]
fn can_clear_calculation() {
    let _guard = fresh();
    roman_rpn::input("MDCCLXXV");
    assert_eq!(roman_rpn::clear(), CLEAR_MESSAGE);
    for _ in 0..DEFAULT_CAPACITY {
        assert_eq!(roman_rpn::input("I"), "I");
        assert_eq!(roman_rpn::error_code(), 0);
    }
}
