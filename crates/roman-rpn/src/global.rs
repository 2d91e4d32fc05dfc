//! Process-wide calculator for the `global-calculator` feature.
//!
//! Provides the plain `input`/`clear` interface over one shared [`Session`],
//! with the error code read back through [`error_code`] after each call.
//! Prefer an owned [`Calculator`](crate::Calculator) where possible.

use std::sync::{LazyLock, Mutex, PoisonError};

use libc::c_int;

use crate::Session;

static GLOBAL_SESSION: LazyLock<Mutex<Session>> = LazyLock::new(|| Mutex::new(Session::new()));

/// Provides exclusive access to the global session.
///
/// The global lock is held while `f` runs. Calling [`input`], [`clear`],
/// [`error_code`], [`set_error_code`] or `with_session` from inside `f`
/// deadlocks; use the `&mut Session` passed to `f` instead.
pub fn with_session<T>(f: impl FnOnce(&mut Session) -> T) -> T {
    let mut guard = GLOBAL_SESSION
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Evaluates one token on the global calculator.
pub fn input(token: &str) -> String {
    with_session(|session| session.input(token))
}

/// Clears the global calculator's stack.
pub fn clear() -> String {
    with_session(Session::clear)
}

/// Returns the code left by the last global input.
pub fn error_code() -> c_int {
    with_session(|session| session.error_code())
}

/// Overwrites the global error code, typically to reset it to 0.
pub fn set_error_code(code: c_int) {
    with_session(|session| session.set_error_code(code));
}
