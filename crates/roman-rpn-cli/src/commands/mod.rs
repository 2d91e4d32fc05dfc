//! CLI command implementations.

mod convert;
mod eval;
mod repl;

pub use convert::{run_convert, ConvertArgs};
pub use eval::{run_eval, EvalArgs};
pub use repl::{run_repl, ReplArgs};
