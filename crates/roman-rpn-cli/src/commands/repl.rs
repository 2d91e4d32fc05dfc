//! Implementation of the `roman repl` command.

use std::io::{stdin, stdout, BufRead, IsTerminal, Write};

use miette::IntoDiagnostic;
use owo_colors::{OwoColorize, Stream};
use roman_rpn::parser::tokenize;
use roman_rpn::{Calculator, CalculatorConfig, DEFAULT_CAPACITY};
use tracing::debug;

use crate::output::table::format_stack_table;

/// Arguments for the repl command.
#[derive(Debug, clap::Args)]
pub struct ReplArgs {
    /// Maximum number of values on the stack
    #[arg(long, env = "ROMAN_STACK_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Print the stack after every line
    #[arg(long)]
    pub show_stack: bool,
}

/// A line that controls the session rather than feeding the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Clear,
    Stack,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Command> {
        match line.trim() {
            "clear" => Some(Command::Clear),
            "stack" => Some(Command::Stack),
            "quit" | "exit" => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Run the repl command.
pub fn run_repl(args: ReplArgs) -> miette::Result<i32> {
    let config = CalculatorConfig::builder().capacity(args.capacity).build();
    let mut calculator = Calculator::with_config(config);
    let input = stdin();
    let interactive = input.is_terminal();
    let mut out = stdout().lock();

    prompt(&mut out, interactive)?;
    for line in input.lock().lines() {
        let line = line.into_diagnostic()?;
        match Command::parse(&line) {
            Some(Command::Quit) => break,
            Some(Command::Clear) => writeln!(out, "{}", calculator.clear()).into_diagnostic()?,
            Some(Command::Stack) => {
                writeln!(out, "{}", format_stack_table(calculator.stack())).into_diagnostic()?;
            }
            None => evaluate_line(&mut calculator, &line, &mut out)?,
        }
        if args.show_stack {
            writeln!(out, "{}", format_stack_table(calculator.stack())).into_diagnostic()?;
        }
        prompt(&mut out, interactive)?;
    }

    debug!(depth = calculator.len(), "session ended");
    Ok(exitcode::OK)
}

/// Feed every token on `line` to the calculator, printing one result per token.
fn evaluate_line(
    calculator: &mut Calculator,
    line: &str,
    out: &mut impl Write,
) -> miette::Result<()> {
    for token in tokenize(line) {
        match calculator.input(token.text) {
            Ok(result) => writeln!(out, "{}", result).into_diagnostic()?,
            Err(err) => writeln!(
                out,
                "{} {}",
                "error:".if_supports_color(Stream::Stdout, |text| text.red()),
                err
            )
            .into_diagnostic()?,
        }
    }
    Ok(())
}

fn prompt(out: &mut impl Write, interactive: bool) -> miette::Result<()> {
    if interactive {
        write!(out, "> ").into_diagnostic()?;
        out.flush().into_diagnostic()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_session_commands() {
        assert_eq!(Command::parse("clear"), Some(Command::Clear));
        assert_eq!(Command::parse("  stack "), Some(Command::Stack));
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
        assert_eq!(Command::parse("XX II +"), None);
    }

    #[test]
    fn evaluates_each_token_on_a_line() {
        owo_colors::set_override(false);
        let mut calculator = Calculator::new();
        let mut out = Vec::new();
        evaluate_line(&mut calculator, "XX II + ^", &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "XX\nII\nXXII\nerror: unrecognized operator '^'\n"
        );
        assert_eq!(calculator.stack(), &[22]);
    }
}
