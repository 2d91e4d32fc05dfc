//! Roman RPN calculator CLI entry point.
//!
//! Provides command-line access to the calculator:
//! - `roman eval` - Evaluate a token sequence
//! - `roman repl` - Evaluate lines read from stdin
//! - `roman convert` - Convert between numerals and decimal values

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{run_convert, run_eval, run_repl, ConvertArgs, EvalArgs, ReplArgs};
use tracing::Level;

/// Roman numeral RPN calculator.
#[derive(Debug, Parser)]
#[command(name = "roman")]
#[command(about = "Roman numeral RPN calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate a sequence of numerals and operators
    Eval(EvalArgs),
    /// Read tokens line by line from stdin
    Repl(ReplArgs),
    /// Convert numerals to decimal and decimal to numerals
    Convert(ConvertArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Send calculator logs to stderr, at debug level when verbose.
fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(stderr)
        .with_target(false)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Eval(args) => run_eval(args),
        Commands::Repl(args) => run_repl(args),
        Commands::Convert(args) => run_convert(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_eval(args: &[&str]) -> EvalArgs {
        match Cli::try_parse_from(args).unwrap().command {
            Commands::Eval(args) => args,
            other => panic!("expected eval, got {other:?}"),
        }
    }

    #[test]
    fn eval_flags_after_tokens_are_not_tokens() {
        let args = parse_eval(&["roman", "eval", "XX", "XX", "-", "--json"]);
        assert_eq!(args.tokens, ["XX", "XX", "-"]);
        assert!(args.json);

        let args = parse_eval(&["roman", "eval", "XX", "II", "+", "--steps"]);
        assert_eq!(args.tokens, ["XX", "II", "+"]);
        assert!(args.steps);
        assert!(!args.json);
    }

    #[test]
    fn eval_accepts_bare_minus_token() {
        let args = parse_eval(&["roman", "eval", "--json", "V", "I", "-"]);
        assert_eq!(args.tokens, ["V", "I", "-"]);
        assert!(args.json);
    }
}
