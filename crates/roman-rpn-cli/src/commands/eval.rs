//! Implementation of the `roman eval` command.

use miette::{IntoDiagnostic, Report};
use roman_rpn::parser::tokenize;
use roman_rpn::{Calculator, CalculatorConfig, ErrorKind, DEFAULT_CAPACITY};
use serde::Serialize;

use crate::output::table::{format_steps_table, Step};
use crate::output::TokenDiagnostic;

/// Arguments for the eval command.
#[derive(Debug, clap::Args)]
pub struct EvalArgs {
    /// Tokens to evaluate; an argument may hold several space-separated tokens
    #[arg(required = true)]
    pub tokens: Vec<String>,

    /// Maximum number of values on the stack
    #[arg(long, env = "ROMAN_STACK_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    pub capacity: usize,

    /// Print every token with its result and stack depth
    #[arg(long)]
    pub steps: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for eval results.
#[derive(Serialize)]
pub struct EvalResult {
    pub result: String,
    pub stack: Vec<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

/// JSON output for a rejected token.
#[derive(Serialize)]
pub struct EvalFailure {
    pub error: String,
    pub kind: ErrorKind,
    pub code: i32,
    pub token: String,
    pub offset: usize,
}

/// Run the eval command.
pub fn run_eval(args: EvalArgs) -> miette::Result<i32> {
    let source = args.tokens.join(" ");
    let tokens = tokenize(&source);
    if tokens.is_empty() {
        eprintln!("No tokens to evaluate");
        return Ok(exitcode::USAGE);
    }

    let config = CalculatorConfig::builder().capacity(args.capacity).build();
    let mut calculator = Calculator::with_config(config);
    let mut steps = Vec::with_capacity(tokens.len());

    for token in &tokens {
        match calculator.input(token.text) {
            Ok(result) => steps.push(Step {
                token: token.text.to_string(),
                result,
                depth: calculator.len(),
            }),
            Err(err) => {
                if args.json {
                    let output = EvalFailure {
                        error: err.to_string(),
                        kind: err.kind(),
                        code: err.code(),
                        token: token.text.to_string(),
                        offset: token.offset,
                    };
                    eprintln!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
                } else {
                    let diagnostic = TokenDiagnostic::from_calc_error(&source, token, &err);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                return Ok(exitcode::DATAERR);
            }
        }
    }

    let result = steps
        .last()
        .map(|step| step.result.clone())
        .unwrap_or_default();

    if args.json {
        let output = EvalResult {
            result,
            stack: calculator.stack().to_vec(),
            steps: args.steps.then_some(steps),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        if args.steps {
            println!("{}", format_steps_table(&steps));
        }
        println!("{}", result);
    }
    Ok(exitcode::OK)
}
