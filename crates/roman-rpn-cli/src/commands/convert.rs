//! Implementation of the `roman convert` command.

use miette::IntoDiagnostic;
use roman_rpn::{numeral_to_value, value_to_numeral, NumeralError, MAX_VALUE};
use thiserror::Error;

use crate::output::table::{format_conversion_table, Conversion};

/// Arguments for the convert command.
#[derive(Debug, clap::Args)]
pub struct ConvertArgs {
    /// Numerals or decimal values to convert
    #[arg(required = true)]
    pub inputs: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Why an input could not be converted.
#[derive(Debug, Error)]
enum ConvertError {
    #[error("{value} is outside 0..={max}", max = MAX_VALUE)]
    OutOfRange { value: u64 },

    #[error(transparent)]
    Numeral(#[from] NumeralError),
}

/// Convert one input: decimal digits encode, anything else decodes.
fn convert(input: &str) -> Result<Conversion, ConvertError> {
    if let Ok(value) = input.parse::<u64>() {
        let value = u32::try_from(value)
            .ok()
            .filter(|value| *value <= MAX_VALUE)
            .ok_or(ConvertError::OutOfRange { value })?;
        return Ok(Conversion {
            input: input.to_string(),
            numeral: value_to_numeral(value),
            value,
        });
    }

    let value = numeral_to_value(input)?;
    Ok(Conversion {
        input: input.to_string(),
        numeral: input.to_string(),
        value,
    })
}

/// Run the convert command.
pub fn run_convert(args: ConvertArgs) -> miette::Result<i32> {
    let mut conversions = Vec::with_capacity(args.inputs.len());
    let mut failed = false;

    for input in &args.inputs {
        match convert(input) {
            Ok(conversion) => conversions.push(conversion),
            Err(err) => {
                eprintln!("Cannot convert '{}': {}", input, err);
                failed = true;
            }
        }
    }

    if args.json {
        let json_output = serde_json::to_string_pretty(&conversions).into_diagnostic()?;
        println!("{}", json_output);
    } else if !conversions.is_empty() {
        println!("{}", format_conversion_table(&conversions));
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_input_encodes() {
        let conversion = convert("1994").unwrap();
        assert_eq!(conversion.numeral, "MCMXCIV");
        assert_eq!(conversion.value, 1994);
    }

    #[test]
    fn numeral_input_decodes() {
        assert_eq!(convert("CCXLIII").unwrap().value, 243);
    }

    #[test]
    fn rejects_large_values_and_bad_numerals() {
        assert!(matches!(
            convert("4000"),
            Err(ConvertError::OutOfRange { value: 4000 })
        ));
        assert!(matches!(convert("IIII"), Err(ConvertError::Numeral(_))));
    }
}
