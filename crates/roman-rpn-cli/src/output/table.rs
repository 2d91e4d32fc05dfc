//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use roman_rpn::value_to_numeral;
use serde::Serialize;

/// One evaluated token and its outcome.
#[derive(Debug, Clone, Serialize)]
pub struct Step {
    /// Token as typed.
    pub token: String,
    /// Numeral pushed by the token.
    pub result: String,
    /// Stack depth after the token.
    pub depth: usize,
}

/// One conversion performed by `roman convert`.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub input: String,
    pub numeral: String,
    pub value: u32,
}

/// Format evaluation steps as an ASCII table.
pub fn format_steps_table(steps: &[Step]) -> Table {
    let mut table = new_table(vec!["#", "Token", "Result", "Depth"]);
    for (index, step) in steps.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            step.token.clone(),
            display_numeral(&step.result),
            step.depth.to_string(),
        ]);
    }
    table
}

/// Format stack values from bottom to top.
pub fn format_stack_table(stack: &[u32]) -> Table {
    let mut table = new_table(vec!["Position", "Numeral", "Value"]);
    for (index, value) in stack.iter().enumerate() {
        table.add_row(vec![
            index.to_string(),
            display_numeral(&value_to_numeral(*value)),
            value.to_string(),
        ]);
    }
    table
}

/// Format codec conversions.
pub fn format_conversion_table(conversions: &[Conversion]) -> Table {
    let mut table = new_table(vec!["Input", "Numeral", "Value"]);
    for conversion in conversions {
        table.add_row(vec![
            conversion.input.clone(),
            display_numeral(&conversion.numeral),
            conversion.value.to_string(),
        ]);
    }
    table
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Zero renders as the empty string; show a placeholder in tables.
fn display_numeral(numeral: &str) -> String {
    if numeral.is_empty() {
        "(zero)".to_string()
    } else {
        numeral.to_string()
    }
}
