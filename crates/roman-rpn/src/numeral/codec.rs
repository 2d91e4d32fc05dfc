use tracing::trace;

use super::NumeralError;

/// Largest value with a classical Roman numeral rendering.
pub const MAX_VALUE: u32 = 3999;

/// Greedy encoding table, largest step first.
pub const NUMERAL_TABLE: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Returns the base value of a single Roman symbol.
///
/// Only the seven uppercase symbols are recognized.
pub fn symbol_value(symbol: char) -> Option<u32> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Decode a Roman numeral into its value.
///
/// Symbols are summed left to right; a symbol is subtracted instead when the
/// symbol directly after it is worth more. The result must lie in
/// `1..=MAX_VALUE` and `text` must be the canonical rendering of that value.
///
/// # Errors
///
/// - [`NumeralError::Empty`] for an empty string
/// - [`NumeralError::InvalidSymbol`] for any character outside `I V X L C D M`
/// - [`NumeralError::OutOfRange`] when the decoded total is not in `1..=MAX_VALUE`
/// - [`NumeralError::NonCanonical`] for decodable but non-minimal forms like `IIII`
///
/// # Example
///
/// ```
/// use roman_rpn::numeral_to_value;
///
/// assert_eq!(numeral_to_value("MCMXCIV"), Ok(1994));
/// assert!(numeral_to_value("IIII").is_err());
/// ```
pub fn numeral_to_value(text: &str) -> Result<u32, NumeralError> {
    let total = decode_symbols(text)?;
    let value = u32::try_from(total)
        .ok()
        .filter(|value| (1..=MAX_VALUE).contains(value))
        .ok_or(NumeralError::OutOfRange { value: total })?;

    let canonical = value_to_numeral(value);
    if canonical != text {
        return Err(NumeralError::NonCanonical {
            text: text.to_string(),
            canonical,
        });
    }

    trace!(text, value, "decoded numeral");
    Ok(value)
}

/// Encode a value as its canonical Roman numeral.
///
/// Zero has no symbol and encodes to the empty string. No upper bound is
/// enforced here; values above [`MAX_VALUE`] produce repeated `M`s.
///
/// # Example
///
/// ```
/// use roman_rpn::value_to_numeral;
///
/// assert_eq!(value_to_numeral(48), "XLVIII");
/// assert_eq!(value_to_numeral(0), "");
/// ```
pub fn value_to_numeral(value: u32) -> String {
    let mut remaining = value;
    let mut numeral = String::new();
    for &(step, symbols) in &NUMERAL_TABLE {
        while remaining >= step {
            numeral.push_str(symbols);
            remaining -= step;
        }
    }
    numeral
}

/// Returns true if `text` decodes as a canonical numeral.
pub fn is_numeral(text: &str) -> bool {
    numeral_to_value(text).is_ok()
}

/// Sum the symbols of `text` using one-symbol lookahead, without any
/// canonical-form or range checks.
fn decode_symbols(text: &str) -> Result<i64, NumeralError> {
    if text.is_empty() {
        return Err(NumeralError::Empty);
    }

    let values = text
        .char_indices()
        .map(|(position, symbol)| {
            symbol_value(symbol)
                .map(i64::from)
                .ok_or(NumeralError::InvalidSymbol { symbol, position })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut total = 0_i64;
    for (index, &value) in values.iter().enumerate() {
        match values.get(index + 1) {
            Some(&next) if value < next => total -= value,
            _ => total += value,
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_symbols_applies_lookahead() {
        assert_eq!(decode_symbols("IV").unwrap(), 4);
        assert_eq!(decode_symbols("IIII").unwrap(), 4);
        assert_eq!(decode_symbols("IIV").unwrap(), 5);
        assert_eq!(decode_symbols("MMMM").unwrap(), 4000);
    }

    #[test]
    fn decode_symbols_reports_first_bad_symbol() {
        assert_eq!(
            decode_symbols("XIZQ"),
            Err(NumeralError::InvalidSymbol {
                symbol: 'Z',
                position: 2
            })
        );
    }

    #[test]
    fn table_is_descending() {
        assert!(NUMERAL_TABLE.windows(2).all(|pair| pair[0].0 > pair[1].0));
    }
}
