use bon::Builder;

/// Stack capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 10;

/// Construction options for a [`Calculator`](super::Calculator).
///
/// # Example
///
/// ```
/// use roman_rpn::{Calculator, CalculatorConfig};
///
/// let config = CalculatorConfig::builder().capacity(3).build();
/// let calculator = Calculator::with_config(config);
/// assert_eq!(calculator.capacity(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Builder)]
pub struct CalculatorConfig {
    /// Maximum number of values the stack holds.
    #[builder(default = DEFAULT_CAPACITY)]
    pub capacity: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig::builder().build()
    }
}
