use crate::error::{RateError, Result};

/// A currency code paired with its rate against the implicit common base.
#[derive(Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    pub code: String,
    pub rate: f64,
}

impl ExchangeRate {
    pub fn new(code: &str, rate: f64) -> Self {
        Self {
            code: normalize_code(code),
            rate,
        }
    }
}

impl std::fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, format_number(self.rate))
    }
}

/// Canonical form of a currency code: trimmed, ASCII uppercase.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Parses user- or file-supplied numeric text. Only finite values are
/// accepted; `inf` and `NaN` spellings are rejected like any other garbage.
pub fn parse_number(input: &str) -> Result<f64> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(RateError::InvalidNumberFormat {
            input: input.to_string(),
        }),
    }
}

/// Renders a number so that it always keeps a fractional part and parses
/// back to the same value.
pub fn format_number(value: f64) -> String {
    format!("{value:?}")
}
