//! Culture-invariant number formatting and parsing for the display
//!
//! Numbers are written with the shortest digits that round-trip, "." as the
//! decimal point and no grouping. Decimal exponents in `-4..15` are written
//! positionally; anything outside uses `E+XX` / `E-XX` scientific notation.

use crate::core::{CalcError, CalcResult};

/// Exponents in this range are shown without scientific notation
const POSITIONAL_EXPONENTS: std::ops::Range<i32> = -4..15;

/// Formats a value for the display
///
/// Negative zero is shown as `"0"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{value:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return value.to_string();
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return value.to_string();
    };

    if POSITIONAL_EXPONENTS.contains(&exponent) {
        // Display for f64 is shortest round-trip and never scientific
        value.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}E{sign}{:02}", exponent.unsigned_abs())
    }
}

/// Parses display text back into a finite number
pub fn parse_number(text: &str) -> CalcResult<f64> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::InvalidNumber(text.to_string())),
    }
}
