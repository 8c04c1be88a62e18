//! Lenient numeric parsing.
//!
//! Form fields and file columns arrive as free text. Rather than rejecting
//! malformed numbers, these helpers fall back to zero and report that they
//! did so through [`Lenient::defaulted`].

/// A parsed value plus whether the zero fallback was used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lenient<T> {
    pub value: T,
    pub defaulted: bool,
}

impl<T> Lenient<T> {
    fn parsed(value: T) -> Self {
        Self { value, defaulted: false }
    }

    fn fallback(value: T) -> Self {
        Self { value, defaulted: true }
    }
}

/// Parses a signed integer, surrounding whitespace allowed. Anything else yields `0`.
///
/// ```
/// use inventory_actor::model::parse_lenient_int;
///
/// assert_eq!(parse_lenient_int(" 12 ").value, 12);
/// assert!(parse_lenient_int("abc").defaulted);
/// ```
pub fn parse_lenient_int(raw: &str) -> Lenient<i64> {
    match raw.trim().parse::<i64>() {
        Ok(value) => Lenient::parsed(value),
        Err(_) => Lenient::fallback(0),
    }
}

/// Parses a decimal number, accepting `,` as the decimal separator.
/// Unparsable or non-finite input yields `0.0`.
pub fn parse_lenient_float(raw: &str) -> Lenient<f64> {
    let normalized = raw.replace(',', ".");
    match normalized.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Lenient::parsed(value),
        _ => Lenient::fallback(0.0),
    }
}
