//! Panicking parse wrappers for trusted, compile-time-known inputs.

use crate::unit::Unit;

/// Parse `"<number> <unit expression>"`, panicking on malformed input.
///
/// # Panics
///
/// When [`crate::parse_quantity`] returns an error.
pub fn must_parse_quantity(text: &str) -> Unit {
    match crate::parse_quantity(text) {
        Ok(unit) => unit,
        Err(err) => panic!("invalid quantity {:?}: {}", text, err),
    }
}

/// Parse a bare unit expression, panicking on malformed input.
///
/// # Panics
///
/// When [`crate::parse_unit_expression`] returns an error.
pub fn must_parse_unit_expression(text: &str) -> Unit {
    match crate::parse_unit_expression(text) {
        Ok(unit) => unit,
        Err(err) => panic!("invalid unit expression {:?}: {}", text, err),
    }
}
