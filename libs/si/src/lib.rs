//! SI unit expressions: parse, evaluate and format
//!
//! ```text
//! "100 km/h"
//!      |
//!   Lexer -> tokens
//!      |
//!   Parser -> AST
//!      |
//!   Evaluator + Context -> Unit { value, dimension }
//!      |
//!   Formatter -> "27.77777777777778 m/s"
//! ```
//!
//! The standard [`Context`] knows the seven SI base units, the named derived
//! units, the SI prefixes (`Y` to `y`) and binary byte prefixes (`KiB` to
//! `EiB`). It is built once and shared.

#![forbid(unsafe_code)]

pub mod ast;
pub mod context;
pub mod dimension;
pub mod error;
pub mod eval;
pub mod formatter;
pub mod lexer;
pub mod must;
pub mod parser;
pub mod prefixed;
pub mod token;
pub mod unit;

pub use ast::{AstNode, BinaryOperator};
pub use context::{Context, ContextBuilder};
pub use dimension::{BaseDimension, Dimension};
pub use error::{Error, Result};
pub use eval::evaluate;
pub use formatter::{dimension_to_ast, format_ast, format_number, FormatOptions, UnitFormatter};
pub use must::{must_parse_quantity, must_parse_unit_expression};
pub use parser::parse;
pub use prefixed::format_with_prefix;
pub use unit::Unit;

/// Parse a bare unit expression such as `kg*m/s^2` against the standard
/// context. Empty or whitespace-only input is the dimensionless unit `1`.
pub fn parse_unit_expression(text: &str) -> Result<Unit> {
    parse_unit_expression_with(text, Context::standard())
}

/// Parse a bare unit expression against a caller-supplied context.
pub fn parse_unit_expression_with(text: &str, context: &Context) -> Result<Unit> {
    tracing::trace!(expression = text, "parsing unit expression");

    if text.trim().is_empty() {
        return Ok(unit::ONE);
    }
    let ast = parser::parse(text)?;
    eval::evaluate(&ast, context)
}

/// Parse `"<number> <unit expression>"`, e.g. `100 km/h`.
///
/// The first whitespace-separated field is the magnitude. The remaining
/// fields are joined without separators and parsed as a unit expression, so
/// `9.8 m / s^2` is accepted. A lone number is a dimensionless scalar.
///
/// Joining also glues adjacent symbols together: `1 m s` reads as `1 ms`
/// (one millisecond), not metre-seconds. Write `1 m*s` for a product.
pub fn parse_quantity(text: &str) -> Result<Unit> {
    let mut fields = text.split_whitespace();
    let magnitude = fields
        .next()
        .ok_or_else(|| Error::InvalidQuantity(format!("empty input '{}'", text)))?;
    let value: f64 = magnitude
        .parse()
        .map_err(|_| Error::InvalidQuantity(format!("invalid numeric value '{}'", magnitude)))?;

    let expression: String = fields.collect();
    if expression.is_empty() {
        return Ok(Unit::scalar(value));
    }
    let unit = parse_unit_expression(&expression)?;
    Ok(Unit::scalar(value) * unit)
}

/// Render a dimension using `options`, or the defaults when `None`.
pub fn format_dimension(dimension: Dimension, options: Option<&FormatOptions>) -> String {
    match options {
        Some(options) => formatter::format_dimension(dimension, options),
        None => formatter::format_dimension(dimension, &FormatOptions::default()),
    }
}

/// Render `value` in units of `dimension`, e.g. `9.8 m/s^2`.
pub fn format_quantity(value: f64, dimension: Dimension, options: Option<&FormatOptions>) -> String {
    match options {
        Some(options) => formatter::format_quantity(value, dimension, options),
        None => formatter::format_quantity(value, dimension, &FormatOptions::default()),
    }
}
