//! Error types for unit expression parsing and quantity arithmetic

use crate::dimension::Dimension;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid unit expression at byte {position}: {message}")]
    Lex { position: usize, message: String },

    #[error("unexpected token at byte {position}: {message}")]
    Parse { position: usize, message: String },

    #[error("unrecognized unit: {0}")]
    Resolution(String),

    #[error("cannot convert between units with different dimensions: {from} vs {to}")]
    DimensionMismatch { from: Dimension, to: Dimension },

    #[error("dimension exponent out of range")]
    DimensionOverflow,

    #[error("cannot convert to a zero-valued unit")]
    ZeroTarget,

    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
}
