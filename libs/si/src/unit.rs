//! Evaluated units: a scale factor paired with a [`Dimension`]

use crate::dimension::{
    Dimension, CURRENT, DIMENSIONLESS, LENGTH, LUMINOSITY, MASS, SUBSTANCE, TEMPERATURE, TIME,
};
use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, Mul};
use std::str::FromStr;

/// Relative tolerance used by [`Unit::approx_eq`] and [`Unit::compare`].
const EPSILON: f64 = 1e-12;

/// A physical quantity expressed in coherent SI base terms.
///
/// `value` is the scale relative to the coherent unit of `dimension`, so
/// `km/h` evaluates to `(1000.0 / 3600.0, L·T⁻¹)`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub value: f64,
    pub dimension: Dimension,
}

pub const ONE: Unit = Unit::new(1.0, DIMENSIONLESS);
pub const METER: Unit = Unit::new(1.0, LENGTH);
pub const KILOGRAM: Unit = Unit::new(1.0, MASS);
pub const SECOND: Unit = Unit::new(1.0, TIME);
pub const AMPERE: Unit = Unit::new(1.0, CURRENT);
pub const KELVIN: Unit = Unit::new(1.0, TEMPERATURE);
pub const MOLE: Unit = Unit::new(1.0, SUBSTANCE);
pub const CANDELA: Unit = Unit::new(1.0, LUMINOSITY);

pub const NEWTON: Unit = Unit::new(1.0, Dimension::new([1, 1, -2, 0, 0, 0, 0]));
pub const JOULE: Unit = Unit::new(1.0, Dimension::new([2, 1, -2, 0, 0, 0, 0]));
pub const WATT: Unit = Unit::new(1.0, Dimension::new([2, 1, -3, 0, 0, 0, 0]));
pub const PASCAL: Unit = Unit::new(1.0, Dimension::new([-1, 1, -2, 0, 0, 0, 0]));
pub const HERTZ: Unit = Unit::new(1.0, Dimension::new([0, 0, -1, 0, 0, 0, 0]));
pub const COULOMB: Unit = Unit::new(1.0, Dimension::new([0, 0, 1, 1, 0, 0, 0]));
pub const VOLT: Unit = Unit::new(1.0, Dimension::new([2, 1, -3, -1, 0, 0, 0]));

impl Unit {
    pub const fn new(value: f64, dimension: Dimension) -> Self {
        Self { value, dimension }
    }

    /// A dimensionless value.
    pub const fn scalar(value: f64) -> Self {
        Self::new(value, DIMENSIONLESS)
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    /// Raises the unit to an integer power.
    ///
    /// The scale is computed by repeated squaring so integer exponents stay
    /// exact wherever the intermediate products are representable.
    pub fn powi(self, exponent: i32) -> Unit {
        let mut base = self.value;
        let mut remaining = exponent.unsigned_abs();
        let mut acc = 1.0;
        while remaining > 0 {
            if remaining & 1 == 1 {
                acc *= base;
            }
            base *= base;
            remaining >>= 1;
        }
        let value = if exponent < 0 { 1.0 / acc } else { acc };
        Unit::new(value, self.dimension * exponent)
    }

    /// Product that fails with [`Error::DimensionOverflow`] instead of
    /// saturating an exponent.
    pub fn checked_mul(self, rhs: Unit) -> Result<Unit> {
        let dimension = self
            .dimension
            .checked_add(rhs.dimension)
            .ok_or(Error::DimensionOverflow)?;
        Ok(Unit::new(self.value * rhs.value, dimension))
    }

    pub fn checked_div(self, rhs: Unit) -> Result<Unit> {
        let dimension = self
            .dimension
            .checked_sub(rhs.dimension)
            .ok_or(Error::DimensionOverflow)?;
        Ok(Unit::new(self.value / rhs.value, dimension))
    }

    pub fn checked_powi(self, exponent: i32) -> Result<Unit> {
        self.dimension
            .checked_mul(exponent)
            .ok_or(Error::DimensionOverflow)?;
        Ok(self.powi(exponent))
    }

    /// Expresses `self` as a multiple of `target`.
    ///
    /// The returned unit keeps the shared dimension; its value is how many
    /// `target`s fit into `self`.
    pub fn convert_to(self, target: Unit) -> Result<Unit> {
        if self.dimension != target.dimension {
            return Err(Error::DimensionMismatch {
                from: self.dimension,
                to: target.dimension,
            });
        }
        if target.value == 0.0 {
            return Err(Error::ZeroTarget);
        }
        Ok(Unit::new(self.value / target.value, self.dimension))
    }

    /// Equality with a relative tolerance for large magnitudes.
    pub fn approx_eq(&self, other: &Unit) -> bool {
        if self.dimension != other.dimension {
            return false;
        }
        let magnitude = self.value.abs().max(other.value.abs());
        let eps = if magnitude > 1.0 {
            EPSILON * magnitude
        } else {
            EPSILON
        };
        (self.value - other.value).abs() < eps
    }

    pub fn compare(&self, other: &Unit) -> Result<Ordering> {
        if self.dimension != other.dimension {
            return Err(Error::DimensionMismatch {
                from: self.dimension,
                to: other.dimension,
            });
        }
        if (self.value - other.value).abs() < EPSILON {
            return Ok(Ordering::Equal);
        }
        Ok(if self.value < other.value {
            Ordering::Less
        } else {
            Ordering::Greater
        })
    }
}

impl Mul for Unit {
    type Output = Unit;

    fn mul(self, rhs: Unit) -> Unit {
        Unit::new(self.value * rhs.value, self.dimension + rhs.dimension)
    }
}

impl Div for Unit {
    type Output = Unit;

    fn div(self, rhs: Unit) -> Unit {
        Unit::new(self.value / rhs.value, self.dimension - rhs.dimension)
    }
}

impl Default for Unit {
    fn default() -> Self {
        ONE
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format_quantity(self.value, self.dimension, None))
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::parse_quantity(s)
    }
}
