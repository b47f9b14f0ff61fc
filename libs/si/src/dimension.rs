//! Dimension algebra over the seven SI base quantities
//!
//! A [`Dimension`] is the exponent vector of a physical quantity. Multiplying
//! two units adds their vectors, dividing subtracts them and raising a unit to
//! an integer power scales the vector. Those three operations (plus negation)
//! are the only ways a dimension changes.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Number of SI base quantities.
pub const NDIMS: usize = 7;

/// One slot of a [`Dimension`] vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    Current,
    Temperature,
    Substance,
    Luminosity,
}

impl BaseDimension {
    pub const ALL: [BaseDimension; NDIMS] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Substance,
        BaseDimension::Luminosity,
    ];

    pub fn index(self) -> usize {
        match self {
            BaseDimension::Length => 0,
            BaseDimension::Mass => 1,
            BaseDimension::Time => 2,
            BaseDimension::Current => 3,
            BaseDimension::Temperature => 4,
            BaseDimension::Substance => 5,
            BaseDimension::Luminosity => 6,
        }
    }

    /// The coherent SI base unit symbol for this quantity.
    pub fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "m",
            BaseDimension::Mass => "kg",
            BaseDimension::Time => "s",
            BaseDimension::Current => "A",
            BaseDimension::Temperature => "K",
            BaseDimension::Substance => "mol",
            BaseDimension::Luminosity => "cd",
        }
    }
}

/// Exponents of length, mass, time, current, temperature, substance and
/// luminous intensity, in that order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dimension(pub [i32; NDIMS]);

pub const LENGTH: Dimension = Dimension([1, 0, 0, 0, 0, 0, 0]);
pub const MASS: Dimension = Dimension([0, 1, 0, 0, 0, 0, 0]);
pub const TIME: Dimension = Dimension([0, 0, 1, 0, 0, 0, 0]);
pub const CURRENT: Dimension = Dimension([0, 0, 0, 1, 0, 0, 0]);
pub const TEMPERATURE: Dimension = Dimension([0, 0, 0, 0, 1, 0, 0]);
pub const SUBSTANCE: Dimension = Dimension([0, 0, 0, 0, 0, 1, 0]);
pub const LUMINOSITY: Dimension = Dimension([0, 0, 0, 0, 0, 0, 1]);
pub const DIMENSIONLESS: Dimension = Dimension([0; NDIMS]);

impl Dimension {
    pub const fn new(exponents: [i32; NDIMS]) -> Self {
        Self(exponents)
    }

    pub fn singleton(base: BaseDimension) -> Self {
        let mut exponents = [0; NDIMS];
        exponents[base.index()] = 1;
        Self(exponents)
    }

    pub fn get(&self, base: BaseDimension) -> i32 {
        self.0[base.index()]
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// The base quantity this dimension is exactly equal to, if any.
    pub fn as_base(&self) -> Option<BaseDimension> {
        let mut components = self.components();
        match (components.next(), components.next()) {
            (Some((base, 1)), None) => Some(base),
            _ => None,
        }
    }

    /// Non-zero exponents in vector order.
    pub fn components(&self) -> impl Iterator<Item = (BaseDimension, i32)> + '_ {
        BaseDimension::ALL
            .iter()
            .copied()
            .zip(self.0.iter().copied())
            .filter(|(_, e)| *e != 0)
    }

    pub fn pow(self, exponent: i32) -> Self {
        self * exponent
    }

    /// Exponent-wise sum, or `None` if any exponent leaves the `i32` range.
    pub fn checked_add(self, rhs: Dimension) -> Option<Dimension> {
        self.checked_zip_with(rhs, i32::checked_add)
    }

    pub fn checked_sub(self, rhs: Dimension) -> Option<Dimension> {
        self.checked_zip_with(rhs, i32::checked_sub)
    }

    pub fn checked_mul(self, factor: i32) -> Option<Dimension> {
        let mut out = [0; NDIMS];
        for (slot, e) in out.iter_mut().zip(self.0) {
            *slot = e.checked_mul(factor)?;
        }
        Some(Dimension(out))
    }

    fn zip_with(self, rhs: Dimension, op: fn(i32, i32) -> i32) -> Dimension {
        let mut out = self.0;
        for (lhs, rhs) in out.iter_mut().zip(rhs.0) {
            *lhs = op(*lhs, rhs);
        }
        Dimension(out)
    }

    fn checked_zip_with(
        self,
        rhs: Dimension,
        op: fn(i32, i32) -> Option<i32>,
    ) -> Option<Dimension> {
        let mut out = self.0;
        for (lhs, rhs) in out.iter_mut().zip(rhs.0) {
            *lhs = op(*lhs, rhs)?;
        }
        Some(Dimension(out))
    }
}

// The operators saturate at the `i32` bounds so they stay total; the
// evaluator uses the `checked_*` forms to report overflow instead.

impl Add for Dimension {
    type Output = Dimension;

    fn add(self, rhs: Dimension) -> Dimension {
        self.zip_with(rhs, i32::saturating_add)
    }
}

impl Sub for Dimension {
    type Output = Dimension;

    fn sub(self, rhs: Dimension) -> Dimension {
        self.zip_with(rhs, i32::saturating_sub)
    }
}

impl Mul<i32> for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: i32) -> Dimension {
        Dimension(self.0.map(|e| e.saturating_mul(rhs)))
    }
}

impl Neg for Dimension {
    type Output = Dimension;

    fn neg(self) -> Dimension {
        Dimension(self.0.map(i32::saturating_neg))
    }
}

impl From<BaseDimension> for Dimension {
    fn from(base: BaseDimension) -> Self {
        Dimension::singleton(base)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = crate::formatter::FormatOptions {
            collapse_symbols: false,
            ..Default::default()
        };
        f.write_str(&crate::formatter::format_dimension(*self, &options))
    }
}
