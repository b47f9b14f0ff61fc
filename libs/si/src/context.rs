//! Symbol table for unit resolution
//!
//! A [`Context`] maps unit symbols to scaled dimensions. It is assembled once
//! through [`ContextBuilder`] and is read-only afterwards, so a single
//! instance can be shared by reference across threads.
//!
//! Resolution order for a symbol:
//! 1. exact base unit (`m`, `kg`, ...)
//! 2. exact derived unit (`N`, `h`, `g`, ...)
//! 3. exact symbolic unit (`dBm`, `%`); these never take a prefix
//! 4. binary-prefixed byte (`KiB` ... `EiB`)
//! 5. SI prefix + base/derived unit, trying the longest prefix first

use crate::dimension::{
    Dimension, CURRENT, DIMENSIONLESS, LENGTH, LUMINOSITY, MASS, SUBSTANCE, TEMPERATURE, TIME,
};
use crate::error::{Error, Result};
use crate::unit::{
    Unit, AMPERE, COULOMB, HERTZ, JOULE, KILOGRAM, METER, MOLE, NEWTON, PASCAL, SECOND, VOLT,
    WATT,
};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Byte unit symbol that binary prefixes attach to.
const BYTE: &str = "B";

static STANDARD: Lazy<Context> = Lazy::new(|| ContextBuilder::standard().build());

/// Immutable unit symbol table
#[derive(Debug, Clone)]
pub struct Context {
    base_units: HashMap<String, Dimension>,
    derived_units: HashMap<String, Unit>,
    symbolic_units: HashMap<String, Unit>,
    prefixes: HashMap<String, f64>,
    binary_prefixes: HashMap<String, f64>,
    /// SI prefix symbols, longest first.
    sorted_prefixes: Vec<String>,
}

impl Context {
    /// The shared context holding the SI base, derived and symbolic units.
    pub fn standard() -> &'static Context {
        &STANDARD
    }

    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    /// Resolve a symbol to its scale and dimension.
    pub fn resolve(&self, symbol: &str) -> Result<Unit> {
        tracing::trace!(symbol, "resolving unit symbol");

        if let Some(unit) = self.lookup_unprefixed(symbol) {
            return Ok(unit);
        }
        if let Some(unit) = self.symbolic_units.get(symbol) {
            return Ok(*unit);
        }
        if let Some(unit) = self.resolve_binary(symbol) {
            return Ok(unit);
        }

        for prefix in &self.sorted_prefixes {
            let Some(suffix) = symbol.strip_prefix(prefix.as_str()) else {
                continue;
            };
            if let (Some(unit), Some(factor)) =
                (self.lookup_unprefixed(suffix), self.prefixes.get(prefix))
            {
                return Ok(Unit::new(factor * unit.value, unit.dimension));
            }
        }

        Err(Error::Resolution(symbol.to_string()))
    }

    pub fn is_known(&self, symbol: &str) -> bool {
        self.resolve(symbol).is_ok()
    }

    /// Multiplicative factor of an SI or binary prefix.
    pub fn prefix_factor(&self, prefix: &str) -> Option<f64> {
        self.prefixes
            .get(prefix)
            .or_else(|| self.binary_prefixes.get(prefix))
            .copied()
    }

    /// SI prefixes in the order the resolver tries them.
    pub fn sorted_prefixes(&self) -> &[String] {
        &self.sorted_prefixes
    }

    fn lookup_unprefixed(&self, symbol: &str) -> Option<Unit> {
        if let Some(dimension) = self.base_units.get(symbol) {
            return Some(Unit::new(1.0, *dimension));
        }
        self.derived_units.get(symbol).copied()
    }

    fn resolve_binary(&self, symbol: &str) -> Option<Unit> {
        let prefix = symbol.strip_suffix(BYTE)?;
        let factor = self.binary_prefixes.get(prefix)?;
        let byte = self.lookup_unprefixed(BYTE)?;
        Some(Unit::new(factor * byte.value, byte.dimension))
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::standard().clone()
    }
}

/// Builder for [`Context`]
#[derive(Debug, Clone, Default)]
pub struct ContextBuilder {
    base_units: HashMap<String, Dimension>,
    derived_units: HashMap<String, Unit>,
    symbolic_units: HashMap<String, Unit>,
    prefixes: HashMap<String, f64>,
    binary_prefixes: HashMap<String, f64>,
}

impl ContextBuilder {
    /// An empty builder. The empty prefix is always present with factor 1.
    pub fn new() -> Self {
        let mut builder = Self::default();
        builder.prefixes.insert(String::new(), 1.0);
        builder
    }

    /// A builder preloaded with SI base units, derived units, symbolic units
    /// and SI/binary prefixes.
    pub fn standard() -> Self {
        Self::new()
            .with_si_base_units()
            .with_si_derived_units()
            .with_symbolic_units()
            .with_si_prefixes()
            .with_binary_prefixes()
    }

    pub fn base_unit(mut self, symbol: impl Into<String>, dimension: Dimension) -> Self {
        self.base_units.insert(symbol.into(), dimension);
        self
    }

    pub fn derived_unit(mut self, symbol: impl Into<String>, unit: Unit) -> Self {
        self.derived_units.insert(symbol.into(), unit);
        self
    }

    /// Register a unit that is only ever matched verbatim.
    pub fn symbolic_unit(mut self, symbol: impl Into<String>, unit: Unit) -> Self {
        self.symbolic_units.insert(symbol.into(), unit);
        self
    }

    pub fn prefix(mut self, symbol: impl Into<String>, factor: f64) -> Self {
        self.prefixes.insert(symbol.into(), factor);
        self
    }

    /// Register a prefix that only applies to the byte unit `B`.
    pub fn binary_prefix(mut self, symbol: impl Into<String>, factor: f64) -> Self {
        self.binary_prefixes.insert(symbol.into(), factor);
        self
    }

    pub fn with_si_base_units(self) -> Self {
        self.base_unit("m", LENGTH)
            .base_unit("kg", MASS)
            .base_unit("s", TIME)
            .base_unit("A", CURRENT)
            .base_unit("K", TEMPERATURE)
            .base_unit("mol", SUBSTANCE)
            .base_unit("cd", LUMINOSITY)
    }

    pub fn with_si_derived_units(self) -> Self {
        let farad = COULOMB / VOLT;
        let ohm = VOLT / AMPERE;
        let weber = VOLT * SECOND;
        let radian = Unit::scalar(1.0);
        let candela = Unit::new(1.0, LUMINOSITY);

        self.derived_unit("g", Unit::new(1e-3, MASS))
            .derived_unit("rad", radian)
            .derived_unit("sr", radian)
            .derived_unit("Hz", HERTZ)
            .derived_unit("N", NEWTON)
            .derived_unit("Pa", PASCAL)
            .derived_unit("J", JOULE)
            .derived_unit("W", WATT)
            .derived_unit("C", COULOMB)
            .derived_unit("V", VOLT)
            .derived_unit("F", farad)
            .derived_unit("Ω", ohm)
            .derived_unit("S", AMPERE / VOLT)
            .derived_unit("Wb", weber)
            .derived_unit("T", weber / METER.powi(2))
            .derived_unit("H", weber / AMPERE)
            .derived_unit("lm", candela)
            .derived_unit("lx", candela / METER.powi(2))
            .derived_unit("Bq", HERTZ)
            .derived_unit("Gy", JOULE / KILOGRAM)
            .derived_unit("Sv", JOULE / KILOGRAM)
            .derived_unit("kat", MOLE / SECOND)
            .derived_unit("min", Unit::new(60.0, TIME))
            .derived_unit("h", Unit::new(3600.0, TIME))
            .derived_unit("d", Unit::new(86400.0, TIME))
            .derived_unit(BYTE, Unit::scalar(1.0))
    }

    pub fn with_symbolic_units(self) -> Self {
        self.symbolic_unit("dBm", Unit::new(1e-3, WATT.dimension))
            .symbolic_unit("%", Unit::new(0.01, DIMENSIONLESS))
    }

    pub fn with_si_prefixes(self) -> Self {
        [
            ("Y", 1e24),
            ("Z", 1e21),
            ("E", 1e18),
            ("P", 1e15),
            ("T", 1e12),
            ("G", 1e9),
            ("M", 1e6),
            ("k", 1e3),
            ("h", 1e2),
            ("da", 1e1),
            ("d", 1e-1),
            ("c", 1e-2),
            ("m", 1e-3),
            ("u", 1e-6),
            ("µ", 1e-6),
            ("μ", 1e-6),
            ("n", 1e-9),
            ("p", 1e-12),
            ("f", 1e-15),
            ("a", 1e-18),
            ("z", 1e-21),
            ("y", 1e-24),
        ]
        .into_iter()
        .fold(self, |builder, (symbol, factor)| builder.prefix(symbol, factor))
    }

    pub fn with_binary_prefixes(self) -> Self {
        [("Ki", 10), ("Mi", 20), ("Gi", 30), ("Ti", 40), ("Pi", 50), ("Ei", 60)]
            .into_iter()
            .fold(self, |builder, (symbol, power)| {
                builder.binary_prefix(symbol, 2f64.powi(power))
            })
    }

    /// Freeze the table, ordering prefixes for longest-match-first lookup.
    pub fn build(self) -> Context {
        let mut sorted_prefixes: Vec<String> = self
            .prefixes
            .keys()
            .filter(|p| !p.is_empty())
            .cloned()
            .collect();
        sorted_prefixes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        tracing::debug!(
            base_units = self.base_units.len(),
            derived_units = self.derived_units.len(),
            symbolic_units = self.symbolic_units.len(),
            prefixes = sorted_prefixes.len(),
            binary_prefixes = self.binary_prefixes.len(),
            "built unit context"
        );

        Context {
            base_units: self.base_units,
            derived_units: self.derived_units,
            symbolic_units: self.symbolic_units,
            prefixes: self.prefixes,
            binary_prefixes: self.binary_prefixes,
            sorted_prefixes,
        }
    }
}
