//! Engineering-prefix rendering (`1500 W` -> `1.5 kW`)

use crate::dimension::{BaseDimension, Dimension};
use crate::formatter::{format_number, format_quantity, FormatOptions};
use crate::unit::{Unit, HERTZ, JOULE, NEWTON, PASCAL, VOLT, WATT};

/// Named derived units that accept a prefix when formatted.
const PREFIXABLE_DERIVED: [(Dimension, &str); 6] = [
    (NEWTON.dimension, "N"),
    (PASCAL.dimension, "Pa"),
    (JOULE.dimension, "J"),
    (WATT.dimension, "W"),
    (HERTZ.dimension, "Hz"),
    (VOLT.dimension, "V"),
];

/// Pick a prefix for `value` so the scaled magnitude lands in `[1, 1000)`.
///
/// Values at or above `1e9` stay on `G` and values below `1e-9` use `p`.
/// Zero takes no prefix.
pub fn compute_prefix(value: f64) -> (&'static str, f64) {
    let magnitude = value.abs();
    if magnitude == 0.0 {
        ("", 0.0)
    } else if magnitude >= 1e9 {
        ("G", value / 1e9)
    } else if magnitude >= 1e6 {
        ("M", value / 1e6)
    } else if magnitude >= 1e3 {
        ("k", value / 1e3)
    } else if magnitude >= 1.0 {
        ("", value)
    } else if magnitude >= 1e-3 {
        ("m", value * 1e3)
    } else if magnitude >= 1e-6 {
        ("µ", value * 1e6)
    } else if magnitude >= 1e-9 {
        ("n", value * 1e9)
    } else {
        ("p", value * 1e12)
    }
}

/// Render a unit with an SI prefix chosen by magnitude.
///
/// Only single base quantities and the derived units N, Pa, J, W, Hz and V
/// are prefixed. Mass is expressed in grams before choosing the prefix.
/// Everything else falls back to [`format_quantity`].
pub fn format_with_prefix(unit: &Unit) -> String {
    if unit.is_dimensionless() {
        return format_number(unit.value);
    }

    let target = match unit.dimension.as_base() {
        Some(BaseDimension::Mass) => Some((unit.value * 1e3, "g")),
        Some(base) => Some((unit.value, base.symbol())),
        None => PREFIXABLE_DERIVED
            .iter()
            .find(|(dimension, _)| *dimension == unit.dimension)
            .map(|(_, symbol)| (unit.value, *symbol)),
    };

    match target {
        Some((value, symbol)) => {
            let (prefix, scaled) = compute_prefix(value);
            format!("{} {}{}", format_number(scaled), prefix, symbol)
        }
        None => format_quantity(unit.value, unit.dimension, &FormatOptions::default()),
    }
}
