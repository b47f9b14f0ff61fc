//! Rendering dimensions and ASTs back into unit expression strings
//!
//! The inverse of parse + evaluate: a [`Dimension`] is first matched against
//! an ordered list of known symbols (`N`, `J`, ...). When nothing matches, an
//! AST is synthesized from the exponents and walked top-down to produce text
//! such as `(kg*m^2)/s^2`.

use crate::ast::{AstNode, BinaryOperator};
use crate::dimension::{BaseDimension, Dimension};
use crate::unit::{
    AMPERE, COULOMB, HERTZ, JOULE, KELVIN, KILOGRAM, METER, NEWTON, PASCAL, SECOND, VOLT, WATT,
};

/// Placeholder substituted by the exponent in [`FormatOptions::exponent_template`].
pub const EXPONENT_PLACEHOLDER: &str = "{}";

/// Mass before length so products read `kg*m`, then the remaining quantities.
const NUMERATOR_ORDER: [BaseDimension; 7] = [
    BaseDimension::Mass,
    BaseDimension::Length,
    BaseDimension::Time,
    BaseDimension::Current,
    BaseDimension::Temperature,
    BaseDimension::Substance,
    BaseDimension::Luminosity,
];

const DENOMINATOR_ORDER: [BaseDimension; 7] = [
    BaseDimension::Time,
    BaseDimension::Current,
    BaseDimension::Temperature,
    BaseDimension::Substance,
    BaseDimension::Luminosity,
    BaseDimension::Length,
    BaseDimension::Mass,
];

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatOptions {
    /// Symbol placed between factors (default `*`).
    pub multiply_symbol: String,
    /// Symbol placed between numerator and denominator (default `/`).
    pub divide_symbol: String,
    /// Exponent rendering; `{}` is replaced by the exponent (default `^{}`).
    pub exponent_template: String,
    /// Parenthesize groups and ambiguous operands (default `true`).
    pub use_parens: bool,
    /// Drop `^1` exponents (default `false`).
    pub simplify: bool,
    /// Render dimensions listed in `known_symbols` by name (default `true`).
    pub collapse_symbols: bool,
    /// Dimension to symbol overrides; the first match wins.
    pub known_symbols: Vec<(Dimension, String)>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            multiply_symbol: "*".to_string(),
            divide_symbol: "/".to_string(),
            exponent_template: format!("^{}", EXPONENT_PLACEHOLDER),
            use_parens: true,
            simplify: false,
            collapse_symbols: true,
            known_symbols: default_known_symbols(),
        }
    }
}

impl FormatOptions {
    pub fn known_symbol(&self, dimension: Dimension) -> Option<&str> {
        self.known_symbols
            .iter()
            .find(|(known, _)| *known == dimension)
            .map(|(_, symbol)| symbol.as_str())
    }
}

/// Named SI derived units plus the common composite heat-transfer units.
pub fn default_known_symbols() -> Vec<(Dimension, String)> {
    let farad = COULOMB / VOLT;
    let ohm = VOLT / AMPERE;
    let weber = VOLT * SECOND;

    [
        (NEWTON.dimension, "N"),
        (JOULE.dimension, "J"),
        (WATT.dimension, "W"),
        (PASCAL.dimension, "Pa"),
        (HERTZ.dimension, "Hz"),
        (VOLT.dimension, "V"),
        (COULOMB.dimension, "C"),
        (farad.dimension, "F"),
        (ohm.dimension, "Ω"),
        (-ohm.dimension, "S"),
        (weber.dimension, "Wb"),
        ((weber / METER.powi(2)).dimension, "T"),
        ((weber / AMPERE).dimension, "H"),
        ((WATT / (METER * KELVIN)).dimension, "W/(m*K)"),
        ((JOULE / (KILOGRAM * KELVIN)).dimension, "J/(kg*K)"),
    ]
    .into_iter()
    .map(|(dimension, symbol)| (dimension, symbol.to_string()))
    .collect()
}

/// Renders ASTs, dimensions and quantities with a fixed set of options.
#[derive(Clone, Debug, Default)]
pub struct UnitFormatter {
    options: FormatOptions,
}

impl UnitFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    pub fn format_ast(&self, node: &AstNode) -> String {
        let opts = &self.options;
        match node {
            AstNode::Identifier(symbol) => symbol.clone(),
            AstNode::Number(value) => format_number(*value),
            AstNode::Binary {
                operator,
                left,
                right,
            } => {
                let mut lhs = self.format_ast(left);
                let mut rhs = self.format_ast(right);

                if opts.use_parens && *operator == BinaryOperator::Divide {
                    // (a/b)/c reads the same as a/b/c, so only products are wrapped
                    if is_multiplication(left) {
                        lhs = parenthesize(&lhs);
                    }
                    if right.is_binary() {
                        rhs = parenthesize(&rhs);
                    }
                }

                let symbol = match operator {
                    BinaryOperator::Multiply => &opts.multiply_symbol,
                    BinaryOperator::Divide => &opts.divide_symbol,
                };
                format!("{}{}{}", lhs, symbol, rhs)
            }
            AstNode::Power { base, exponent } => {
                let mut rendered = self.format_ast(base);
                if *exponent == 1 && opts.simplify {
                    return rendered;
                }
                if opts.use_parens && base.is_binary() {
                    rendered = parenthesize(&rendered);
                }
                rendered.push_str(
                    &opts
                        .exponent_template
                        .replace(EXPONENT_PLACEHOLDER, &exponent.to_string()),
                );
                rendered
            }
            AstNode::Group(inner) => {
                let rendered = self.format_ast(inner);
                if opts.use_parens {
                    parenthesize(&rendered)
                } else {
                    rendered
                }
            }
        }
    }

    pub fn format_dimension(&self, dimension: Dimension) -> String {
        if self.options.collapse_symbols {
            if let Some(symbol) = self.options.known_symbol(dimension) {
                return symbol.to_string();
            }
        }
        self.format_ast(&dimension_to_ast(dimension))
    }

    /// Render `value` in units of `dimension`, e.g. `9.8 m/s^2`.
    ///
    /// Dimensionless values render as the bare number and a unit value of 1
    /// renders as the bare unit.
    pub fn format_quantity(&self, value: f64, dimension: Dimension) -> String {
        if dimension.is_dimensionless() {
            return format_number(value);
        }
        let unit = self.format_dimension(dimension);
        if value == 1.0 {
            unit
        } else {
            format!("{} {}", format_number(value), unit)
        }
    }
}

/// Synthesize the canonical AST for a dimension.
///
/// Positive exponents form the numerator product, negative ones the
/// denominator product. A dimension without positive exponents gets a `1`
/// numerator; the dimensionless vector becomes the number `1`.
pub fn dimension_to_ast(dimension: Dimension) -> AstNode {
    let factor = |base: BaseDimension, exponent: i32| {
        let ident = AstNode::identifier(base.symbol());
        if exponent == 1 {
            ident
        } else {
            AstNode::power(ident, exponent)
        }
    };

    let mut numerator: Vec<AstNode> = NUMERATOR_ORDER
        .iter()
        .filter(|base| dimension.get(**base) > 0)
        .map(|base| factor(*base, dimension.get(*base)))
        .collect();
    let denominator: Vec<AstNode> = DENOMINATOR_ORDER
        .iter()
        .filter(|base| dimension.get(**base) < 0)
        .map(|base| factor(*base, dimension.get(*base).saturating_neg()))
        .collect();

    if numerator.is_empty() {
        numerator.push(AstNode::Number(1.0));
    }
    let numerator = product(numerator);

    match product_opt(denominator) {
        Some(denominator) => AstNode::divide(numerator, denominator),
        None => numerator,
    }
}

fn product(factors: Vec<AstNode>) -> AstNode {
    product_opt(factors).unwrap_or(AstNode::Number(1.0))
}

fn product_opt(factors: Vec<AstNode>) -> Option<AstNode> {
    factors.into_iter().reduce(AstNode::multiply)
}

fn is_multiplication(node: &AstNode) -> bool {
    matches!(
        node,
        AstNode::Binary {
            operator: BinaryOperator::Multiply,
            ..
        }
    )
}

fn parenthesize(s: &str) -> String {
    format!("({})", s)
}

/// Shortest decimal that round-trips, switching to scientific notation for
/// very large or very small magnitudes.
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (1e-4..1e15).contains(&magnitude) {
        format!("{}", value)
    } else {
        format!("{:e}", value)
    }
}

pub fn format_ast(node: &AstNode, options: &FormatOptions) -> String {
    UnitFormatter::new(options.clone()).format_ast(node)
}

pub fn format_dimension(dimension: Dimension, options: &FormatOptions) -> String {
    UnitFormatter::new(options.clone()).format_dimension(dimension)
}

pub fn format_quantity(value: f64, dimension: Dimension, options: &FormatOptions) -> String {
    UnitFormatter::new(options.clone()).format_quantity(value, dimension)
}
