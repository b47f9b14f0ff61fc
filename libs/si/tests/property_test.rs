//! Property-based tests using QuickCheck

use ferrum_si::{
    dimension_to_ast, evaluate, format_dimension, parse_quantity, parse_unit_expression, AstNode,
    Context, Dimension, FormatOptions,
};
use quickcheck::{QuickCheck, TestResult};

/// Build a dimension with small exponents from arbitrary input
fn small_dimension(raw: &[i8]) -> Dimension {
    let mut exponents = [0i32; 7];
    for (slot, value) in exponents.iter_mut().zip(raw) {
        *slot = i32::from(*value % 5);
    }
    Dimension::new(exponents)
}

fn expanded() -> FormatOptions {
    FormatOptions {
        collapse_symbols: false,
        ..Default::default()
    }
}

/// Property: multiplying two expressions adds their dimension vectors
#[test]
fn prop_multiply_adds_dimensions() {
    fn prop(a: Vec<i8>, b: Vec<i8>) -> TestResult {
        let (d1, d2) = (small_dimension(&a), small_dimension(&b));
        let ast = AstNode::multiply(dimension_to_ast(d1), dimension_to_ast(d2));
        match evaluate(&ast, Context::standard()) {
            Ok(unit) => TestResult::from_bool(unit.dimension == d1 + d2 && unit.value == 1.0),
            Err(_) => TestResult::failed(),
        }
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(Vec<i8>, Vec<i8>) -> TestResult);
}

/// Property: dividing two expressions subtracts their dimension vectors
#[test]
fn prop_divide_subtracts_dimensions() {
    fn prop(a: Vec<i8>, b: Vec<i8>) -> TestResult {
        let (d1, d2) = (small_dimension(&a), small_dimension(&b));
        let ast = AstNode::divide(dimension_to_ast(d1), dimension_to_ast(d2));
        match evaluate(&ast, Context::standard()) {
            Ok(unit) => TestResult::from_bool(unit.dimension == d1 - d2),
            Err(_) => TestResult::failed(),
        }
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(Vec<i8>, Vec<i8>) -> TestResult);
}

/// Property: raising to an integer power scales the dimension vector
#[test]
fn prop_power_scales_dimension() {
    fn prop(a: Vec<i8>, n: i8) -> TestResult {
        let d1 = small_dimension(&a);
        let exponent = i32::from(n % 6);
        let ast = AstNode::power(AstNode::group(dimension_to_ast(d1)), exponent);
        match evaluate(&ast, Context::standard()) {
            Ok(unit) => TestResult::from_bool(unit.dimension == d1 * exponent),
            Err(_) => TestResult::failed(),
        }
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(Vec<i8>, i8) -> TestResult);
}

/// Property: formatting a dimension and parsing it back is lossless
#[test]
fn prop_format_parse_round_trip() {
    fn prop(a: Vec<i8>) -> TestResult {
        let dimension = small_dimension(&a);
        let text = format_dimension(dimension, Some(&expanded()));
        match parse_unit_expression(&text) {
            Ok(unit) => TestResult::from_bool(unit.dimension == dimension && unit.value == 1.0),
            Err(_) => TestResult::failed(),
        }
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(Vec<i8>) -> TestResult);
}

/// Property: the magnitude of a quantity survives parsing
#[test]
fn prop_quantity_magnitude_preserved() {
    fn prop(value: f64) -> TestResult {
        if !value.is_finite() {
            return TestResult::discard();
        }
        match parse_quantity(&format!("{} m", value)) {
            Ok(unit) => TestResult::from_bool(unit.value == value),
            Err(_) => TestResult::failed(),
        }
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(f64) -> TestResult);
}

/// Property: dimension algebra identities
#[test]
fn prop_dimension_algebra() {
    fn prop(a: Vec<i8>, b: Vec<i8>) -> TestResult {
        let (d1, d2) = (small_dimension(&a), small_dimension(&b));
        TestResult::from_bool(
            d1 + d2 == d2 + d1
                && (d1 - d2) + d2 == d1
                && d1 * 2 == d1 + d1
                && -d1 == Dimension::default() - d1
                && (d1 - d1).is_dimensionless(),
        )
    }

    QuickCheck::new()
        .tests(100)
        .quickcheck(prop as fn(Vec<i8>, Vec<i8>) -> TestResult);
}

/// Property: every registered known symbol is reproduced for its own dimension
/// Using the fixed default table instead of generated input
#[test]
fn prop_known_symbols_round_trip() {
    let options = FormatOptions::default();
    for (dimension, symbol) in &options.known_symbols {
        let unit = parse_unit_expression(symbol).unwrap();
        assert_eq!(unit.dimension, *dimension, "{}", symbol);
        assert_eq!(
            format_dimension(unit.dimension, Some(&options)),
            *symbol,
            "Known symbol should collapse: {}",
            symbol
        );
    }
}
