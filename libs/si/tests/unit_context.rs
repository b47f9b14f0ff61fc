//! Symbol resolution against the standard and custom contexts

use ferrum_si::dimension::{DIMENSIONLESS, LENGTH, MASS, TIME};
use ferrum_si::unit::{JOULE, KILOGRAM, METER, WATT};
use ferrum_si::{Context, ContextBuilder, Dimension, Error, Unit};

fn resolve(symbol: &str) -> Unit {
    Context::standard()
        .resolve(symbol)
        .unwrap_or_else(|err| panic!("{} should resolve: {}", symbol, err))
}

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-12 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_base_units() {
    assert_eq!(resolve("m"), METER);
    assert_eq!(resolve("kg"), KILOGRAM);
    for symbol in ["s", "A", "K", "mol", "cd"] {
        let unit = resolve(symbol);
        assert_eq!(unit.value, 1.0);
        assert!(unit.dimension.as_base().is_some(), "{}", symbol);
    }
}

#[test]
fn test_derived_units() {
    assert_eq!(resolve("J"), JOULE);
    assert_eq!(resolve("W"), WATT);
    assert_eq!(resolve("h"), Unit::new(3600.0, TIME));
    assert_eq!(resolve("min"), Unit::new(60.0, TIME));
    assert_eq!(resolve("g"), Unit::new(1e-3, MASS));
    assert_eq!(resolve("rad"), Unit::scalar(1.0));
    assert_eq!(
        resolve("Ω").dimension,
        Dimension::new([2, 1, -3, -2, 0, 0, 0])
    );
    assert_eq!(resolve("T").dimension, Dimension::new([0, 1, -2, -1, 0, 0, 0]));
}

#[test]
fn test_prefixed_units() {
    let km = resolve("km");
    assert_close(km.value, 1000.0);
    assert_eq!(km.dimension, LENGTH);

    // two-character prefix wins over "d" + "am"
    let dam = resolve("dam");
    assert_close(dam.value, 10.0);
    assert_eq!(dam.dimension, LENGTH);

    assert_close(resolve("mg").value, 1e-6);
    assert_close(resolve("µs").value, 1e-6);
    assert_close(resolve("μs").value, 1e-6);
    assert_close(resolve("us").value, 1e-6);
    assert_close(resolve("kHz").value, 1000.0);
    assert_close(resolve("MJ").value, 1e6);
    assert_close(resolve("mmol").value, 1e-3);
}

#[test]
fn test_exact_match_beats_prefix() {
    // "min" is minutes, not milli-inch; "cd" is candela, not centi-day
    assert_eq!(resolve("min"), Unit::new(60.0, TIME));
    assert_eq!(resolve("cd").value, 1.0);
    assert_eq!(resolve("Pa").value, 1.0);
}

#[test]
fn test_binary_prefixes() {
    assert_eq!(resolve("KiB"), Unit::scalar(1024.0));
    assert_eq!(resolve("MiB"), Unit::scalar(1_048_576.0));
    assert_eq!(resolve("GiB"), Unit::scalar(1_073_741_824.0));
    assert_eq!(resolve("kB"), Unit::scalar(1000.0));
    assert_eq!(resolve("B"), Unit::scalar(1.0));
}

#[test]
fn test_binary_prefix_only_applies_to_bytes() {
    assert_eq!(
        Context::standard().resolve("Mim"),
        Err(Error::Resolution("Mim".to_string()))
    );
}

#[test]
fn test_symbolic_units() {
    assert_eq!(resolve("dBm"), Unit::new(1e-3, WATT.dimension));
    assert_eq!(resolve("%"), Unit::new(0.01, DIMENSIONLESS));
    // symbolic units never take a prefix
    assert!(Context::standard().resolve("kdBm").is_err());
    assert!(Context::standard().resolve("m%").is_err());
}

#[test]
fn test_unknown_symbols() {
    for symbol in ["xyzzy", "M", "k", "KG", "iB", "degC"] {
        assert_eq!(
            Context::standard().resolve(symbol),
            Err(Error::Resolution(symbol.to_string())),
            "{}",
            symbol
        );
    }
    assert!(!Context::standard().is_known("xyzzy"));
    assert!(Context::standard().is_known("km"));
}

#[test]
fn test_prefix_factors() {
    let ctx = Context::standard();
    assert_eq!(ctx.prefix_factor("k"), Some(1e3));
    assert_eq!(ctx.prefix_factor("da"), Some(10.0));
    assert_eq!(ctx.prefix_factor("Ki"), Some(1024.0));
    assert_eq!(ctx.prefix_factor(""), Some(1.0));
    assert_eq!(ctx.prefix_factor("x"), None);

    let sorted = ctx.sorted_prefixes();
    assert_eq!(sorted.first().map(String::as_str), Some("da"));
    assert!(!sorted.iter().any(|p| p.is_empty()));
}

#[test]
fn test_custom_context() {
    let ctx = ContextBuilder::new()
        .base_unit("m", LENGTH)
        .derived_unit("ft", Unit::new(0.3048, LENGTH))
        .prefix("k", 1e3)
        .build();

    assert_close(ctx.resolve("kft").unwrap().value, 304.8);
    assert!(ctx.resolve("s").is_err());

    let speed = ferrum_si::parse_unit_expression_with("ft/m", &ctx).unwrap();
    assert_close(speed.value, 0.3048);
    assert!(speed.dimension.is_dimensionless());
}

#[test]
fn test_default_context_matches_standard() {
    let ctx = Context::default();
    assert_eq!(ctx.resolve("km"), Context::standard().resolve("km"));
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_context_is_send_and_sync() {
    assert_send_sync::<Context>();
    assert_send_sync::<&'static Context>();
}

#[test]
fn test_standard_context_shared_across_threads() {
    let symbols: &[&str] = &["km", "dam", "KiB", "dBm", "µs", "kHz", "mg"];
    let expected: Vec<Unit> = symbols.iter().copied().map(resolve).collect();
    let expected_speed = ferrum_si::parse_unit_expression("km/h").unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(move || {
                    let ctx = Context::standard();
                    let resolved: Vec<Unit> = symbols
                        .iter()
                        .map(|s| ctx.resolve(s).unwrap())
                        .collect();
                    let speed = ferrum_si::parse_unit_expression_with("km/h", ctx).unwrap();
                    let text = ferrum_si::format_dimension(speed.dimension, None);
                    (resolved, speed, text)
                })
            })
            .collect();

        for handle in handles {
            let (resolved, speed, text) = handle.join().unwrap();
            assert_eq!(resolved, expected);
            assert_eq!(speed, expected_speed);
            assert_eq!(text, "m/s");
        }
    });
}
