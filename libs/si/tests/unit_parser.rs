//! Unit tests for the unit expression parser

use ferrum_si::ast::AstNode;
use ferrum_si::lexer::tokenize;
use ferrum_si::parser::{parse, Parser};
use ferrum_si::Error;

fn ident(symbol: &str) -> AstNode {
    AstNode::identifier(symbol)
}

/// Parse and return the error position and message
fn parse_error(input: &str) -> (usize, String) {
    match parse(input) {
        Err(Error::Parse { position, message }) => (position, message),
        other => panic!("expected parse error for {:?}, got {:?}", input, other),
    }
}

#[test]
fn test_single_identifier() {
    assert_eq!(parse("km").unwrap(), ident("km"));
}

#[test]
fn test_number_factor() {
    assert_eq!(
        parse("1/s").unwrap(),
        AstNode::divide(AstNode::Number(1.0), ident("s"))
    );
}

#[test]
fn test_mixed_operators_are_left_associative() {
    // kg*m/s^2 == ((kg*m)/s^2)
    assert_eq!(
        parse("kg*m/s^2").unwrap(),
        AstNode::divide(
            AstNode::multiply(ident("kg"), ident("m")),
            AstNode::power(ident("s"), 2),
        )
    );

    // m/s*kg == ((m/s)*kg)
    assert_eq!(
        parse("m/s*kg").unwrap(),
        AstNode::multiply(AstNode::divide(ident("m"), ident("s")), ident("kg"))
    );
}

#[test]
fn test_middle_dot_is_multiply() {
    assert_eq!(parse("N·m").unwrap(), parse("N*m").unwrap());
}

#[test]
fn test_power_of_group() {
    assert_eq!(
        parse("(m/s)^2").unwrap(),
        AstNode::power(AstNode::group(AstNode::divide(ident("m"), ident("s"))), 2)
    );
}

#[test]
fn test_nested_groups() {
    assert_eq!(
        parse("((m))").unwrap(),
        AstNode::group(AstNode::group(ident("m")))
    );
}

#[test]
fn test_parser_from_tokens() {
    let tokens = tokenize("J/(kg*K)").unwrap();
    let ast = Parser::new(tokens).parse().unwrap();
    assert_eq!(
        ast,
        AstNode::divide(
            ident("J"),
            AstNode::group(AstNode::multiply(ident("kg"), ident("K"))),
        )
    );
}

#[test]
fn test_missing_operand() {
    let (position, message) = parse_error("m/");
    assert_eq!(position, 2);
    assert!(message.contains("end of input"), "{}", message);

    let (position, _) = parse_error("*m");
    assert_eq!(position, 0);
}

#[test]
fn test_unbalanced_parentheses() {
    let (position, message) = parse_error("(kg");
    assert_eq!(position, 3);
    assert!(message.contains("')'"), "{}", message);

    let (position, message) = parse_error("kg)");
    assert_eq!(position, 2);
    assert_eq!(message, "unmatched ')'");

    let (position, _) = parse_error("()");
    assert_eq!(position, 1);
}

#[test]
fn test_exponent_must_be_integer() {
    let (position, message) = parse_error("kg^x");
    assert_eq!(position, 3);
    assert!(message.contains("integer exponent"), "{}", message);

    let (position, message) = parse_error("m^2.5");
    assert_eq!(position, 2);
    assert_eq!(message, "exponent must be an integer, found '2.5'");
}

#[test]
fn test_chained_exponents_rejected() {
    let (position, message) = parse_error("m^2^3");
    assert_eq!(position, 3);
    assert_eq!(message, "exponents cannot be chained");
}

#[test]
fn test_adjacent_factors_rejected() {
    let (position, message) = parse_error("kg m");
    assert_eq!(position, 3);
    assert!(message.starts_with("unexpected trailing"), "{}", message);
}

#[test]
fn test_lex_errors_surface_through_parse() {
    assert!(matches!(parse("m+s"), Err(Error::Lex { position: 1, .. })));
}

#[test]
fn test_deep_but_bounded_nesting() {
    let input = format!("{}m{}", "(".repeat(50), ")".repeat(50));
    assert!(parse(&input).is_ok());
}
