//! Abstract Syntax Tree for unit expressions
//!
//! ```text
//! term   := power ( ('*' | '/') power )*
//! power  := factor ( '^' INTEGER )?
//! factor := IDENT | NUMBER | '(' term ')'
//! ```
//!
//! Nodes are produced by the parser or synthesized from a dimension by the
//! formatter, and consumed right away by the evaluator or renderer.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Multiply,
    Divide,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AstNode {
    /// A unit symbol, possibly prefixed (e.g. `km`, `µs`, `KiB`).
    Identifier(String),
    /// A bare numeric factor (e.g. the `1` in `1/s`).
    Number(f64),
    Binary {
        operator: BinaryOperator,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
    /// `base ^ exponent`; exponents never chain.
    Power { base: Box<AstNode>, exponent: i32 },
    /// A parenthesised sub-expression.
    Group(Box<AstNode>),
}

impl AstNode {
    pub fn identifier(symbol: impl Into<String>) -> Self {
        AstNode::Identifier(symbol.into())
    }

    pub fn multiply(left: AstNode, right: AstNode) -> Self {
        AstNode::Binary {
            operator: BinaryOperator::Multiply,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn divide(left: AstNode, right: AstNode) -> Self {
        AstNode::Binary {
            operator: BinaryOperator::Divide,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn power(base: AstNode, exponent: i32) -> Self {
        AstNode::Power {
            base: Box::new(base),
            exponent,
        }
    }

    pub fn group(inner: AstNode) -> Self {
        AstNode::Group(Box::new(inner))
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, AstNode::Binary { .. })
    }
}
