//! Tree-walking evaluator: AST + Context -> Unit

use crate::ast::{AstNode, BinaryOperator};
use crate::context::Context;
use crate::error::Result;
use crate::unit::Unit;

/// Evaluate an AST against a context.
///
/// Operands are evaluated left to right and the first error is returned.
/// Division by a zero-valued unit is not rejected here; an exponent leaving
/// the `i32` range is [`crate::Error::DimensionOverflow`].
pub fn evaluate(node: &AstNode, context: &Context) -> Result<Unit> {
    match node {
        AstNode::Identifier(symbol) => context.resolve(symbol),
        AstNode::Number(value) => Ok(Unit::scalar(*value)),
        AstNode::Binary {
            operator,
            left,
            right,
        } => {
            let left = evaluate(left, context)?;
            let right = evaluate(right, context)?;
            match operator {
                BinaryOperator::Multiply => left.checked_mul(right),
                BinaryOperator::Divide => left.checked_div(right),
            }
        }
        AstNode::Power { base, exponent } => evaluate(base, context)?.checked_powi(*exponent),
        AstNode::Group(inner) => evaluate(inner, context),
    }
}
