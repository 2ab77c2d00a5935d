//! Tree-walking evaluator

use crate::core::operations::check_finite;
use crate::core::parser::{AstNode, Parser};
use crate::core::EvalResult;

/// Evaluates parsed expressions over `f64`
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Evaluates a tree
    pub fn evaluate(&self, node: &AstNode) -> EvalResult<f64> {
        match node {
            AstNode::Number(n) => check_finite(*n),
            AstNode::Negate(inner) => self.evaluate(inner).map(|v| -v),
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                op.apply(left_val, right_val)
            }
        }
    }

    /// Parses and evaluates a string
    pub fn evaluate_str(&self, input: &str) -> EvalResult<f64> {
        let ast = Parser::parse_str(input)?;
        self.evaluate(&ast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{EvalError, Operation};

    #[test]
    fn test_evaluate_number() {
        assert_eq!(Evaluator::new().evaluate(&AstNode::number(42.0)), Ok(42.0));
    }

    #[test]
    fn test_evaluate_negate() {
        let ast = AstNode::negate(AstNode::negate(AstNode::number(5.0)));
        assert_eq!(Evaluator::new().evaluate(&ast), Ok(5.0));
    }

    #[test]
    fn test_evaluate_tree() {
        let ast = AstNode::binary(
            AstNode::number(5.0),
            Operation::Add,
            AstNode::negate(AstNode::number(3.0)),
        );
        assert_eq!(Evaluator::new().evaluate(&ast), Ok(2.0));
    }

    #[test]
    fn test_evaluate_str_all_operations() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("10+5"), Ok(15.0));
        assert_eq!(eval.evaluate_str("10-3"), Ok(7.0));
        assert_eq!(eval.evaluate_str("6*7"), Ok(42.0));
        assert_eq!(eval.evaluate_str("5/2"), Ok(2.5));
        assert_eq!(eval.evaluate_str("17%5"), Ok(2.0));
    }

    #[test]
    fn test_evaluate_str_precedence() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("2+3*4"), Ok(14.0));
        assert_eq!(eval.evaluate_str("2*3+4"), Ok(10.0));
        assert_eq!(eval.evaluate_str("20/4/5"), Ok(1.0));
        assert_eq!(eval.evaluate_str("1-2+3"), Ok(2.0));
    }

    #[test]
    fn test_evaluate_str_signs() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("-3"), Ok(-3.0));
        assert_eq!(eval.evaluate_str("3+-3"), Ok(0.0));
        assert_eq!(eval.evaluate_str("3--3"), Ok(6.0));
        assert_eq!(eval.evaluate_str("-7%3"), Ok(2.0));
        assert_eq!(eval.evaluate_str("3.*-.5"), Ok(-1.5));
    }

    #[test]
    fn test_evaluate_str_leading_zeros() {
        let evaluator = Evaluator::new();
        assert_eq!(evaluator.evaluate_str("007"), Ok(7.0));
        assert_eq!(evaluator.evaluate_str("007+01.50"), Ok(8.5));
    }

    #[test]
    fn test_evaluate_str_errors() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("2/0"), Err(EvalError::DivisionByZero));
        assert_eq!(eval.evaluate_str("2%0"), Err(EvalError::ModuloByZero));
        assert_eq!(eval.evaluate_str("2/0.0"), Err(EvalError::DivisionByZero));
        assert_eq!(eval.evaluate_str("2+"), Err(EvalError::UnexpectedEnd));
        assert_eq!(eval.evaluate_str(""), Err(EvalError::Empty));
    }

    #[test]
    fn test_error_in_left_operand_propagates() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("1/0+5"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_overflow() {
        let literal = "9".repeat(400);
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str(&literal), Err(EvalError::NonFinite));
    }
}
