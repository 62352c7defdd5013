//! AST evaluator

use crate::calc::parser::{AstNode, Parser};
use crate::calc::{CalcResult, Calculator};

/// Evaluator for AST expressions
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Creates a new evaluator
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Evaluates an AST node and returns the result
    pub fn evaluate(&self, node: &AstNode) -> CalcResult<f64> {
        match node {
            AstNode::Number(n) => Ok(*n),
            AstNode::Negate(inner) => Ok(-self.evaluate(inner)?),
            AstNode::Percent(inner) => Calculator::percent(self.evaluate(inner)?),
            AstNode::BinaryOp { left, op, right } => {
                let left_val = self.evaluate(left)?;
                let right_val = self.evaluate(right)?;
                Calculator::calculate(left_val, right_val, *op)
            }
        }
    }

    /// Evaluates a string expression
    pub fn evaluate_str(&self, input: &str) -> CalcResult<f64> {
        let ast = Parser::parse_str(input)?;
        self.evaluate(&ast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::{CalcError, Operation};

    // ===== Basic evaluation tests =====

    #[test]
    fn test_evaluate_number() {
        assert_eq!(Evaluator::new().evaluate(&AstNode::number(42.0)), Ok(42.0));
    }

    #[test]
    fn test_evaluate_double_negative() {
        let ast = AstNode::negate(AstNode::negate(AstNode::number(5.0)));
        assert_eq!(Evaluator::new().evaluate(&ast), Ok(5.0));
    }

    #[test]
    fn test_evaluate_percent_node() {
        let ast = AstNode::percent(AstNode::number(25.0));
        assert_eq!(Evaluator::new().evaluate(&ast), Ok(0.25));
    }

    #[test]
    fn test_evaluate_binary() {
        let ast = AstNode::binary(AstNode::number(12.0), Operation::Divide, AstNode::number(4.0));
        assert_eq!(Evaluator::new().evaluate(&ast), Ok(3.0));
    }

    // ===== String evaluation tests =====

    #[test]
    fn test_evaluate_str_precedence() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("2 + 3 * 4"), Ok(14.0));
        assert_eq!(eval.evaluate_str("(2 + 3) * 4"), Ok(20.0));
        assert_eq!(eval.evaluate_str("42 * (3 + 7)"), Ok(420.0));
    }

    #[test]
    fn test_evaluate_str_modulo_vs_percent() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("10%3"), Ok(1.0));
        assert_eq!(eval.evaluate_str("10%"), Ok(0.1));
        assert_eq!(eval.evaluate_str("10 % -3"), Ok(1.0));
        assert_eq!(eval.evaluate_str("50%*2"), Ok(1.0));
        assert_eq!(eval.evaluate_str("(10)%"), Ok(0.1));
    }

    #[test]
    fn test_evaluate_str_unary() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("-5 + 10"), Ok(5.0));
        assert_eq!(eval.evaluate_str("-(2 + 3)"), Ok(-5.0));
        assert_eq!(eval.evaluate_str("+7"), Ok(7.0));
    }

    #[test]
    fn test_evaluate_str_division_by_zero() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("1 / 0"), Err(CalcError::DivisionByZero));
        assert_eq!(eval.evaluate_str("1 / (2 - 2)"), Err(CalcError::DivisionByZero));
        assert_eq!(eval.evaluate_str("5 % 0"), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_evaluate_str_error_short_circuits() {
        let eval = Evaluator::new();
        assert_eq!(eval.evaluate_str("(1 / 0) + 1"), Err(CalcError::DivisionByZero));
    }
}
