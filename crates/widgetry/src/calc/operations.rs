//! Arithmetic operations with explicit failure values

use crate::calc::{CalcError, CalcResult};

/// Binary operators the calculator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Modulo (%)
    Modulo,
}

impl Operation {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulo => "%",
        }
    }

    /// Returns the precedence level for operator ordering (higher = evaluated first)
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Add | Self::Subtract => 1,
            Self::Multiply | Self::Divide | Self::Modulo => 2,
        }
    }

    /// Returns true for operators that may also prefix an operand as a sign
    #[must_use]
    pub const fn is_sign(&self) -> bool {
        matches!(self, Self::Add | Self::Subtract)
    }
}

/// Stateless arithmetic with overflow and NaN checks on every result
#[derive(Debug, Default, Clone, Copy)]
pub struct Calculator;

impl Calculator {
    /// Performs an operation on two operands
    pub fn calculate(a: f64, b: f64, op: Operation) -> CalcResult<f64> {
        match op {
            Operation::Add => Self::check_overflow(a + b),
            Operation::Subtract => Self::check_overflow(a - b),
            Operation::Multiply => Self::check_overflow(a * b),
            Operation::Divide => Self::divide(a, b),
            Operation::Modulo => Self::modulo(a, b),
        }
    }

    /// Division: a / b
    pub fn divide(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Self::check_overflow(a / b)
    }

    /// Modulo: a % b, sign follows the dividend
    pub fn modulo(a: f64, b: f64) -> CalcResult<f64> {
        if b == 0.0 {
            return Err(CalcError::DivisionByZero);
        }
        Self::check_overflow(a % b)
    }

    /// Percent: a / 100
    pub fn percent(a: f64) -> CalcResult<f64> {
        Self::check_overflow(a / 100.0)
    }

    /// Square root, negative input is an invalid result
    pub fn square_root(a: f64) -> CalcResult<f64> {
        if a < 0.0 {
            return Err(CalcError::InvalidResult(format!("square root of {a}")));
        }
        Self::check_overflow(a.sqrt())
    }

    /// Checks for overflow (infinity or NaN)
    fn check_overflow(result: f64) -> CalcResult<f64> {
        if result.is_nan() {
            Err(CalcError::InvalidResult("NaN".into()))
        } else if result.is_infinite() {
            Err(CalcError::Overflow)
        } else {
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- Operation enum tests ---

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "*");
        assert_eq!(Operation::Divide.symbol(), "/");
        assert_eq!(Operation::Modulo.symbol(), "%");
    }

    #[test]
    fn test_operation_precedence() {
        assert_eq!(Operation::Add.precedence(), 1);
        assert_eq!(Operation::Subtract.precedence(), 1);
        assert_eq!(Operation::Multiply.precedence(), 2);
        assert_eq!(Operation::Divide.precedence(), 2);
        assert_eq!(Operation::Modulo.precedence(), 2);
    }

    #[test]
    fn test_operation_is_sign() {
        assert!(Operation::Add.is_sign());
        assert!(Operation::Subtract.is_sign());
        assert!(!Operation::Modulo.is_sign());
    }

    // --- Calculator tests ---

    #[test]
    fn test_calculate_basic() {
        assert_eq!(Calculator::calculate(2.0, 3.0, Operation::Add), Ok(5.0));
        assert_eq!(Calculator::calculate(2.0, 3.0, Operation::Subtract), Ok(-1.0));
        assert_eq!(Calculator::calculate(6.0, 7.0, Operation::Multiply), Ok(42.0));
        assert_eq!(Calculator::calculate(20.0, 4.0, Operation::Divide), Ok(5.0));
        assert_eq!(Calculator::calculate(17.0, 5.0, Operation::Modulo), Ok(2.0));
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(Calculator::divide(1.0, 0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_modulo_by_zero() {
        assert_eq!(Calculator::modulo(1.0, 0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_modulo_negative_dividend() {
        assert_eq!(Calculator::modulo(-7.0, 3.0), Ok(-1.0));
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            Calculator::calculate(f64::MAX, f64::MAX, Operation::Add),
            Err(CalcError::Overflow)
        );
    }

    #[test]
    fn test_percent() {
        assert_eq!(Calculator::percent(50.0), Ok(0.5));
    }

    #[test]
    fn test_square_root() {
        assert_eq!(Calculator::square_root(16.0), Ok(4.0));
        assert!(matches!(
            Calculator::square_root(-4.0),
            Err(CalcError::InvalidResult(_))
        ));
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e6f64..1e6, b in -1e6f64..1e6) {
            prop_assert_eq!(
                Calculator::calculate(a, b, Operation::Add),
                Calculator::calculate(b, a, Operation::Add)
            );
        }

        #[test]
        fn prop_divide_nonzero_ok(a in -1e6f64..1e6, b in 1e-3f64..1e6) {
            prop_assert!(Calculator::divide(a, b).is_ok());
        }
    }
}
