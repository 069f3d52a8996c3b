//! Binary operation evaluation

use super::Evaluator;
use crate::ast::{BinaryOperator, Location, Operator};
use crate::error::EvalError;

/// Evaluate both operands, left first, then combine them.
///
/// Neither operand is skipped: there are no short-circuit operators in the
/// evaluated subset.
pub fn eval_binary(ev: &mut Evaluator<'_>, node: &BinaryOperator) -> Result<i32, EvalError> {
    let left = ev.eval(&node.left)?;
    let right = ev.eval(&node.right)?;
    apply(node.op, left, right, node.loc)
}

/// Combine two evaluated operands.
///
/// Arithmetic wraps at 32 bits. Comparisons yield `1` or `0`.
pub fn apply(op: Operator, left: i32, right: i32, loc: Location) -> Result<i32, EvalError> {
    let value = match op {
        Operator::Plus => left.wrapping_add(right),
        Operator::Minus => left.wrapping_sub(right),
        Operator::Times => left.wrapping_mul(right),
        Operator::Divide => {
            if right == 0 {
                return Err(EvalError::DivisionByZero { loc });
            }
            left.wrapping_div(right)
        }
        Operator::Eq => i32::from(left == right),
        Operator::Neq => i32::from(left != right),
        Operator::Lt => i32::from(left < right),
        Operator::Le => i32::from(left <= right),
        Operator::Gt => i32::from(left > right),
        Operator::Ge => i32::from(left >= right),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(op: Operator, left: i32, right: i32) -> i32 {
        apply(op, left, right, Location::default()).unwrap()
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(ok(Operator::Plus, 2, 3), 5);
        assert_eq!(ok(Operator::Minus, 2, 3), -1);
        assert_eq!(ok(Operator::Times, -4, 3), -12);
        assert_eq!(ok(Operator::Divide, 7, 2), 3);
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(ok(Operator::Divide, -7, 2), -3);
        assert_eq!(ok(Operator::Divide, 7, -2), -3);
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(ok(Operator::Plus, i32::MAX, 1), i32::MIN);
        assert_eq!(ok(Operator::Minus, i32::MIN, 1), i32::MAX);
        assert_eq!(ok(Operator::Times, i32::MAX, 2), -2);
        assert_eq!(ok(Operator::Divide, i32::MIN, -1), i32::MIN);
    }

    #[test]
    fn test_division_by_zero() {
        let loc = Location::new(5, 12);
        assert_eq!(
            apply(Operator::Divide, 1, 0, loc),
            Err(EvalError::DivisionByZero { loc })
        );
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(ok(Operator::Eq, 3, 3), 1);
        assert_eq!(ok(Operator::Eq, 3, 4), 0);
        assert_eq!(ok(Operator::Neq, 3, 4), 1);
        assert_eq!(ok(Operator::Lt, 3, 4), 1);
        assert_eq!(ok(Operator::Lt, 4, 4), 0);
        assert_eq!(ok(Operator::Le, 4, 4), 1);
        assert_eq!(ok(Operator::Gt, 5, 4), 1);
        assert_eq!(ok(Operator::Ge, 3, 4), 0);
    }
}
