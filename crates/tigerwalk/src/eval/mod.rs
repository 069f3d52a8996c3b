//! Integer evaluation
//!
//! The evaluator is deliberately partial: it computes a value for integer
//! literals, binary operators, sequences and conditionals, and rejects every
//! other variant with [`EvalError::UnsupportedNode`]. It is a calculator over
//! the tree, not an interpreter for the language.

pub mod binary;
pub mod control;

use crate::ast::*;
use crate::context::EvalContext;
use crate::error::EvalError;
use crate::visitor::{Accept, Visitor};

/// Evaluate an expression with the default context.
///
/// ```
/// use tigerwalk::ast::build::*;
/// use tigerwalk::ast::Operator;
///
/// let expr = if_then_else(
///     binop(Operator::Lt, int(1), int(2)),
///     int(10),
///     binop(Operator::Divide, int(1), int(0)),
/// );
/// assert_eq!(tigerwalk::evaluate(&expr).unwrap(), 10);
/// ```
pub fn evaluate(expr: &Expr) -> Result<i32, EvalError> {
    evaluate_with(expr, &EvalContext::default())
}

/// Evaluate an expression under `ctx`.
pub fn evaluate_with(expr: &Expr, ctx: &EvalContext) -> Result<i32, EvalError> {
    tracing::debug!(kind = %expr.kind(), loc = %expr.loc(), "evaluating");
    let result = Evaluator::new(ctx).eval(expr);
    match &result {
        Ok(value) => {
            tracing::debug!(value = *value, "evaluated");
        }
        Err(err) => {
            tracing::debug!(error = %err, "evaluation failed");
        }
    }
    result
}

/// Visitor computing the integer value of an expression.
#[derive(Debug)]
pub struct Evaluator<'c> {
    ctx: &'c EvalContext,
    depth: usize,
}

impl<'c> Evaluator<'c> {
    /// Create an evaluator at nesting depth 0.
    pub fn new(ctx: &'c EvalContext) -> Self {
        Self { ctx, depth: 0 }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Evaluate a sub-expression one level deeper.
    pub fn eval(&mut self, expr: &Expr) -> Result<i32, EvalError> {
        if self.depth >= self.ctx.max_depth {
            return Err(EvalError::DepthLimitExceeded {
                depth: self.depth + 1,
                max: self.ctx.max_depth,
            });
        }
        if self.ctx.trace {
            tracing::trace!(kind = %expr.kind(), loc = %expr.loc(), depth = self.depth, "eval");
        }

        self.depth += 1;
        let result = expr.accept(self);
        self.depth -= 1;

        result
    }
}

fn unsupported(node: &impl Node) -> Result<i32, EvalError> {
    Err(EvalError::UnsupportedNode {
        kind: node.kind(),
        loc: node.loc(),
    })
}

impl Visitor for Evaluator<'_> {
    type Output = i32;
    type Error = EvalError;

    fn visit_integer_literal(&mut self, node: &IntegerLiteral) -> Result<i32, EvalError> {
        Ok(node.value)
    }

    fn visit_binary_operator(&mut self, node: &BinaryOperator) -> Result<i32, EvalError> {
        binary::eval_binary(self, node)
    }

    fn visit_sequence(&mut self, node: &Sequence) -> Result<i32, EvalError> {
        control::eval_sequence(self, node)
    }

    fn visit_if_then_else(&mut self, node: &IfThenElse) -> Result<i32, EvalError> {
        control::eval_if(self, node)
    }

    // Everything below is outside the evaluated subset

    fn visit_string_literal(&mut self, node: &StringLiteral) -> Result<i32, EvalError> {
        unsupported(node)
    }

    fn visit_let(&mut self, node: &Let) -> Result<i32, EvalError> {
        unsupported(node)
    }

    fn visit_identifier(&mut self, node: &Identifier) -> Result<i32, EvalError> {
        unsupported(node)
    }

    fn visit_var_decl(&mut self, node: &VarDecl) -> Result<i32, EvalError> {
        unsupported(node)
    }

    fn visit_fun_decl(&mut self, node: &FunDecl) -> Result<i32, EvalError> {
        unsupported(node)
    }

    fn visit_fun_call(&mut self, node: &FunCall) -> Result<i32, EvalError> {
        unsupported(node)
    }

    fn visit_while_loop(&mut self, node: &WhileLoop) -> Result<i32, EvalError> {
        unsupported(node)
    }

    fn visit_for_loop(&mut self, node: &ForLoop) -> Result<i32, EvalError> {
        unsupported(node)
    }

    fn visit_break(&mut self, node: &Break) -> Result<i32, EvalError> {
        unsupported(node)
    }

    fn visit_assign(&mut self, node: &Assign) -> Result<i32, EvalError> {
        unsupported(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::build::*;

    #[test]
    fn test_literal() {
        assert_eq!(evaluate(&int(-17)), Ok(-17));
    }

    #[test]
    fn test_depth_is_restored_after_error() {
        let ctx = EvalContext::default();
        let mut evaluator = Evaluator::new(&ctx);
        let expr = seq(vec![int(1), binop(Operator::Divide, int(1), int(0))]);
        assert!(evaluator.eval(&expr).is_err());
        assert_eq!(evaluator.depth(), 0);
    }

    #[test]
    fn test_depth_limit() {
        let ctx = EvalContext::with_max_depth(2);
        let shallow = binop(Operator::Plus, int(1), int(1));
        assert_eq!(evaluate_with(&shallow, &ctx), Ok(2));

        let deep = seq(vec![seq(vec![int(1)])]);
        assert_eq!(
            evaluate_with(&deep, &ctx),
            Err(EvalError::DepthLimitExceeded { depth: 3, max: 2 })
        );
    }

    #[test]
    fn test_unsupported_reports_kind_and_loc() {
        let expr = call("print", None, vec![string("hi")]).at(Location::new(3, 7));
        assert_eq!(
            evaluate(&expr),
            Err(EvalError::UnsupportedNode {
                kind: NodeKind::FunCall,
                loc: Location::new(3, 7),
            })
        );
    }

    #[test]
    fn test_traced_context_evaluates_the_same() {
        let ctx = EvalContext::new().traced();
        let expr = binop(Operator::Times, int(6), int(7));
        assert_eq!(evaluate_with(&expr, &ctx), Ok(42));
    }
}
