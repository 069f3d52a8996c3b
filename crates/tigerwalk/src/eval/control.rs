//! Sequences and conditionals

use super::Evaluator;
use crate::ast::{IfThenElse, Sequence};
use crate::error::EvalError;

/// Evaluate every expression in order; the last one is the value.
pub fn eval_sequence(ev: &mut Evaluator<'_>, node: &Sequence) -> Result<i32, EvalError> {
    let Some((last, init)) = node.exprs.split_last() else {
        return Err(EvalError::EmptySequence { loc: node.loc });
    };

    for expr in init {
        ev.eval(expr)?;
    }
    ev.eval(last)
}

/// Evaluate the condition, then exactly one branch.
pub fn eval_if(ev: &mut Evaluator<'_>, node: &IfThenElse) -> Result<i32, EvalError> {
    if ev.eval(&node.condition)? != 0 {
        ev.eval(&node.then_branch)
    } else {
        ev.eval(&node.else_branch)
    }
}
