//! Double-dispatch visitor protocol
//!
//! Every node variant implements [`Accept`], forwarding to the matching
//! `visit_*` method of a [`Visitor`]. The visitor trait has one required
//! method per variant and no defaults: adding a variant forces every visitor
//! to decide what to do with it. A visitor that only supports a subset
//! (like the evaluator) returns an error from the handlers it doesn't support.

use crate::ast::*;

/// Behavior selected per node variant.
pub trait Visitor {
    /// Value produced for each visited node
    type Output;
    /// Error that aborts the traversal
    type Error;

    /// Handle an integer literal.
    fn visit_integer_literal(&mut self, node: &IntegerLiteral)
        -> Result<Self::Output, Self::Error>;
    /// Handle a string literal.
    fn visit_string_literal(&mut self, node: &StringLiteral) -> Result<Self::Output, Self::Error>;
    /// Handle a binary operation.
    fn visit_binary_operator(&mut self, node: &BinaryOperator)
        -> Result<Self::Output, Self::Error>;
    /// Handle a sequence.
    fn visit_sequence(&mut self, node: &Sequence) -> Result<Self::Output, Self::Error>;
    /// Handle a `let` block.
    fn visit_let(&mut self, node: &Let) -> Result<Self::Output, Self::Error>;
    /// Handle a variable use.
    fn visit_identifier(&mut self, node: &Identifier) -> Result<Self::Output, Self::Error>;
    /// Handle a conditional.
    fn visit_if_then_else(&mut self, node: &IfThenElse) -> Result<Self::Output, Self::Error>;
    /// Handle a variable declaration.
    fn visit_var_decl(&mut self, node: &VarDecl) -> Result<Self::Output, Self::Error>;
    /// Handle a function declaration.
    fn visit_fun_decl(&mut self, node: &FunDecl) -> Result<Self::Output, Self::Error>;
    /// Handle a function call.
    fn visit_fun_call(&mut self, node: &FunCall) -> Result<Self::Output, Self::Error>;
    /// Handle a `while` loop.
    fn visit_while_loop(&mut self, node: &WhileLoop) -> Result<Self::Output, Self::Error>;
    /// Handle a `for` loop.
    fn visit_for_loop(&mut self, node: &ForLoop) -> Result<Self::Output, Self::Error>;
    /// Handle a `break`.
    fn visit_break(&mut self, node: &Break) -> Result<Self::Output, Self::Error>;
    /// Handle an assignment.
    fn visit_assign(&mut self, node: &Assign) -> Result<Self::Output, Self::Error>;
}

/// Entry point for visitors: forward to the handler for this exact variant.
pub trait Accept {
    /// Dispatch `visitor` on `self`.
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error>;
}

macro_rules! impl_accept {
    ($($ty:ty => $method:ident),* $(,)?) => {
        $(
            impl Accept for $ty {
                fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
                    visitor.$method(self)
                }
            }
        )*
    };
}

impl_accept!(
    IntegerLiteral => visit_integer_literal,
    StringLiteral => visit_string_literal,
    BinaryOperator => visit_binary_operator,
    Sequence => visit_sequence,
    Let => visit_let,
    Identifier => visit_identifier,
    IfThenElse => visit_if_then_else,
    VarDecl => visit_var_decl,
    FunDecl => visit_fun_decl,
    FunCall => visit_fun_call,
    WhileLoop => visit_while_loop,
    ForLoop => visit_for_loop,
    Break => visit_break,
    Assign => visit_assign,
);

impl Accept for Expr {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        match self {
            Expr::IntegerLiteral(node) => node.accept(visitor),
            Expr::StringLiteral(node) => node.accept(visitor),
            Expr::BinaryOperator(node) => node.accept(visitor),
            Expr::Sequence(node) => node.accept(visitor),
            Expr::Let(node) => node.accept(visitor),
            Expr::Identifier(node) => node.accept(visitor),
            Expr::IfThenElse(node) => node.accept(visitor),
            Expr::WhileLoop(node) => node.accept(visitor),
            Expr::ForLoop(node) => node.accept(visitor),
            Expr::Break(node) => node.accept(visitor),
            Expr::Assign(node) => node.accept(visitor),
            Expr::FunCall(node) => node.accept(visitor),
        }
    }
}

impl Accept for Decl {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        match self {
            Decl::Var(node) => node.accept(visitor),
            Decl::Fun(node) => node.accept(visitor),
        }
    }
}

impl<T: Accept + ?Sized> Accept for Box<T> {
    fn accept<V: Visitor>(&self, visitor: &mut V) -> Result<V::Output, V::Error> {
        (**self).accept(visitor)
    }
}
