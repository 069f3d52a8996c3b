//! Tree construction helpers
//!
//! The front end owns parsing; these helpers exist so that callers which
//! synthesize trees (tests, tooling) don't have to spell out every field.
//! Every node starts at [`Location::default()`]; use [`Expr::at`] or set the
//! `loc` field to place it.
//!
//! ```
//! use tigerwalk::ast::build::*;
//! use tigerwalk::ast::Operator;
//!
//! let expr = binop(Operator::Plus, int(2), int(3));
//! assert_eq!(tigerwalk::evaluate(&expr).unwrap(), 5);
//! ```

use super::*;

impl Expr {
    /// Move the root of this expression to `loc`.
    pub fn at(mut self, loc: Location) -> Self {
        match &mut self {
            Expr::IntegerLiteral(node) => node.loc = loc,
            Expr::StringLiteral(node) => node.loc = loc,
            Expr::BinaryOperator(node) => node.loc = loc,
            Expr::Sequence(node) => node.loc = loc,
            Expr::Let(node) => node.loc = loc,
            Expr::Identifier(node) => node.loc = loc,
            Expr::IfThenElse(node) => node.loc = loc,
            Expr::WhileLoop(node) => node.loc = loc,
            Expr::ForLoop(node) => node.loc = loc,
            Expr::Break(node) => node.loc = loc,
            Expr::Assign(node) => node.loc = loc,
            Expr::FunCall(node) => node.loc = loc,
        }
        self
    }
}

/// Integer literal.
pub fn int(value: i32) -> Expr {
    Expr::IntegerLiteral(IntegerLiteral {
        loc: Location::default(),
        value,
    })
}

/// String literal.
pub fn string(value: impl Into<String>) -> Expr {
    Expr::StringLiteral(StringLiteral {
        loc: Location::default(),
        value: value.into(),
    })
}

/// Binary operation.
pub fn binop(op: Operator, left: Expr, right: Expr) -> Expr {
    Expr::BinaryOperator(BinaryOperator {
        loc: Location::default(),
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// Sequence node, for use as a `let` body.
pub fn sequence(exprs: Vec<Expr>) -> Sequence {
    Sequence {
        loc: Location::default(),
        exprs,
    }
}

/// Sequence expression.
pub fn seq(exprs: Vec<Expr>) -> Expr {
    Expr::Sequence(sequence(exprs))
}

/// `let decls in body end`.
pub fn let_in(decls: Vec<Decl>, body: Vec<Expr>) -> Expr {
    Expr::Let(Let {
        loc: Location::default(),
        decls,
        body: sequence(body),
    })
}

/// Unresolved identifier at depth 0.
pub fn ident(name: impl Into<String>) -> Expr {
    resolved_ident(name, None, 0)
}

/// Identifier with its analyzer annotations.
pub fn resolved_ident(name: impl Into<String>, decl: Option<DeclId>, depth: u32) -> Expr {
    Expr::Identifier(Identifier {
        loc: Location::default(),
        name: name.into(),
        decl,
        depth,
    })
}

/// Conditional.
pub fn if_then_else(condition: Expr, then_branch: Expr, else_branch: Expr) -> Expr {
    Expr::IfThenElse(IfThenElse {
        loc: Location::default(),
        condition: Box::new(condition),
        then_branch: Box::new(then_branch),
        else_branch: Box::new(else_branch),
    })
}

/// `while` loop.
pub fn while_loop(id: LoopId, condition: Expr, body: Expr) -> Expr {
    Expr::WhileLoop(WhileLoop {
        loc: Location::default(),
        id,
        condition: Box::new(condition),
        body: Box::new(body),
    })
}

/// `for` loop; `variable` should carry the initializer.
pub fn for_loop(id: LoopId, variable: VarDecl, high: Expr, body: Expr) -> Expr {
    Expr::ForLoop(ForLoop {
        loc: Location::default(),
        id,
        variable,
        high: Box::new(high),
        body: Box::new(body),
    })
}

/// `break`, optionally linked to its loop.
pub fn brk(loop_ref: Option<LoopId>) -> Expr {
    Expr::Break(Break {
        loc: Location::default(),
        loop_ref,
    })
}

/// Assignment.
pub fn assign(lhs: Expr, rhs: Expr) -> Expr {
    Expr::Assign(Assign {
        loc: Location::default(),
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
    })
}

/// Function call.
pub fn call(func_name: impl Into<String>, decl: Option<DeclId>, args: Vec<Expr>) -> Expr {
    Expr::FunCall(FunCall {
        loc: Location::default(),
        func_name: func_name.into(),
        decl,
        args,
    })
}

/// `var name := init`, typed by inference.
pub fn var(id: DeclId, name: impl Into<String>, resolved_type: Type, init: Expr) -> VarDecl {
    VarDecl {
        loc: Location::default(),
        id,
        name: name.into(),
        type_name: None,
        expr: Some(Box::new(init)),
        escapes: false,
        resolved_type,
        depth: 0,
    }
}

/// Function parameter (no initializer).
pub fn param(id: DeclId, name: impl Into<String>, type_name: impl Into<String>) -> VarDecl {
    let type_name = type_name.into();
    let resolved_type = match type_name.as_str() {
        "int" => Type::Int,
        "string" => Type::String,
        _ => Type::Undef,
    };
    VarDecl {
        loc: Location::default(),
        id,
        name: name.into(),
        type_name: Some(type_name),
        expr: None,
        escapes: false,
        resolved_type,
        depth: 0,
    }
}

/// Function declaration whose external name equals its source name.
pub fn fun(
    id: DeclId,
    name: impl Into<String>,
    params: Vec<VarDecl>,
    type_name: Option<&str>,
    body: Expr,
) -> FunDecl {
    let name = name.into();
    FunDecl {
        loc: Location::default(),
        id,
        external_name: name.clone(),
        name,
        params,
        type_name: type_name.map(str::to_string),
        expr: Box::new(body),
        depth: 0,
    }
}
