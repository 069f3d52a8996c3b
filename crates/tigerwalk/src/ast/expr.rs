//! Expression variants

use super::{DeclId, Location, LoopId, Node, NodeKind, Operator, VarDecl};

/// Any node that can appear where a value or effect is expected.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Integer literal
    IntegerLiteral(IntegerLiteral),
    /// String literal
    StringLiteral(StringLiteral),
    /// Infix binary operation
    BinaryOperator(BinaryOperator),
    /// Parenthesized sequence
    Sequence(Sequence),
    /// `let` block
    Let(Let),
    /// Variable use
    Identifier(Identifier),
    /// Conditional
    IfThenElse(IfThenElse),
    /// `while` loop
    WhileLoop(WhileLoop),
    /// `for` loop
    ForLoop(ForLoop),
    /// `break`
    Break(Break),
    /// Assignment
    Assign(Assign),
    /// Function call
    FunCall(FunCall),
}

/// `42`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
    /// Source position
    pub loc: Location,
    /// Literal value
    pub value: i32,
}

/// `"text"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// Source position
    pub loc: Location,
    /// Unescaped contents
    pub value: String,
}

/// `left OP right`
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperator {
    /// Source position
    pub loc: Location,
    /// Operator tag
    pub op: Operator,
    /// Left operand
    pub left: Box<Expr>,
    /// Right operand
    pub right: Box<Expr>,
}

/// `(e1; e2; ...)`
///
/// May be empty when printed. Evaluating an empty sequence is an error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    /// Source position
    pub loc: Location,
    /// Sub-expressions in evaluation order
    pub exprs: Vec<Expr>,
}

/// `let decls in body end`
#[derive(Debug, Clone, PartialEq)]
pub struct Let {
    /// Source position
    pub loc: Location,
    /// Declarations, in order
    pub decls: Vec<super::Decl>,
    /// Body expressions
    pub body: Sequence,
}

/// A variable use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    /// Source position
    pub loc: Location,
    /// Variable name
    pub name: String,
    /// Declaration this use resolves to, if resolution succeeded upstream
    pub decl: Option<DeclId>,
    /// Lexical nesting level at the use site
    pub depth: u32,
}

/// `if condition then then_branch else else_branch`
#[derive(Debug, Clone, PartialEq)]
pub struct IfThenElse {
    /// Source position
    pub loc: Location,
    /// Condition (non-zero is true)
    pub condition: Box<Expr>,
    /// Taken when the condition is non-zero
    pub then_branch: Box<Expr>,
    /// Taken when the condition is zero
    pub else_branch: Box<Expr>,
}

/// `while condition do body`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileLoop {
    /// Source position
    pub loc: Location,
    /// Id that `break` back-references point at
    pub id: LoopId,
    /// Loop condition
    pub condition: Box<Expr>,
    /// Loop body
    pub body: Box<Expr>,
}

/// `for variable := init to high do body`
#[derive(Debug, Clone, PartialEq)]
pub struct ForLoop {
    /// Source position
    pub loc: Location,
    /// Id that `break` back-references point at
    pub id: LoopId,
    /// Loop variable, carrying the initializer
    pub variable: VarDecl,
    /// Inclusive upper bound
    pub high: Box<Expr>,
    /// Loop body
    pub body: Box<Expr>,
}

/// `break`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Break {
    /// Source position
    pub loc: Location,
    /// Enclosing loop, for annotation only
    pub loop_ref: Option<LoopId>,
}

/// `lhs := rhs`
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    /// Source position
    pub loc: Location,
    /// Storage location being written
    pub lhs: Box<Expr>,
    /// Assigned value
    pub rhs: Box<Expr>,
}

/// `func_name(args...)`
#[derive(Debug, Clone, PartialEq)]
pub struct FunCall {
    /// Source position
    pub loc: Location,
    /// Called function name
    pub func_name: String,
    /// Function declaration this call resolves to
    pub decl: Option<DeclId>,
    /// Arguments, in order
    pub args: Vec<Expr>,
}

macro_rules! impl_node {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Node for $ty {
                fn loc(&self) -> Location {
                    self.loc
                }

                fn kind(&self) -> NodeKind {
                    NodeKind::$ty
                }
            }

            impl From<$ty> for Expr {
                fn from(node: $ty) -> Self {
                    Expr::$ty(node)
                }
            }
        )*

        impl Node for Expr {
            fn loc(&self) -> Location {
                match self {
                    $(Expr::$ty(node) => node.loc(),)*
                }
            }

            fn kind(&self) -> NodeKind {
                match self {
                    $(Expr::$ty(node) => node.kind(),)*
                }
            }
        }
    };
}

impl_node!(
    IntegerLiteral,
    StringLiteral,
    BinaryOperator,
    Sequence,
    Let,
    Identifier,
    IfThenElse,
    WhileLoop,
    ForLoop,
    Break,
    Assign,
    FunCall,
);
