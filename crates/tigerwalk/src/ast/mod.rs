//! Syntax tree node model
//!
//! The tree arrives fully built and analyzed: types, escape flags, lexical
//! depths and back-references are filled in by the front end before any
//! visitor runs. Nothing in this crate mutates a node.
//!
//! Back-references (`Identifier::decl`, `FunCall::decl`, `Break::loop_ref`)
//! are plain ids. They are resolved through a [`SymbolTable`](crate::SymbolTable),
//! never through owning links, so the tree stays a strict tree.

pub mod build;
mod decl;
mod expr;
mod ops;

pub use decl::{Decl, FunDecl, Type, VarDecl};
pub use expr::{
    Assign, BinaryOperator, Break, Expr, ForLoop, FunCall, Identifier, IfThenElse,
    IntegerLiteral, Let, Sequence, StringLiteral, WhileLoop,
};
pub use ops::Operator;

use std::fmt;

/// Source position of a node, used for diagnostics and verbose annotations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// 1-based line (0 for synthetic nodes)
    pub line: u32,
    /// 1-based column (0 for synthetic nodes)
    pub column: u32,
}

impl Location {
    /// Create a location from a line and column.
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Identifier of a declaration (`var` or `function`), assigned by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclId(pub u32);

impl fmt::Display for DeclId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decl#{}", self.0)
    }
}

/// Identifier of a loop (`while` or `for`), assigned by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoopId(pub u32);

impl fmt::Display for LoopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "loop#{}", self.0)
    }
}

/// The closed set of node variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// `42`
    IntegerLiteral,
    /// `"text"`
    StringLiteral,
    /// `a + b`
    BinaryOperator,
    /// `(a; b)`
    Sequence,
    /// `let ... in ... end`
    Let,
    /// `x`
    Identifier,
    /// `if c then a else b`
    IfThenElse,
    /// `var x := e`
    VarDecl,
    /// `function f(...) = e`
    FunDecl,
    /// `f(a, b)`
    FunCall,
    /// `while c do e`
    WhileLoop,
    /// `for i := lo to hi do e`
    ForLoop,
    /// `break`
    Break,
    /// `x := e`
    Assign,
}

impl NodeKind {
    /// Human-readable name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::IntegerLiteral => "integer literal",
            NodeKind::StringLiteral => "string literal",
            NodeKind::BinaryOperator => "binary operation",
            NodeKind::Sequence => "sequence",
            NodeKind::Let => "let",
            NodeKind::Identifier => "identifier",
            NodeKind::IfThenElse => "if",
            NodeKind::VarDecl => "variable declaration",
            NodeKind::FunDecl => "function declaration",
            NodeKind::FunCall => "function call",
            NodeKind::WhileLoop => "while",
            NodeKind::ForLoop => "for",
            NodeKind::Break => "break",
            NodeKind::Assign => "assignment",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared identity of every tree element.
pub trait Node {
    /// Where the node starts in the source.
    fn loc(&self) -> Location;

    /// Which variant this node is.
    fn kind(&self) -> NodeKind;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_display() {
        assert_eq!(Location::new(3, 14).to_string(), "3:14");
        assert_eq!(Location::default().to_string(), "0:0");
    }

    #[test]
    fn test_node_kind_display() {
        assert_eq!(NodeKind::FunCall.to_string(), "function call");
        assert_eq!(NodeKind::IfThenElse.to_string(), "if");
    }

    #[test]
    fn test_ids_display() {
        assert_eq!(DeclId(4).to_string(), "decl#4");
        assert_eq!(LoopId(0).to_string(), "loop#0");
    }
}
