//! Declaration variants

use std::fmt;

use super::{DeclId, Expr, Location, Node, NodeKind};

/// Type attached to a declaration by the type checker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Type {
    /// `int`
    Int,
    /// `string`
    String,
    /// No value
    Void,
    /// Not yet typed
    #[default]
    Undef,
}

impl Type {
    /// Surface-syntax name of the type.
    ///
    /// Returns `None` for the `Void` and `Undef` sentinels, which have no
    /// spelling in the language.
    pub fn name(self) -> Option<&'static str> {
        match self {
            Type::Int => Some("int"),
            Type::String => Some("string"),
            Type::Void | Type::Undef => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => f.write_str("void"),
            Type::Undef => f.write_str("undef"),
            other => f.write_str(other.name().unwrap_or_default()),
        }
    }
}

/// A declaration inside a `let` block.
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    /// `var name := expr`
    Var(VarDecl),
    /// `function name(params) = expr`
    Fun(FunDecl),
}

impl Node for Decl {
    fn loc(&self) -> Location {
        match self {
            Decl::Var(decl) => decl.loc,
            Decl::Fun(decl) => decl.loc,
        }
    }

    fn kind(&self) -> NodeKind {
        match self {
            Decl::Var(_) => NodeKind::VarDecl,
            Decl::Fun(_) => NodeKind::FunDecl,
        }
    }
}

/// Variable, parameter, or loop-variable declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    /// Source position
    pub loc: Location,
    /// Id that identifiers back-reference
    pub id: DeclId,
    /// Declared name
    pub name: String,
    /// Type annotation as written in the source
    pub type_name: Option<String>,
    /// Initializer; absent for function parameters
    pub expr: Option<Box<Expr>>,
    /// Set by escape analysis when a nested function reads the variable
    pub escapes: bool,
    /// Type assigned by the type checker
    pub resolved_type: Type,
    /// Lexical depth of the declaring scope
    pub depth: u32,
}

impl Node for VarDecl {
    fn loc(&self) -> Location {
        self.loc
    }

    fn kind(&self) -> NodeKind {
        NodeKind::VarDecl
    }
}

impl From<VarDecl> for Decl {
    fn from(decl: VarDecl) -> Self {
        Decl::Var(decl)
    }
}

/// Function declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FunDecl {
    /// Source position
    pub loc: Location,
    /// Id that calls back-reference
    pub id: DeclId,
    /// Name as written in the source
    pub name: String,
    /// Link-time name; differs from `name` once nested functions are mangled
    pub external_name: String,
    /// Parameters, in order
    pub params: Vec<VarDecl>,
    /// Declared return type
    pub type_name: Option<String>,
    /// Function body
    pub expr: Box<Expr>,
    /// Lexical depth of the declaring scope
    pub depth: u32,
}

impl Node for FunDecl {
    fn loc(&self) -> Location {
        self.loc
    }

    fn kind(&self) -> NodeKind {
        NodeKind::FunDecl
    }
}

impl From<FunDecl> for Decl {
    fn from(decl: FunDecl) -> Self {
        Decl::Fun(decl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Type::Int.name(), Some("int"));
        assert_eq!(Type::String.name(), Some("string"));
        assert_eq!(Type::Void.name(), None);
        assert_eq!(Type::Undef.name(), None);
    }

    #[test]
    fn test_type_display_covers_sentinels() {
        assert_eq!(Type::Void.to_string(), "void");
        assert_eq!(Type::Undef.to_string(), "undef");
        assert_eq!(Type::String.to_string(), "string");
    }
}
