//! # Tigerwalk
//!
//! Visitors over an analyzed Tiger syntax tree.
//!
//! The front end (lexer, parser, semantic analysis, escape analysis) hands
//! over a tree whose nodes already carry their types, escape flags, lexical
//! depths and back-references. Tigerwalk traverses it:
//!
//! - **Printer**: renders the tree as source text, optionally annotated with
//!   the resolved scoping facts
//! - **Evaluator**: computes the `i32` value of the arithmetic and
//!   control-flow subset (literals, binary operators, sequences, `if`)
//! - **Symbol table**: resolves id-based back-references for the printer
//!
//! All three are [`Visitor`] implementations dispatched through
//! [`Accept::accept`]. None of them mutates the tree.
//!
//! ```
//! use tigerwalk::ast::build::*;
//! use tigerwalk::ast::Operator;
//!
//! let expr = seq(vec![int(1), binop(Operator::Plus, int(2), int(3))]);
//! assert_eq!(tigerwalk::evaluate(&expr).unwrap(), 5);
//! assert_eq!(tigerwalk::print(&expr, false).unwrap(), "(\n  1;\n  (2+3)\n)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod context;
pub mod error;
pub mod eval;
pub mod printer;
pub mod symbols;
pub mod visitor;

// Re-export main types
pub use ast::{Decl, Expr, Location, Node, NodeKind, Operator, Type};
pub use context::{EvalContext, PrintOptions};
pub use error::{AstError, EvalError, PrintError};
pub use eval::{evaluate, evaluate_with, Evaluator};
pub use printer::{print, print_with, IndentGuard, Printer};
pub use symbols::{DeclSite, SymbolTable};
pub use visitor::{Accept, Visitor};

/// Tigerwalk version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
