//! Error types for tree traversal
//!
//! Every error aborts the traversal that raised it; there is no partial
//! recovery inside a single `print` or `evaluate` call.

use thiserror::Error;

use crate::ast::{DeclId, Location, LoopId, NodeKind, Type};

/// Errors raised while building or indexing a tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AstError {
    /// An operator symbol outside the fixed operator set
    #[error("unknown binary operator `{symbol}`")]
    UnknownOperator {
        /// The offending symbol
        symbol: String,
    },

    /// Two declarations in one tree claim the same id
    #[error("duplicate declaration id {id} at {loc}")]
    DuplicateDecl {
        /// The reused id
        id: DeclId,
        /// Location of the second declaration
        loc: Location,
    },

    /// Two loops in one tree claim the same id
    #[error("duplicate loop id {id} at {loc}")]
    DuplicateLoop {
        /// The reused id
        id: LoopId,
        /// Location of the second loop
        loc: Location,
    },
}

/// Errors raised by the printer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrintError {
    /// The analyzer left a declaration typed `void`/`undef` with no surface
    /// annotation to fall back on
    #[error("internal error: attempting to print the type `{ty}` at {loc}")]
    SentinelType {
        /// The sentinel type
        ty: Type,
        /// Location of the declaration
        loc: Location,
    },

    /// A `for` loop variable without its initializer
    #[error("internal error: for loop variable `{name}` at {loc} has no initializer")]
    MissingLoopInitializer {
        /// Loop variable name
        name: String,
        /// Location of the loop variable
        loc: Location,
    },
}

/// Errors raised by the evaluator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The evaluator only handles literals, binary operators, sequences and
    /// conditionals
    #[error("evaluation error: unsupported {kind} at {loc}")]
    UnsupportedNode {
        /// Variant that reached the evaluator
        kind: NodeKind,
        /// Location of the node
        loc: Location,
    },

    /// Right operand of `/` evaluated to zero
    #[error("division by zero at {loc}")]
    DivisionByZero {
        /// Location of the division
        loc: Location,
    },

    /// A sequence with no sub-expressions has no value
    #[error("evaluation error: empty sequence at {loc}")]
    EmptySequence {
        /// Location of the sequence
        loc: Location,
    },

    /// Nesting exceeded the configured limit
    #[error("evaluation depth {depth} exceeds maximum {max}")]
    DepthLimitExceeded {
        /// Depth that was about to be entered
        depth: usize,
        /// Configured maximum
        max: usize,
    },
}
