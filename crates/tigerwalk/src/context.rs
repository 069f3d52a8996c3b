//! Traversal configuration

/// Configuration for evaluation.
///
/// Passed to [`Evaluator`](crate::Evaluator) and consulted on every node.
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Maximum expression nesting (stack overflow protection)
    pub max_depth: usize,

    /// Whether to emit a `trace` event per evaluated node
    pub trace: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: 1000,
            trace: false,
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Default::default()
        }
    }

    /// Enable per-node tracing.
    pub fn traced(mut self) -> Self {
        self.trace = true;
        self
    }
}

/// Configuration for printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Append scoping and escape annotations as `/* ... */` comments
    pub verbose: bool,

    /// Spaces per indentation level
    pub indent_width: usize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            indent_width: 2,
        }
    }
}

impl PrintOptions {
    /// Plain output, two-space indentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Annotated output, two-space indentation.
    pub fn verbose() -> Self {
        Self {
            verbose: true,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_context_defaults() {
        let ctx = EvalContext::new();
        assert_eq!(ctx.max_depth, 1000);
        assert!(!ctx.trace);
    }

    #[test]
    fn test_eval_context_builders() {
        let ctx = EvalContext::with_max_depth(8).traced();
        assert_eq!(ctx.max_depth, 8);
        assert!(ctx.trace);
    }

    #[test]
    fn test_print_options() {
        assert!(!PrintOptions::new().verbose);
        assert!(PrintOptions::verbose().verbose);
        assert_eq!(PrintOptions::verbose().indent_width, 2);
    }
}
