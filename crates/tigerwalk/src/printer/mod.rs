//! Source reconstruction
//!
//! The [`Printer`] renders a tree back to Tiger concrete syntax. With
//! `verbose` set it also surfaces what the analyzer attached to the tree:
//!
//! - `x/*decl:3:9 depth_diff:1*/` for a variable read one scope away from
//!   its declaration
//! - `var x/*e*/ := 0` for an escaping variable
//! - `function f/*f_1*/(...)` when the link-time name differs
//! - `break/*loop:2:5*/` for the loop a `break` leaves
//!
//! Annotations are comments, so verbose output still reads as source.

mod escape;
mod indent;

pub use escape::quote;
pub use indent::IndentGuard;

use crate::ast::*;
use crate::context::PrintOptions;
use crate::error::PrintError;
use crate::symbols::SymbolTable;
use crate::visitor::{Accept, Visitor};

/// Print `node`, resolving back-references against the tree itself.
///
/// Only declarations and loops inside `node` are visible to the verbose
/// annotations: a reference to something declared outside the printed
/// subtree prints bare. Use [`print_with`] and the analyzer's table to
/// annotate such references. When two nodes claim the same id, the first
/// one in source order is used for annotations.
///
/// ```
/// use tigerwalk::ast::build::*;
/// use tigerwalk::ast::Operator;
///
/// let expr = binop(Operator::Times, int(6), binop(Operator::Minus, int(9), int(2)));
/// assert_eq!(tigerwalk::print(&expr, false).unwrap(), "(6*(9-2))");
/// ```
pub fn print<N: Accept + ?Sized>(node: &N, verbose: bool) -> Result<String, PrintError> {
    let symbols = if verbose {
        SymbolTable::collect_first_wins(node)
    } else {
        SymbolTable::new()
    };
    let options = PrintOptions {
        verbose,
        ..Default::default()
    };
    print_with(node, &symbols, &options)
}

/// Print `node`, resolving back-references against an external table.
pub fn print_with<N: Accept + ?Sized>(
    node: &N,
    symbols: &SymbolTable,
    options: &PrintOptions,
) -> Result<String, PrintError> {
    tracing::debug!(verbose = options.verbose, "printing tree");
    let mut printer = Printer::new(symbols, options.clone());
    node.accept(&mut printer)?;
    let out = printer.finish();
    tracing::debug!(bytes = out.len(), "printed tree");
    Ok(out)
}

/// Visitor that accumulates the textual form of a tree.
pub struct Printer<'s> {
    out: String,
    indent: usize,
    options: PrintOptions,
    symbols: &'s SymbolTable,
}

impl<'s> Printer<'s> {
    /// Create a printer with an empty buffer at indentation level 0.
    pub fn new(symbols: &'s SymbolTable, options: PrintOptions) -> Self {
        Self {
            out: String::new(),
            indent: 0,
            options,
            symbols,
        }
    }

    /// Consume the printer and return what it wrote.
    pub fn finish(self) -> String {
        self.out
    }

    /// Current nesting level.
    pub fn indent_level(&self) -> usize {
        self.indent
    }

    /// Append raw text.
    pub fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Break the line and indent to the current level.
    pub fn newline(&mut self) {
        self.out.push('\n');
        let width = self.indent * self.options.indent_width;
        self.out.extend(std::iter::repeat(' ').take(width));
    }

    fn verbose(&self) -> bool {
        self.options.verbose
    }

    /// Each node on its own line at one level deeper, `;` between them.
    fn lines(&mut self, exprs: &[Expr]) -> Result<(), PrintError> {
        let mut inner = self.indented();
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                inner.write(";");
            }
            inner.newline();
            expr.accept(&mut *inner)?;
        }
        Ok(())
    }

    /// A single node on the next line, one level deeper.
    fn block<N: Accept + ?Sized>(&mut self, node: &N) -> Result<(), PrintError> {
        let mut inner = self.indented();
        inner.newline();
        node.accept(&mut *inner)
    }

    fn comma_separated<N: Accept>(&mut self, nodes: &[N]) -> Result<(), PrintError> {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            node.accept(self)?;
        }
        Ok(())
    }

    fn escape_marker(&mut self, decl: &VarDecl) {
        if self.verbose() && decl.escapes {
            self.write("/*e*/");
        }
    }

    fn decl_annotation(&mut self, decl: Option<DeclId>, use_depth: Option<u32>) {
        if !self.verbose() {
            return;
        }
        let Some(site) = self.symbols.resolve(decl) else {
            return;
        };
        let mut note = format!("/*decl:{}", site.loc);
        if let Some(depth) = use_depth {
            let diff = i64::from(depth) - i64::from(site.depth);
            if diff != 0 {
                note.push_str(&format!(" depth_diff:{}", diff));
            }
        }
        note.push_str("*/");
        self.write(&note);
    }
}

impl Visitor for Printer<'_> {
    type Output = ();
    type Error = PrintError;

    fn visit_integer_literal(&mut self, node: &IntegerLiteral) -> Result<(), PrintError> {
        self.write(&node.value.to_string());
        Ok(())
    }

    fn visit_string_literal(&mut self, node: &StringLiteral) -> Result<(), PrintError> {
        self.write(&quote(&node.value));
        Ok(())
    }

    fn visit_binary_operator(&mut self, node: &BinaryOperator) -> Result<(), PrintError> {
        self.write("(");
        node.left.accept(self)?;
        self.write(node.op.symbol());
        node.right.accept(self)?;
        self.write(")");
        Ok(())
    }

    fn visit_sequence(&mut self, node: &Sequence) -> Result<(), PrintError> {
        if node.exprs.is_empty() {
            self.write("()");
            return Ok(());
        }
        self.write("(");
        self.lines(&node.exprs)?;
        self.newline();
        self.write(")");
        Ok(())
    }

    fn visit_let(&mut self, node: &Let) -> Result<(), PrintError> {
        self.write("let");
        {
            let mut inner = self.indented();
            for decl in &node.decls {
                inner.newline();
                decl.accept(&mut *inner)?;
            }
        }
        self.newline();
        self.write("in");
        self.lines(&node.body.exprs)?;
        self.newline();
        self.write("end");
        Ok(())
    }

    fn visit_identifier(&mut self, node: &Identifier) -> Result<(), PrintError> {
        self.write(&node.name);
        self.decl_annotation(node.decl, Some(node.depth));
        Ok(())
    }

    fn visit_if_then_else(&mut self, node: &IfThenElse) -> Result<(), PrintError> {
        self.write("if ");
        node.condition.accept(self)?;
        self.write(" then");
        self.block(&node.then_branch)?;
        self.newline();
        self.write("else");
        self.block(&node.else_branch)
    }

    fn visit_var_decl(&mut self, node: &VarDecl) -> Result<(), PrintError> {
        if node.expr.is_some() {
            self.write("var ");
        }
        self.write(&node.name);
        self.escape_marker(node);

        let type_name = match &node.type_name {
            Some(written) => written.as_str(),
            None => node
                .resolved_type
                .name()
                .ok_or(PrintError::SentinelType {
                    ty: node.resolved_type,
                    loc: node.loc,
                })?,
        };
        self.write(": ");
        self.write(type_name);

        if let Some(init) = &node.expr {
            self.write(" := ");
            init.accept(self)?;
        }
        Ok(())
    }

    fn visit_fun_decl(&mut self, node: &FunDecl) -> Result<(), PrintError> {
        self.write("function ");
        self.write(&node.name);
        if self.verbose() && node.external_name != node.name {
            self.write(&format!("/*{}*/", node.external_name));
        }
        self.write("(");
        self.comma_separated(&node.params)?;
        self.write(")");
        if let Some(ret) = &node.type_name {
            self.write(": ");
            self.write(ret);
        }
        self.write(" =");
        self.block(&node.expr)
    }

    fn visit_fun_call(&mut self, node: &FunCall) -> Result<(), PrintError> {
        self.write(&node.func_name);
        self.decl_annotation(node.decl, None);
        self.write("(");
        self.comma_separated(&node.args)?;
        self.write(")");
        Ok(())
    }

    fn visit_while_loop(&mut self, node: &WhileLoop) -> Result<(), PrintError> {
        self.write("while ");
        node.condition.accept(self)?;
        self.write(" do");
        self.block(&node.body)
    }

    fn visit_for_loop(&mut self, node: &ForLoop) -> Result<(), PrintError> {
        let variable = &node.variable;
        let init = variable
            .expr
            .as_ref()
            .ok_or_else(|| PrintError::MissingLoopInitializer {
                name: variable.name.clone(),
                loc: variable.loc,
            })?;

        self.write("for ");
        self.write(&variable.name);
        self.escape_marker(variable);
        self.write(" := ");
        init.accept(self)?;
        self.write(" to ");
        node.high.accept(self)?;
        self.write(" do");
        self.block(&node.body)
    }

    fn visit_break(&mut self, node: &Break) -> Result<(), PrintError> {
        self.write("break");
        if self.verbose() {
            if let Some(loc) = node.loop_ref.and_then(|id| self.symbols.loop_loc(id)) {
                self.write(&format!("/*loop:{}*/", loc));
            }
        }
        Ok(())
    }

    fn visit_assign(&mut self, node: &Assign) -> Result<(), PrintError> {
        node.lhs.accept(self)?;
        self.write(" := ");
        node.rhs.accept(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::build::*;

    fn plain(expr: &Expr) -> String {
        print(expr, false).unwrap()
    }

    #[test]
    fn test_nested_sequence_indents() {
        let expr = seq(vec![int(1), seq(vec![int(2), int(3)])]);
        assert_eq!(plain(&expr), "(\n  1;\n  (\n    2;\n    3\n  )\n)");
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(plain(&seq(vec![])), "()");
    }

    #[test]
    fn test_printer_is_balanced_after_print() {
        let symbols = SymbolTable::new();
        let mut printer = Printer::new(&symbols, PrintOptions::new());
        let expr = let_in(vec![], vec![if_then_else(int(1), seq(vec![int(2)]), int(3))]);
        expr.accept(&mut printer).unwrap();
        assert_eq!(printer.indent_level(), 0);
    }

    #[test]
    fn test_indent_width_option() {
        let symbols = SymbolTable::new();
        let options = PrintOptions {
            verbose: false,
            indent_width: 4,
        };
        let out = print_with(&seq(vec![int(1)]), &symbols, &options).unwrap();
        assert_eq!(out, "(\n    1\n)");
    }
}
