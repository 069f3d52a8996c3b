//! RAII guard for indentation levels

use super::Printer;

/// Guard that raises the printer's indentation for its lifetime.
///
/// The level is lowered again when the guard is dropped, which includes
/// early returns through `?`, so an aborted traversal never leaves the
/// printer unbalanced.
///
/// # Example
///
/// ```
/// use tigerwalk::{PrintOptions, Printer, SymbolTable};
///
/// let symbols = SymbolTable::new();
/// let mut printer = Printer::new(&symbols, PrintOptions::new());
/// {
///     let guard = printer.indented();
///     assert_eq!(guard.indent_level(), 1);
/// }
/// assert_eq!(printer.indent_level(), 0);
/// ```
pub struct IndentGuard<'p, 's> {
    printer: &'p mut Printer<'s>,
}

impl<'s> Printer<'s> {
    /// Raise the indentation by one level until the guard is dropped.
    pub fn indented(&mut self) -> IndentGuard<'_, 's> {
        self.indent += 1;
        IndentGuard { printer: self }
    }
}

impl Drop for IndentGuard<'_, '_> {
    fn drop(&mut self) {
        self.printer.indent -= 1;
    }
}

impl<'s> std::ops::Deref for IndentGuard<'_, 's> {
    type Target = Printer<'s>;

    fn deref(&self) -> &Self::Target {
        self.printer
    }
}

impl<'s> std::ops::DerefMut for IndentGuard<'_, 's> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.printer
    }
}

#[cfg(test)]
mod tests {
    use crate::{PrintOptions, Printer, SymbolTable};

    #[test]
    fn test_guard_restores_level() {
        let symbols = SymbolTable::new();
        let mut printer = Printer::new(&symbols, PrintOptions::new());

        {
            let mut outer = printer.indented();
            assert_eq!(outer.indent_level(), 1);
            {
                let inner = outer.indented();
                assert_eq!(inner.indent_level(), 2);
            }
            assert_eq!(outer.indent_level(), 1);
        }
        assert_eq!(printer.indent_level(), 0);
    }

    #[test]
    fn test_newline_uses_current_level() {
        let symbols = SymbolTable::new();
        let mut printer = Printer::new(&symbols, PrintOptions::new());

        printer.write("a");
        {
            let mut guard = printer.indented();
            guard.newline();
            guard.write("b");
        }
        printer.newline();
        printer.write("c");

        assert_eq!(printer.finish(), "a\n  b\nc");
    }

    #[test]
    fn test_guard_restores_level_on_error_path() {
        fn fails(printer: &mut Printer<'_>) -> Result<(), ()> {
            let mut guard = printer.indented();
            guard.newline();
            let step: Result<(), ()> = Err(());
            step?;
            guard.write("unreachable");
            Ok(())
        }

        let symbols = SymbolTable::new();
        let mut printer = Printer::new(&symbols, PrintOptions::new());
        assert!(fails(&mut printer).is_err());
        assert_eq!(printer.indent_level(), 0);
    }
}
