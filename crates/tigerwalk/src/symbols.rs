//! Back-reference resolution
//!
//! Identifiers, calls and breaks carry ids rather than links to the nodes
//! they refer to. A [`SymbolTable`] maps those ids to the facts the printer
//! needs about the referent: where it was declared and at which lexical
//! depth.
//!
//! The table is normally handed over by the analyzer. When the whole program
//! is available, [`SymbolTable::collect`] rebuilds it by walking the tree.

use indexmap::IndexMap;

use crate::ast::*;
use crate::error::AstError;
use crate::visitor::{Accept, Visitor};

/// What is known about a declaration from its use sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclSite {
    /// Declared name
    pub name: String,
    /// Where the declaration appears
    pub loc: Location,
    /// Lexical depth of the declaring scope
    pub depth: u32,
    /// `VarDecl` or `FunDecl`
    pub kind: NodeKind,
}

/// Declarations and loops of one tree, indexed by id.
///
/// Entries keep discovery order, so iteration follows the source.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    decls: IndexMap<DeclId, DeclSite>,
    loops: IndexMap<LoopId, Location>,
}

impl SymbolTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every declaration and loop owned by `root`.
    ///
    /// Fails on the first id claimed by two nodes.
    pub fn collect<N: Accept + ?Sized>(root: &N) -> Result<Self, AstError> {
        Collector::new(false).run(root)
    }

    /// Index `root` like [`collect`](Self::collect), keeping the first node
    /// to claim each id and skipping later ones.
    pub fn collect_first_wins<N: Accept + ?Sized>(root: &N) -> Self {
        // Insertion is the only failure, and this mode never inserts a clash.
        Collector::new(true).run(root).unwrap_or_default()
    }

    /// Register a declaration. Fails if the id is already taken.
    pub fn insert_decl(&mut self, id: DeclId, site: DeclSite) -> Result<(), AstError> {
        if self.decls.contains_key(&id) {
            return Err(AstError::DuplicateDecl { id, loc: site.loc });
        }
        self.decls.insert(id, site);
        Ok(())
    }

    /// Register a loop. Fails if the id is already taken.
    pub fn insert_loop(&mut self, id: LoopId, loc: Location) -> Result<(), AstError> {
        if self.loops.contains_key(&id) {
            return Err(AstError::DuplicateLoop { id, loc });
        }
        self.loops.insert(id, loc);
        Ok(())
    }

    /// Look up a declaration.
    pub fn decl(&self, id: DeclId) -> Option<&DeclSite> {
        self.decls.get(&id)
    }

    /// Look up a loop's location.
    pub fn loop_loc(&self, id: LoopId) -> Option<Location> {
        self.loops.get(&id).copied()
    }

    /// Resolve an optional back-reference in one step.
    pub fn resolve(&self, id: Option<DeclId>) -> Option<&DeclSite> {
        id.and_then(|id| self.decl(id))
    }

    /// Iterate declarations in discovery order.
    pub fn decls(&self) -> impl Iterator<Item = (DeclId, &DeclSite)> {
        self.decls.iter().map(|(id, site)| (*id, site))
    }

    /// Number of declarations.
    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }

    /// Number of loops.
    pub fn loop_count(&self) -> usize {
        self.loops.len()
    }

    /// True if the table holds neither declarations nor loops.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty() && self.loops.is_empty()
    }
}

impl From<&VarDecl> for DeclSite {
    fn from(decl: &VarDecl) -> Self {
        Self {
            name: decl.name.clone(),
            loc: decl.loc,
            depth: decl.depth,
            kind: NodeKind::VarDecl,
        }
    }
}

impl From<&FunDecl> for DeclSite {
    fn from(decl: &FunDecl) -> Self {
        Self {
            name: decl.name.clone(),
            loc: decl.loc,
            depth: decl.depth,
            kind: NodeKind::FunDecl,
        }
    }
}

/// Walks the whole tree, registering declarations and loops.
struct Collector {
    table: SymbolTable,
    first_wins: bool,
}

impl Collector {
    fn new(first_wins: bool) -> Self {
        Self {
            table: SymbolTable::new(),
            first_wins,
        }
    }

    fn run<N: Accept + ?Sized>(mut self, root: &N) -> Result<SymbolTable, AstError> {
        root.accept(&mut self)?;
        tracing::debug!(
            decls = self.table.decls.len(),
            loops = self.table.loops.len(),
            "collected symbols"
        );
        Ok(self.table)
    }

    fn register_decl(&mut self, id: DeclId, site: DeclSite) -> Result<(), AstError> {
        if self.first_wins {
            if let Some(kept) = self.table.decl(id) {
                tracing::debug!(
                    %id,
                    kept = %kept.name,
                    kind = kept.kind.name(),
                    skipped = %site.name,
                    loc = %site.loc,
                    "declaration id already taken"
                );
                return Ok(());
            }
        }
        self.table.insert_decl(id, site)
    }

    fn register_loop(&mut self, id: LoopId, loc: Location) -> Result<(), AstError> {
        if self.first_wins && self.table.loops.contains_key(&id) {
            tracing::debug!(%id, %loc, "loop id already taken");
            return Ok(());
        }
        self.table.insert_loop(id, loc)
    }

    fn all<'a, N: Accept + 'a>(
        &mut self,
        nodes: impl IntoIterator<Item = &'a N>,
    ) -> Result<(), AstError> {
        for node in nodes {
            node.accept(self)?;
        }
        Ok(())
    }
}

impl Visitor for Collector {
    type Output = ();
    type Error = AstError;

    fn visit_integer_literal(&mut self, _node: &IntegerLiteral) -> Result<(), AstError> {
        Ok(())
    }

    fn visit_string_literal(&mut self, _node: &StringLiteral) -> Result<(), AstError> {
        Ok(())
    }

    fn visit_binary_operator(&mut self, node: &BinaryOperator) -> Result<(), AstError> {
        node.left.accept(self)?;
        node.right.accept(self)
    }

    fn visit_sequence(&mut self, node: &Sequence) -> Result<(), AstError> {
        self.all(&node.exprs)
    }

    fn visit_let(&mut self, node: &Let) -> Result<(), AstError> {
        self.all(&node.decls)?;
        node.body.accept(self)
    }

    fn visit_identifier(&mut self, _node: &Identifier) -> Result<(), AstError> {
        Ok(())
    }

    fn visit_if_then_else(&mut self, node: &IfThenElse) -> Result<(), AstError> {
        node.condition.accept(self)?;
        node.then_branch.accept(self)?;
        node.else_branch.accept(self)
    }

    fn visit_var_decl(&mut self, node: &VarDecl) -> Result<(), AstError> {
        self.register_decl(node.id, node.into())?;
        match &node.expr {
            Some(init) => init.accept(self),
            None => Ok(()),
        }
    }

    fn visit_fun_decl(&mut self, node: &FunDecl) -> Result<(), AstError> {
        self.register_decl(node.id, node.into())?;
        self.all(&node.params)?;
        node.expr.accept(self)
    }

    fn visit_fun_call(&mut self, node: &FunCall) -> Result<(), AstError> {
        self.all(&node.args)
    }

    fn visit_while_loop(&mut self, node: &WhileLoop) -> Result<(), AstError> {
        self.register_loop(node.id, node.loc)?;
        node.condition.accept(self)?;
        node.body.accept(self)
    }

    fn visit_for_loop(&mut self, node: &ForLoop) -> Result<(), AstError> {
        self.register_loop(node.id, node.loc)?;
        node.variable.accept(self)?;
        node.high.accept(self)?;
        node.body.accept(self)
    }

    fn visit_break(&mut self, _node: &Break) -> Result<(), AstError> {
        Ok(())
    }

    fn visit_assign(&mut self, node: &Assign) -> Result<(), AstError> {
        node.lhs.accept(self)?;
        node.rhs.accept(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::build::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut table = SymbolTable::new();
        assert!(table.is_empty());

        let site = DeclSite {
            name: "x".to_string(),
            loc: Location::new(1, 5),
            depth: 1,
            kind: NodeKind::VarDecl,
        };
        table.insert_decl(DeclId(0), site.clone()).unwrap();
        table.insert_loop(LoopId(0), Location::new(2, 1)).unwrap();

        assert_eq!(table.decl(DeclId(0)), Some(&site));
        assert_eq!(table.resolve(Some(DeclId(0))), Some(&site));
        assert_eq!(table.resolve(None), None);
        assert_eq!(table.decl(DeclId(1)), None);
        assert_eq!(table.loop_loc(LoopId(0)), Some(Location::new(2, 1)));
        assert!(!table.is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut table = SymbolTable::new();
        let site = DeclSite {
            name: "x".to_string(),
            loc: Location::default(),
            depth: 0,
            kind: NodeKind::VarDecl,
        };
        table.insert_decl(DeclId(7), site.clone()).unwrap();
        assert!(matches!(
            table.insert_decl(DeclId(7), site),
            Err(AstError::DuplicateDecl { id: DeclId(7), .. })
        ));

        table.insert_loop(LoopId(1), Location::default()).unwrap();
        assert!(matches!(
            table.insert_loop(LoopId(1), Location::default()),
            Err(AstError::DuplicateLoop { id: LoopId(1), .. })
        ));
    }

    #[test]
    fn test_collect_keeps_discovery_order() {
        let tree = let_in(
            vec![
                var(DeclId(2), "a", Type::Int, int(1)).into(),
                fun(
                    DeclId(0),
                    "f",
                    vec![param(DeclId(1), "n", "int")],
                    Some("int"),
                    ident("n"),
                )
                .into(),
            ],
            vec![],
        );
        let table = SymbolTable::collect(&tree).unwrap();
        let names: Vec<&str> = table.decls().map(|(_, site)| site.name.as_str()).collect();
        assert_eq!(names, vec!["a", "f", "n"]);
    }

    #[test]
    fn test_collect_first_wins_skips_later_claims() {
        let mut second = var(DeclId(0), "b", Type::Int, int(2));
        second.loc = Location::new(3, 3);
        let tree = seq(vec![
            let_in(
                vec![var(DeclId(0), "a", Type::Int, int(1)).into(), second.into()],
                vec![],
            ),
            while_loop(LoopId(4), int(0), int(0)).at(Location::new(5, 1)),
            while_loop(LoopId(4), int(0), int(0)).at(Location::new(6, 1)),
        ]);

        assert!(SymbolTable::collect(&tree).is_err());

        let table = SymbolTable::collect_first_wins(&tree);
        assert_eq!(table.decl_count(), 1);
        assert_eq!(table.decl(DeclId(0)).unwrap().name, "a");
        assert_eq!(table.loop_loc(LoopId(4)), Some(Location::new(5, 1)));
    }
}
