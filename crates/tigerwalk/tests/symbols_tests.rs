//! Symbol collection over whole trees

use tigerwalk::ast::build::*;
use tigerwalk::ast::{DeclId, LoopId};
use tigerwalk::*;

#[test]
fn test_collect_empty_for_pure_arithmetic() {
    let expr = binop(Operator::Plus, int(1), int(2));
    let table = SymbolTable::collect(&expr).unwrap();
    assert!(table.is_empty());
}

#[test]
fn test_collect_nested_declarations_and_loops() {
    let mut inner_var = var(DeclId(3), "y", Type::Int, int(2));
    inner_var.depth = 1;
    inner_var.loc = Location::new(4, 9);

    let body = let_in(
        vec![inner_var.into()],
        vec![while_loop(LoopId(1), int(1), brk(Some(LoopId(1))))],
    );
    let f = fun(
        DeclId(1),
        "f",
        vec![param(DeclId(2), "n", "int")],
        None,
        body,
    );
    let tree = let_in(
        vec![f.into()],
        vec![for_loop(
            LoopId(0),
            var(DeclId(0), "i", Type::Int, int(0)),
            int(3),
            call("f", Some(DeclId(1)), vec![ident("i")]),
        )
        .at(Location::new(9, 3))],
    );

    let table = SymbolTable::collect(&tree).unwrap();
    assert_eq!(table.decl_count(), 4);
    assert_eq!(table.loop_count(), 2);

    let y = table.decl(DeclId(3)).unwrap();
    assert_eq!(y.name, "y");
    assert_eq!(y.depth, 1);
    assert_eq!(y.loc, Location::new(4, 9));
    assert_eq!(y.kind, NodeKind::VarDecl);

    assert_eq!(table.decl(DeclId(1)).unwrap().kind, NodeKind::FunDecl);
    assert_eq!(table.loop_loc(LoopId(0)), Some(Location::new(9, 3)));
}

#[test]
fn test_collect_reaches_every_child_position() {
    // Declarations hidden under each compound variant
    let hidden = |id: u32| {
        let decl = var(DeclId(id), "v", Type::Int, int(0));
        let_in(vec![decl.into()], vec![])
    };

    let tree = seq(vec![
        binop(Operator::Plus, hidden(0), hidden(1)),
        if_then_else(hidden(2), hidden(3), hidden(4)),
        assign(hidden(5), hidden(6)),
        call("f", None, vec![hidden(7)]),
        while_loop(LoopId(0), hidden(8), hidden(9)),
    ]);

    let table = SymbolTable::collect(&tree).unwrap();
    let ids: Vec<DeclId> = table.decls().map(|(id, _)| id).collect();
    assert_eq!(ids, (0..10).map(DeclId).collect::<Vec<_>>());
}

#[test]
fn test_collect_rejects_duplicate_loop_ids() {
    let tree = seq(vec![
        while_loop(LoopId(5), int(0), int(0)),
        while_loop(LoopId(5), int(0), int(0)),
    ]);
    assert!(matches!(
        SymbolTable::collect(&tree),
        Err(AstError::DuplicateLoop { id: LoopId(5), .. })
    ));
}

#[test]
fn test_collect_from_declaration_root() {
    let params = vec![param(DeclId(1), "a", "int")];
    let decl: Decl = fun(DeclId(0), "g", params, None, int(0)).into();
    let table = SymbolTable::collect(&decl).unwrap();
    assert_eq!(table.decl_count(), 2);
}
