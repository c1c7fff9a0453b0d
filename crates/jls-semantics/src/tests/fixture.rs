//! Shared test fixtures: hand-resolved compilation units in the shape a
//! host parser/type-resolver would produce.
//!
//! Spans are computed from the source text rather than hard-coded, so a
//! fixture edit cannot silently desynchronize offsets and assertions.

use jls_common::{CancellationToken, Span};
use jls_resolve::{ResolvedUnit, Resolver, SymbolArena, SymbolId, SymbolKind, modifier_flags};
use jls_syntax::{NodeId, SyntaxTree, TreePath, walk};

pub const CLASS_SOURCE: &str = "class A { int x; void m() { int y = x; } }";

/// Ids of interest in [`class_with_field_and_method`].
pub struct ClassFixture {
    pub unit: ResolvedUnit,
    pub class_a: NodeId,
    pub field_x: NodeId,
    pub method_m: NodeId,
    pub local_y: NodeId,
    pub x_use: NodeId,
    pub sym_class: SymbolId,
    pub sym_field: SymbolId,
    pub sym_method: SymbolId,
    pub sym_local: SymbolId,
}

/// `class A { int x; void m() { int y = x; } }`, resolved by hand.
///
/// Variable spans cover the `Type name` declarator; the initializer is
/// a child of the declaration but sits outside its span, the way the
/// host position service reports this shape.
pub fn class_with_field_and_method() -> ClassFixture {
    let source = CLASS_SOURCE;
    let at = |needle: &str| source.find(needle).unwrap() as i32;

    let mut tree = SyntaxTree::new();
    // int x;
    let x_start = at("int x");
    let x_ty = tree.add_other(Span::new(x_start, x_start + 3), Vec::new());
    let field_x = tree.add_variable(Span::new(x_start, x_start + 5), "x", x_ty, NodeId::NONE);
    // int y = x;
    let y_start = at("int y");
    let y_ty = tree.add_other(Span::new(y_start, y_start + 3), Vec::new());
    let x_use_start = at("= x") + 2;
    let x_use = tree.add_identifier(Span::new(x_use_start, x_use_start + 1), "x");
    let local_y = tree.add_variable(Span::new(y_start, y_start + 5), "y", y_ty, x_use);
    // void m() { int y = x; }
    let body_start = at("{ int y");
    let body_end = at("; }") + 3;
    let body = tree.add_other(Span::new(body_start, body_end), vec![local_y]);
    let method_m = tree.add_method(Span::new(at("void m"), body_end), "m", vec![body]);
    let unit_span = Span::new(0, source.len() as i32);
    let class_a = tree.add_class(unit_span, "A", vec![field_x, method_m]);
    let root = tree.add_compilation_unit(unit_span, vec![class_a]);

    let mut symbols = SymbolArena::new();
    let sym_class = symbols.alloc(SymbolKind::Class, modifier_flags::NONE, "A");
    let sym_field = symbols.alloc(SymbolKind::Field, modifier_flags::NONE, "x");
    let sym_method = symbols.alloc(SymbolKind::Method, modifier_flags::NONE, "m");
    let sym_local = symbols.alloc(SymbolKind::LocalVariable, modifier_flags::NONE, "y");

    let mut unit = ResolvedUnit::new(source, tree, root, symbols);
    unit.bind(class_a, sym_class);
    unit.bind(field_x, sym_field);
    unit.bind(method_m, sym_method);
    unit.bind(local_y, sym_local);
    unit.bind(x_use, sym_field);

    ClassFixture {
        unit,
        class_a,
        field_x,
        method_m,
        local_y,
        x_use,
        sym_class,
        sym_field,
        sym_method,
        sym_local,
    }
}

pub const CALLS_SOURCE: &str =
    "class B { void go() { run(); this.stop(); } void run() { } void stop() { } }";

/// Ids of interest in [`class_with_call_sites`].
pub struct CallsFixture {
    pub unit: ResolvedUnit,
    pub call_run: NodeId,
    pub run_callee: NodeId,
    pub call_stop: NodeId,
    pub stop_select: NodeId,
    pub this_ident: NodeId,
    pub sym_run: SymbolId,
    pub sym_stop: SymbolId,
}

/// `class B` with one bare call and one `this.`-qualified call.
pub fn class_with_call_sites() -> CallsFixture {
    let source = CALLS_SOURCE;
    let at = |needle: &str| source.find(needle).unwrap() as i32;

    let mut tree = SyntaxTree::new();
    // run();
    let run_at = at("run()");
    let run_callee = tree.add_identifier(Span::new(run_at, run_at + 3), "run");
    let call_run = tree.add_method_invocation(Span::new(run_at, run_at + 5), run_callee, Vec::new());
    // this.stop();
    let this_at = at("this.stop");
    let this_ident = tree.add_identifier(Span::new(this_at, this_at + 4), "this");
    let stop_select = tree.add_member_select(Span::new(this_at, this_at + 9), this_ident, "stop");
    let call_stop =
        tree.add_method_invocation(Span::new(this_at, this_at + 11), stop_select, Vec::new());
    // void go() { ... }
    let go_body_end = at("} void run") + 1;
    let go_body = tree.add_other(
        Span::new(at("{ run"), go_body_end),
        vec![call_run, call_stop],
    );
    let method_go = tree.add_method(Span::new(at("void go"), go_body_end), "go", vec![go_body]);
    // void run() { } / void stop() { }
    let run_body_at = at("{ } void stop");
    let run_body = tree.add_other(Span::new(run_body_at, run_body_at + 3), Vec::new());
    let method_run = tree.add_method(
        Span::new(at("void run"), run_body_at + 3),
        "run",
        vec![run_body],
    );
    let stop_body_at = source.rfind("{ }").unwrap() as i32;
    let stop_body = tree.add_other(Span::new(stop_body_at, stop_body_at + 3), Vec::new());
    let method_stop = tree.add_method(
        Span::new(at("void stop"), stop_body_at + 3),
        "stop",
        vec![stop_body],
    );
    let unit_span = Span::new(0, source.len() as i32);
    let class_b = tree.add_class(unit_span, "B", vec![method_go, method_run, method_stop]);
    let root = tree.add_compilation_unit(unit_span, vec![class_b]);

    let mut symbols = SymbolArena::new();
    let sym_class = symbols.alloc(SymbolKind::Class, modifier_flags::NONE, "B");
    let sym_go = symbols.alloc(SymbolKind::Method, modifier_flags::NONE, "go");
    let sym_run = symbols.alloc(SymbolKind::Method, modifier_flags::NONE, "run");
    let sym_stop = symbols.alloc(SymbolKind::Method, modifier_flags::NONE, "stop");

    let mut unit = ResolvedUnit::new(source, tree, root, symbols);
    unit.bind(class_b, sym_class);
    unit.bind(method_go, sym_go);
    unit.bind(method_run, sym_run);
    unit.bind(method_stop, sym_stop);
    unit.bind(run_callee, sym_run);
    unit.bind(stop_select, sym_stop);

    CallsFixture {
        unit,
        call_run,
        run_callee,
        call_stop,
        stop_select,
        this_ident,
        sym_run,
        sym_stop,
    }
}

/// The walker-produced path from the unit root down to `target`.
pub fn path_to(unit: &ResolvedUnit, target: NodeId) -> TreePath {
    let token = CancellationToken::new();
    let mut found = None;
    walk(
        unit.tree(),
        unit.root(),
        &token,
        &mut found,
        &mut |_, path, found| {
            if path.leaf() == target {
                *found = Some(path.clone());
            }
        },
    )
    .unwrap();
    found.expect("target node is not under the unit root")
}

/// Exact span of the `index`-th occurrence of `needle` (0-based) in the
/// fixture source.
pub fn span_of_occurrence(source: &str, needle: &str, index: usize) -> Span {
    let mut from = 0usize;
    for _ in 0..index {
        from = source[from..].find(needle).unwrap() + from + needle.len();
    }
    let start = source[from..].find(needle).unwrap() + from;
    Span::new(start as i32, (start + needle.len()) as i32)
}
