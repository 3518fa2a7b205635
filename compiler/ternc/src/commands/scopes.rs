//! Walk through a global scope and one block, reporting every read.

use tern_eval::{EvalResult, Interpreter};
use tern_ir::{
    Expr, ExprArena, ExprId, ExprKind, Ident, Literal, Span, Stmt, StmtId, StmtKind,
    StringInterner,
};

/// The program the report walks through. Spans below index into it.
pub const SCOPE_SOURCE: &str = "var x = 1; { var y; y; y = 5; y; x; z; }";

struct Program {
    declare_x: StmtId,
    declare_y: StmtId,
    /// Expression statements inside the block, with their source text.
    steps: Vec<(&'static str, ExprId)>,
}

fn ident(interner: &StringInterner, name: &str, start: u32) -> Ident {
    Ident::new(interner.intern(name), Span::new(start, start + 1))
}

fn build(interner: &StringInterner, arena: &mut ExprArena) -> Program {
    let one = arena.alloc_expr(Expr::new(
        ExprKind::Literal(Literal::number(1.0)),
        Span::new(8, 9),
    ));
    let declare_x = arena.alloc_stmt(Stmt::new(
        StmtKind::Var {
            name: ident(interner, "x", 4),
            init: Some(one),
        },
        Span::new(0, 10),
    ));
    let declare_y = arena.alloc_stmt(Stmt::new(
        StmtKind::Var {
            name: ident(interner, "y", 17),
            init: None,
        },
        Span::new(13, 19),
    ));

    let mut read = |name: &str, start: u32| {
        let ident = ident(interner, name, start);
        arena.alloc_expr(Expr::new(ExprKind::Variable(ident), ident.span))
    };
    let read_y_early = read("y", 20);
    let read_y = read("y", 30);
    let read_x = read("x", 33);
    let read_z = read("z", 36);

    let five = arena.alloc_expr(Expr::new(
        ExprKind::Literal(Literal::number(5.0)),
        Span::new(27, 28),
    ));
    let assign_y = arena.alloc_expr(Expr::new(
        ExprKind::Assign {
            target: ident(interner, "y", 23),
            value: five,
        },
        Span::new(23, 28),
    ));

    Program {
        declare_x,
        declare_y,
        steps: vec![
            ("y", read_y_early),
            ("y = 5", assign_y),
            ("y", read_y),
            ("x", read_x),
            ("z", read_z),
        ],
    }
}

fn describe(interner: &StringInterner, label: &str, result: &EvalResult) -> String {
    match result {
        Ok(value) => format!("{label} => {}", value.display(interner)),
        Err(err) => format!("{label} => {}", err.to_diagnostic()),
    }
}

/// Run the program, one line per step.
///
/// Errors are reported and the walk continues with the next step.
pub fn scope_report() -> Vec<String> {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let program = build(&interner, &mut arena);

    let mut lines = vec![format!("source: {SCOPE_SOURCE}")];
    let mut interp = Interpreter::new(&interner, &arena);
    if let Err(err) = interp.execute(program.declare_x) {
        lines.push(err.to_diagnostic().to_string());
        return lines;
    }

    let mut block = interp.scoped();
    if let Err(err) = block.execute(program.declare_y) {
        lines.push(err.to_diagnostic().to_string());
        return lines;
    }
    for (label, expr) in program.steps {
        let result = block.evaluate(expr);
        if let Err(err) = &result {
            tracing::debug!(step = label, error = %err, "step failed");
        }
        lines.push(describe(&interner, label, &result));
    }
    drop(block);

    lines.push(format!("scopes after block: {}", interp.env().depth()));
    lines
}

pub fn run_scopes() {
    for line in scope_report() {
        println!("{line}");
    }
}
