use tern_ir::{
    to_rpn, BinaryOp, Expr, ExprArena, ExprId, ExprKind, Literal, Span, StringInterner,
};

fn grouped_sum(arena: &mut ExprArena) -> ExprId {
    let mut number = |n: f64| {
        arena.alloc_expr(Expr::new(ExprKind::Literal(Literal::number(n)), Span::DUMMY))
    };
    let one = number(1.0);
    let two = number(2.0);
    let sum = arena.alloc_expr(Expr::new(
        ExprKind::Binary {
            left: one,
            op: BinaryOp::Add,
            right: two,
        },
        Span::DUMMY,
    ));
    arena.alloc_expr(Expr::new(ExprKind::Grouping(sum), Span::DUMMY))
}

/// Postfix form of `(1 + 2) * (1 + 2)`.
pub fn grouped_sum_rpn() -> String {
    let interner = StringInterner::new();
    let mut arena = ExprArena::new();
    let left = grouped_sum(&mut arena);
    let right = grouped_sum(&mut arena);
    let product = arena.alloc_expr(Expr::new(
        ExprKind::Binary {
            left,
            op: BinaryOp::Mul,
            right,
        },
        Span::DUMMY,
    ));
    to_rpn(&arena, &interner, product)
}

pub fn print_rpn() {
    println!("{}", grouped_sum_rpn());
}
