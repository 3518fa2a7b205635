//! Operator implementations for the evaluator.
//!
//! The value set is closed, so dispatch is a plain `match` over
//! `(operator, operands)`.

use tern_ir::{BinaryOp, StringInterner, UnaryOp};

use crate::errors::invalid_operand;
use crate::{EvalResult, Value};

/// Evaluate a binary operation on already-evaluated operands.
///
/// String concatenation interns its result, hence the interner.
pub fn evaluate_binary(
    left: Value,
    op: BinaryOp,
    right: Value,
    interner: &StringInterner,
) -> EvalResult {
    match op {
        BinaryOp::Eq => return Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => return Ok(Value::Bool(left != right)),
        BinaryOp::Add => return add(left, right, interner),
        _ => {}
    }

    let (Value::Number(a), Value::Number(b)) = (left, right) else {
        return Err(invalid_operand(op.as_symbol(), "numbers"));
    };
    let result = match op {
        BinaryOp::Sub => Value::Number(a - b),
        BinaryOp::Mul => Value::Number(a * b),
        BinaryOp::Div => Value::Number(a / b),
        BinaryOp::Lt => Value::Bool(a < b),
        BinaryOp::LtEq => Value::Bool(a <= b),
        BinaryOp::Gt => Value::Bool(a > b),
        BinaryOp::GtEq => Value::Bool(a >= b),
        BinaryOp::Add | BinaryOp::Eq | BinaryOp::NotEq => unreachable!("handled above"),
    };
    Ok(result)
}

fn add(left: Value, right: Value, interner: &StringInterner) -> EvalResult {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => {
            let joined = format!("{}{}", interner.lookup(a), interner.lookup(b));
            Ok(Value::Str(interner.intern_owned(joined)))
        }
        _ => Err(invalid_operand("+", "two numbers or two strings")),
    }
}

/// Evaluate a prefix operation.
///
/// `!` accepts any value and negates its truthiness.
pub fn evaluate_unary(op: UnaryOp, operand: Value) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Neg, Value::Number(n)) => Ok(Value::Number(-n)),
        (UnaryOp::Neg, _) => Err(invalid_operand("-", "a number")),
        (UnaryOp::Not, value) => Ok(Value::Bool(!value.is_truthy())),
    }
}
