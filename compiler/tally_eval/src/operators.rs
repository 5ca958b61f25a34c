//! Binary operator implementations for the evaluator.
//!
//! Direct enum dispatch over the operand pair. Inference has already
//! checked the operand types, so the fallback arms only fire on a tree
//! that skipped inference; they report the same type errors inference
//! would have.

use std::cmp::Ordering;

use tally_diagnostic::{EvalError, LangError, TypeError};
use tally_ir::{BinaryOp, Span, Ty, Value};

use crate::buffer;

/// Evaluate a binary operation.
///
/// Integer arithmetic wraps on overflow. String results are always fresh
/// buffers; neither operand is modified.
pub fn evaluate_binary(
    left: &Value,
    right: &Value,
    op: BinaryOp,
    span: Span,
) -> Result<Value, LangError> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op, span),
        (Value::Str(a), Value::Str(b)) => eval_string_binary(a, b, op, span),
        (Value::Bool(a), Value::Bool(b)) => eval_bool_binary(*a, *b, op, span),
        (Value::Str(s), Value::Int(n)) if op == BinaryOp::Mul => Ok(Value::Str(repeat(s, *n)?)),
        _ => Err(binary_type_mismatch(left, right, op, span)),
    }
}

fn eval_int_binary(a: i32, b: i32, op: BinaryOp, span: Span) -> Result<Value, LangError> {
    match op {
        BinaryOp::Add => Ok(Value::Int(a.wrapping_add(b))),
        BinaryOp::Sub => Ok(Value::Int(a.wrapping_sub(b))),
        BinaryOp::Mul => Ok(Value::Int(a.wrapping_mul(b))),
        BinaryOp::Div => {
            if b == 0 {
                Err(EvalError::DivisionByZero { span }.into())
            } else {
                Ok(Value::Int(a.wrapping_div(b)))
            }
        }
        BinaryOp::Mod => {
            if b == 0 {
                Err(EvalError::ModuloByZero { span }.into())
            } else {
                Ok(Value::Int(a.wrapping_rem(b)))
            }
        }
        BinaryOp::Lt => Ok(Value::Bool(a < b)),
        BinaryOp::Gt => Ok(Value::Bool(a > b)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::And | BinaryOp::Or => Err(invalid_binary_op(op, Ty::Int, span)),
    }
}

fn eval_string_binary(a: &[u8], b: &[u8], op: BinaryOp, span: Span) -> Result<Value, LangError> {
    match op {
        BinaryOp::Add => {
            let mut out = buffer::with_capacity(buffer::concat_len(a.len(), b.len())?)?;
            out.extend_from_slice(a);
            out.extend_from_slice(b);
            Ok(Value::Str(out))
        }
        BinaryOp::Lt => Ok(Value::Bool(a.cmp(b) == Ordering::Less)),
        BinaryOp::Gt => Ok(Value::Bool(a.cmp(b) == Ordering::Greater)),
        BinaryOp::Eq => Ok(Value::Bool(a == b)),
        BinaryOp::Sub
        | BinaryOp::Mul
        | BinaryOp::Div
        | BinaryOp::Mod
        | BinaryOp::And
        | BinaryOp::Or => Err(invalid_binary_op(op, Ty::Str, span)),
    }
}

/// Both operands are always evaluated before this runs; there is no
/// short-circuiting.
fn eval_bool_binary(a: bool, b: bool, op: BinaryOp, span: Span) -> Result<Value, LangError> {
    match op {
        BinaryOp::And => Ok(Value::Bool(a & b)),
        BinaryOp::Or => Ok(Value::Bool(a | b)),
        _ => Err(invalid_binary_op(op, Ty::Bool, span)),
    }
}

/// `s` repeated `count` times. A negative count gives the empty string.
fn repeat(s: &[u8], count: i32) -> Result<Vec<u8>, LangError> {
    let count = usize::try_from(count).unwrap_or(0);
    let len = buffer::repeat_len(s.len(), count)?;
    let mut out = buffer::with_capacity(len)?;
    if len > 0 {
        for _ in 0..count {
            out.extend_from_slice(s);
        }
    }
    Ok(out)
}

#[cold]
fn binary_type_mismatch(left: &Value, right: &Value, op: BinaryOp, span: Span) -> LangError {
    tracing::error!(
        %op,
        left = left.type_name(),
        right = right.type_name(),
        "evaluating ill-typed operands"
    );
    TypeError::Mismatch {
        op: op.as_symbol(),
        left: left.ty(),
        right: right.ty(),
        span,
    }
    .into()
}

#[cold]
fn invalid_binary_op(op: BinaryOp, ty: Ty, span: Span) -> LangError {
    tracing::error!(%op, operand = %ty, "evaluating operator on a type it does not accept");
    TypeError::NotAllowed {
        op: op.as_symbol(),
        ty,
        span,
    }
    .into()
}
