//! Typing rules for operators.
//!
//! Pure functions over already-inferred child types. The allow-lists come
//! from [`BinaryOp::allowed_operands`] and [`UnaryOp::allowed_operands`];
//! the `bool` result of comparisons is applied here, after the operand
//! check, through [`BinaryOp::result_type`].

use tally_diagnostic::LangError;
use tally_ir::{BinaryOp, Span, Ty, UnaryOp};

use crate::{mismatch, not_allowed};

/// `_` keeps its operand's type (int or string), `!` requires a bool.
pub fn infer_unary(op: UnaryOp, operand: Ty, span: Span) -> Result<Ty, LangError> {
    if op.allowed_operands().contains(&operand) {
        Ok(operand)
    } else {
        Err(not_allowed(op.as_symbol(), operand, span))
    }
}

/// Both operands must share one type from the operator's allow-list,
/// except for `*` which repeats strings by an integer count.
pub fn infer_binary(op: BinaryOp, left: Ty, right: Ty, span: Span) -> Result<Ty, LangError> {
    if op == BinaryOp::Mul {
        return infer_repeat(left, right, span);
    }

    let symbol = op.as_symbol();
    if left != right {
        return Err(mismatch(symbol, left, right, span));
    }
    if !op.allowed_operands().contains(&left) {
        return Err(not_allowed(symbol, left, span));
    }
    Ok(op.result_type(left))
}

/// `int * int -> int`, `string * int -> string`.
fn infer_repeat(left: Ty, right: Ty, span: Span) -> Result<Ty, LangError> {
    let symbol = BinaryOp::Mul.as_symbol();
    if right != Ty::Int {
        return Err(match left {
            Ty::Int | Ty::Str => mismatch(symbol, left, right, span),
            _ => not_allowed(symbol, left, span),
        });
    }
    if BinaryOp::Mul.allowed_operands().contains(&left) {
        Ok(left)
    } else {
        Err(not_allowed(symbol, left, span))
    }
}

/// The condition must be a bool; both branches must share a type, which
/// becomes the conditional's type.
pub fn infer_ternary(cond: Ty, then_ty: Ty, else_ty: Ty, span: Span) -> Result<Ty, LangError> {
    if cond != Ty::Bool {
        return Err(not_allowed("?", cond, span));
    }
    if then_ty != else_ty {
        return Err(mismatch(":", then_ty, else_ty, span));
    }
    Ok(then_ty)
}
