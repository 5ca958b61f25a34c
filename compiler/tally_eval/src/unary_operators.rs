//! Unary operator implementations for the evaluator.

use tally_diagnostic::{LangError, TypeError};
use tally_ir::{Span, UnaryOp, Value};

use crate::buffer;

/// Evaluate a unary operation.
///
/// `_` negates integers (wrapping) and reverses strings byte by byte into
/// a new buffer; `!` negates booleans.
pub fn evaluate_unary(value: &Value, op: UnaryOp, span: Span) -> Result<Value, LangError> {
    match (value, op) {
        (Value::Int(n), UnaryOp::Neg) => Ok(Value::Int(n.wrapping_neg())),
        (Value::Str(s), UnaryOp::Neg) => Ok(Value::Str(reverse_bytes(s)?)),
        (Value::Bool(b), UnaryOp::Not) => Ok(Value::Bool(!b)),
        _ => Err(invalid_unary_op(value, op, span)),
    }
}

fn reverse_bytes(s: &[u8]) -> Result<Vec<u8>, LangError> {
    let mut out = buffer::with_capacity(s.len())?;
    out.extend(s.iter().rev());
    Ok(out)
}

#[cold]
fn invalid_unary_op(value: &Value, op: UnaryOp, span: Span) -> LangError {
    tracing::error!(%op, operand = value.type_name(), "evaluating ill-typed unary operand");
    TypeError::NotAllowed {
        op: op.as_symbol(),
        ty: value.ty(),
        span,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ok(value: &Value, op: UnaryOp) -> Value {
        evaluate_unary(value, op, Span::DUMMY).unwrap_or_else(|e| panic!("{op} failed: {e}"))
    }

    #[test]
    fn negation() {
        assert_eq!(ok(&Value::Int(5), UnaryOp::Neg), Value::Int(-5));
        assert_eq!(ok(&Value::Int(0), UnaryOp::Neg), Value::Int(0));
        assert_eq!(ok(&Value::Int(i32::MIN), UnaryOp::Neg), Value::Int(i32::MIN));
    }

    #[test]
    fn reversal_is_bytewise() {
        assert_eq!(ok(&Value::string("abc"), UnaryOp::Neg), Value::string("cba"));
        assert_eq!(ok(&Value::string(""), UnaryOp::Neg), Value::string(""));
        // Multi-byte characters are not kept together.
        assert_eq!(
            ok(&Value::string("é"), UnaryOp::Neg),
            Value::Str(vec![0xA9, 0xC3])
        );
    }

    #[test]
    fn reversal_twice_is_equal_but_distinct() {
        let original = Value::string("hello");
        let once = ok(&original, UnaryOp::Neg);
        let twice = ok(&once, UnaryOp::Neg);
        assert_eq!(twice, original);

        let (Some(a), Some(b)) = (original.as_bytes(), twice.as_bytes()) else {
            panic!("expected strings");
        };
        assert_ne!(a.as_ptr(), b.as_ptr());
    }

    #[test]
    fn not() {
        assert_eq!(ok(&Value::Bool(true), UnaryOp::Not), Value::Bool(false));
        assert_eq!(ok(&Value::Bool(false), UnaryOp::Not), Value::Bool(true));
    }

    #[test]
    fn ill_typed() {
        assert!(evaluate_unary(&Value::Bool(true), UnaryOp::Neg, Span::DUMMY).is_err());
        assert!(evaluate_unary(&Value::Int(1), UnaryOp::Not, Span::DUMMY).is_err());
    }
}
