//! Binary and unary operators.
//!
//! Operand typing lives here as data: [`BinaryOp::allowed_operands`] is
//! the per-operator allow-list consulted by inference and mirrored by the
//! evaluator's defensive checks. The result type is a separate question
//! answered by [`BinaryOp::result_type`], so the comparison operators can
//! share `+`'s operand list and still produce `bool`.

use std::fmt;

use crate::Ty;

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // Logical (both operands always evaluated)
    And,
    Or,

    // Comparison
    Lt,
    Gt,
    Eq,
}

impl BinaryOp {
    /// Source-level symbol, used in error messages.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::And => "&",
            Self::Or => "|",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "~",
        }
    }

    /// Operand types accepted when both operands share one type.
    ///
    /// `*` is asymmetric and is checked separately; its entry lists the
    /// types accepted on the left.
    pub const fn allowed_operands(self) -> &'static [Ty] {
        match self {
            Self::Add | Self::Mul | Self::Lt | Self::Gt | Self::Eq => &[Ty::Int, Ty::Str],
            Self::Sub | Self::Div | Self::Mod => &[Ty::Int],
            Self::And | Self::Or => &[Ty::Bool],
        }
    }

    pub const fn is_comparison(self) -> bool {
        matches!(self, Self::Lt | Self::Gt | Self::Eq)
    }

    /// Result type given the (already validated) left operand type.
    pub const fn result_type(self, operand: Ty) -> Ty {
        if self.is_comparison() {
            Ty::Bool
        } else {
            operand
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `_`: integer negation, string reversal.
    Neg,
    /// `!`: boolean negation.
    Not,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "_",
            Self::Not => "!",
        }
    }

    pub const fn allowed_operands(self) -> &'static [Ty] {
        match self {
            Self::Neg => &[Ty::Int, Ty::Str],
            Self::Not => &[Ty::Bool],
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}
