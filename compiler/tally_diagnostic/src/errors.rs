//! Language errors returned by the lexer, parser, inference and evaluator.
//!
//! Each phase has its own error enum; [`LangError`] unifies them so the
//! passes can propagate with `?` and the driver can report with one call.

use tally_ir::{Interrupt, Span, TokenKind, Ty};

use crate::ErrorCode;

/// User-facing error category.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorKind {
    Syntax,
    Type,
    UndefinedVariable,
    Eval,
    Internal,
    Interrupted,
}

/// Malformed input: bad characters, bad token sequences.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum SyntaxError {
    #[error("invalid character `{ch}`")]
    InvalidCharacter { ch: char, span: Span },

    #[error("unterminated string literal")]
    UnterminatedString { span: Span },

    #[error("integer literal `{text}` does not fit in 32 bits")]
    IntegerOutOfRange { text: String, span: Span },

    #[error("unexpected {found}")]
    UnexpectedToken { found: TokenKind, span: Span },

    #[error("expected `)`, found {found}")]
    ExpectedRParen { found: TokenKind, span: Span },

    #[error("expected `:` in conditional, found {found}")]
    ExpectedColon { found: TokenKind, span: Span },

    #[error("unexpected {found} after the end of the expression")]
    TrailingInput { found: TokenKind, span: Span },

    #[error("invalid format specifier `{text}` (expected one of d, x, X, b, B)")]
    InvalidFormatSpec { text: String, span: Span },
}

impl SyntaxError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SyntaxError::InvalidCharacter { .. } => ErrorCode::E0001,
            SyntaxError::UnterminatedString { .. } => ErrorCode::E0002,
            SyntaxError::IntegerOutOfRange { .. } => ErrorCode::E0003,
            SyntaxError::UnexpectedToken { .. } => ErrorCode::E1001,
            SyntaxError::ExpectedRParen { .. } => ErrorCode::E1002,
            SyntaxError::ExpectedColon { .. } => ErrorCode::E1003,
            SyntaxError::TrailingInput { .. } => ErrorCode::E1004,
            SyntaxError::InvalidFormatSpec { .. } => ErrorCode::E1005,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            SyntaxError::InvalidCharacter { span, .. }
            | SyntaxError::UnterminatedString { span }
            | SyntaxError::IntegerOutOfRange { span, .. }
            | SyntaxError::UnexpectedToken { span, .. }
            | SyntaxError::ExpectedRParen { span, .. }
            | SyntaxError::ExpectedColon { span, .. }
            | SyntaxError::TrailingInput { span, .. }
            | SyntaxError::InvalidFormatSpec { span, .. } => *span,
        }
    }
}

/// Operand types that an operator does not accept.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum TypeError {
    /// Two operands that must share a type do not.
    #[error("mismatched operand types for `{op}`: {left} and {right}")]
    Mismatch {
        op: &'static str,
        left: Ty,
        right: Ty,
        span: Span,
    },

    /// An operand's type is outside the operator's allow-list.
    #[error("operator `{op}` cannot be applied to {ty}")]
    NotAllowed {
        op: &'static str,
        ty: Ty,
        span: Span,
    },

    #[error("`{name}` is a reserved word and cannot be assigned")]
    ReservedName { name: String, span: Span },
}

impl TypeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            TypeError::Mismatch { .. } => ErrorCode::E2001,
            TypeError::NotAllowed { .. } => ErrorCode::E2002,
            TypeError::ReservedName { .. } => ErrorCode::E2004,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            TypeError::Mismatch { span, .. }
            | TypeError::NotAllowed { span, .. }
            | TypeError::ReservedName { span, .. } => *span,
        }
    }
}

/// Runtime faults. A well-typed tree can only fail this way.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero { span: Span },

    #[error("modulo by zero")]
    ModuloByZero { span: Span },
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::DivisionByZero { .. } => ErrorCode::E6001,
            EvalError::ModuloByZero { .. } => ErrorCode::E6002,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            EvalError::DivisionByZero { span } | EvalError::ModuloByZero { span } => *span,
        }
    }
}

/// Any failure while processing one line.
#[derive(Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum LangError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error("undefined variable `{name}`")]
    UndefinedVariable { name: String, span: Span },

    #[error(transparent)]
    Eval(#[from] EvalError),

    /// Broken interpreter invariant; logged, never caused by user input on a
    /// correctly working pipeline.
    #[error("internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Interrupted(#[from] Interrupt),
}

impl LangError {
    pub fn internal(message: impl Into<String>) -> Self {
        LangError::Internal(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LangError::Syntax(_) => ErrorKind::Syntax,
            LangError::Type(_) => ErrorKind::Type,
            LangError::UndefinedVariable { .. } => ErrorKind::UndefinedVariable,
            LangError::Eval(_) => ErrorKind::Eval,
            LangError::Internal(_) => ErrorKind::Internal,
            LangError::Interrupted(_) => ErrorKind::Interrupted,
        }
    }

    /// Error code; `None` for interrupts, which are not reported.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            LangError::Syntax(e) => Some(e.code()),
            LangError::Type(e) => Some(e.code()),
            LangError::UndefinedVariable { .. } => Some(ErrorCode::E2003),
            LangError::Eval(e) => Some(e.code()),
            LangError::Internal(_) => Some(ErrorCode::E9001),
            LangError::Interrupted(_) => None,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            LangError::Syntax(e) => Some(e.span()),
            LangError::Type(e) => Some(e.span()),
            LangError::UndefinedVariable { span, .. } => Some(*span),
            LangError::Eval(e) => Some(e.span()),
            LangError::Internal(_) | LangError::Interrupted(_) => None,
        }
    }
}
