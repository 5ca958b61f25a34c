use std::fmt;

use tally_ir::Span;

use crate::{ErrorCode, LangError};

/// A reportable message: what went wrong and where.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    /// Location within the input line, when known.
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            span: None,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Build the diagnostic for a language error. Interrupts yield `None`.
    pub fn from_error(error: &LangError) -> Option<Self> {
        let code = error.code()?;
        let diag = Diagnostic::error(code, error.to_string());
        Some(match error.span() {
            Some(span) => diag.with_span(span),
            None => diag,
        })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}
