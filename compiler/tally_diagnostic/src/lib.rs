//! Error reporting for the tally interpreter.
//!
//! - [`LangError`]: what every phase returns on failure, grouped by
//!   [`ErrorKind`] (syntax, type, undefined variable, evaluation, internal)
//! - [`ErrorCode`]: a stable code per failure, for searchability
//! - [`Diagnostic`]: the rendered form handed to an [`emitter::Emitter`]
//!
//! A line produces at most one diagnostic: the first error stops the
//! line. Interrupts are not user-facing and never become diagnostics.

mod diagnostic;
pub mod emitter;
mod error_code;
mod errors;

pub use diagnostic::Diagnostic;
pub use emitter::{BufferEmitter, Emitter, TerminalEmitter};
pub use error_code::ErrorCode;
pub use errors::{ErrorKind, EvalError, LangError, SyntaxError, TypeError};
