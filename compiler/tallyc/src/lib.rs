//! Tally driver.
//!
//! Glues the passes together for one line at a time:
//!
//! ```text
//! line -> parse_line -> Root -> infer_and_evaluate -> store or print -> release
//! ```
//!
//! [`Session`] owns everything that outlives a line (the variable table,
//! the cancellation flags and the diagnostic sink) and is what the `tally`
//! binary drives.

pub mod config;
pub mod format;
mod session;
mod tracing_setup;

use tally_diagnostic::LangError;
use tally_eval::eval_root;
use tally_ir::{Control, Root, VarStore};
use tally_types::infer_root;

pub use session::{LineOutcome, Session};
pub use tally_parse::parse_line;
pub use tracing_setup::init_tracing;

/// Type-check a parsed line, then evaluate it.
///
/// Evaluation never starts when inference fails. For an assignment the
/// value ends up in `vars`; for an expression in `root.value`.
#[tracing::instrument(level = "trace", skip_all)]
pub fn infer_and_evaluate<V: VarStore + ?Sized>(
    root: &mut Root,
    vars: &mut V,
    control: &Control,
) -> Result<(), LangError> {
    infer_root(root, vars, control)?;
    eval_root(root, vars, control)
}

/// End the lifetime of a line's tree, freeing every node and buffer.
pub fn release(root: Root) {
    drop(root);
}
