//! Tally IR - shared data structures for the tally interpreter.
//!
//! Everything the phases hand to each other lives here:
//!
//! - [`Token`] / [`TokenKind`]: lexer output, consumed by the parser
//! - [`Root`] / [`Node`]: the owned AST for one input line
//! - [`Ty`] and [`Value`]: type tags and runtime values stored on nodes
//! - [`VarStore`]: the seam to the variable table
//! - [`Control`]: the cancellation flags checked by every recursive step
//!
//! The tree is strictly owned: every internal node exclusively owns its
//! children through `Box`, so dropping a [`Root`] releases the whole tree,
//! string buffers included.

pub mod ast;
mod control;
mod format_spec;
mod operators;
mod span;
mod token;
mod ty;
mod value;
mod vars;

pub use ast::{Leaf, Node, NodeKind, Root, RootKind};
pub use control::{Control, Interrupt};
pub use format_spec::FormatSpec;
pub use operators::{BinaryOp, UnaryOp};
pub use span::Span;
pub use token::{Token, TokenKind};
pub use ty::Ty;
pub use value::Value;
pub use vars::{Binding, VarStore};
