//! Type inference for tally.
//!
//! A single bottom-up pass over the tree: children are typed before their
//! parent, and every node's `ty` is written in place. Identifier leaves are
//! resolved against the variable table here, so after a successful pass
//! no `Ty::Id` or `Ty::None` remains below the root and every identifier
//! leaf already holds a copy of its variable's value.
//!
//! The first error stops the pass. A root whose inference failed must not
//! be evaluated.

mod operators;

use tally_diagnostic::{LangError, TypeError};
use tally_ir::{Control, Node, NodeKind, Root, RootKind, Span, Ty, VarStore};
use tally_stack::ensure_sufficient_stack;

pub use operators::{infer_binary, infer_ternary, infer_unary};

/// Type a whole line.
///
/// Assignment roots keep their `Ty::Id` marker and only type the value.
/// Expression roots take the type of their expression; a format leaf is
/// already `Ty::Fmt` from the parser.
#[tracing::instrument(level = "trace", skip_all)]
pub fn infer_root<V: VarStore + ?Sized>(
    root: &mut Root,
    vars: &V,
    control: &Control,
) -> Result<(), LangError> {
    control.checkpoint()?;
    let mut infer = Infer::new(vars, control);

    match &mut root.kind {
        RootKind::Assign { value, .. } => {
            infer.infer_node(value)?;
        }
        RootKind::Expr { expr, .. } => {
            root.ty = infer.infer_node(expr)?;
        }
    }

    tracing::debug!(ty = %root.ty, "inferred line");
    Ok(())
}

/// Inference state for one line.
pub struct Infer<'a, V: VarStore + ?Sized> {
    vars: &'a V,
    control: &'a Control,
}

impl<'a, V: VarStore + ?Sized> Infer<'a, V> {
    pub fn new(vars: &'a V, control: &'a Control) -> Self {
        Infer { vars, control }
    }

    /// Type `node` and its subtree, returning the node's new type.
    pub fn infer_node(&mut self, node: &mut Node) -> Result<Ty, LangError> {
        ensure_sufficient_stack(|| self.infer_node_inner(node))
    }

    fn infer_node_inner(&mut self, node: &mut Node) -> Result<Ty, LangError> {
        self.control.checkpoint()?;
        let span = node.span;

        if let Some(name) = node.ident_name() {
            let name = name.to_owned();
            return self.infer_ident(node, &name, span);
        }

        let ty = match &mut node.kind {
            NodeKind::Leaf(_) => node.ty,
            NodeKind::Unary { op, operand } => {
                let operand = self.infer_node(operand)?;
                infer_unary(*op, operand, span)?
            }
            NodeKind::Binary { op, left, right } => {
                let left = self.infer_node(left)?;
                let right = self.infer_node(right)?;
                infer_binary(*op, left, right, span)?
            }
            NodeKind::Ternary {
                cond,
                then_branch,
                else_branch,
            } => {
                let cond = self.infer_node(cond)?;
                let then_ty = self.infer_node(then_branch)?;
                let else_ty = self.infer_node(else_branch)?;
                infer_ternary(cond, then_ty, else_ty, span)?
            }
        };

        tracing::trace!(node = %node.sexpr(), %ty, "typed node");
        node.ty = ty;
        Ok(ty)
    }

    /// Resolve an identifier leaf: its type and a copy of its value come
    /// from the variable table.
    fn infer_ident(&mut self, node: &mut Node, name: &str, span: Span) -> Result<Ty, LangError> {
        let Some(binding) = self.vars.lookup(name) else {
            return Err(undefined_variable(name, span));
        };
        if !binding.ty.is_runtime() {
            tracing::error!(name, ty = %binding.ty, "variable bound to a non-value type");
            return Err(LangError::internal(format!(
                "variable `{name}` is bound to {}",
                binding.ty
            )));
        }

        tracing::trace!(name, ty = %binding.ty, "resolved variable");
        node.ty = binding.ty;
        node.value = Some(binding.value);
        Ok(binding.ty)
    }
}

#[cold]
fn undefined_variable(name: &str, span: Span) -> LangError {
    LangError::UndefinedVariable {
        name: name.to_owned(),
        span,
    }
}

#[cold]
fn not_allowed(op: &'static str, ty: Ty, span: Span) -> LangError {
    TypeError::NotAllowed { op, ty, span }.into()
}

#[cold]
fn mismatch(op: &'static str, left: Ty, right: Ty, span: Span) -> LangError {
    TypeError::Mismatch {
        op,
        left,
        right,
        span,
    }
    .into()
}

#[cfg(test)]
mod tests;
