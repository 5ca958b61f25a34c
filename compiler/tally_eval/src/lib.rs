//! Tree-walking evaluator for tally.
//!
//! Runs after a successful inference pass and fills every node's value
//! slot bottom-up. Identifier leaves already hold their value (inference
//! copied it from the variable table), literal leaves copy their payload.
//! An assignment root stores its value into the variable table; an
//! expression root copies its expression's value into its own slot.
//!
//! The only faults a well-typed tree can raise are division and modulo by
//! zero.

mod buffer;
mod environment;
mod operators;
mod unary_operators;

use tally_diagnostic::LangError;
use tally_ir::{Control, Node, NodeKind, Root, RootKind, Value, VarStore};
use tally_stack::ensure_sufficient_stack;

pub use environment::VarTable;
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;

/// Evaluate a typed line.
#[tracing::instrument(level = "trace", skip_all)]
pub fn eval_root<V: VarStore + ?Sized>(
    root: &mut Root,
    vars: &mut V,
    control: &Control,
) -> Result<(), LangError> {
    control.checkpoint()?;
    let mut eval = Evaluator::new(control);

    match &mut root.kind {
        RootKind::Assign { target, value } => {
            let result = eval.eval_node(value)?.clone();
            let Some(name) = target.ident_name() else {
                tracing::error!(target = %target.sexpr(), "assignment target is not an identifier");
                return Err(LangError::internal("assignment target is not an identifier"));
            };
            tracing::debug!(name, ty = %value.ty, "assign");
            vars.store(name, result.ty(), result);
        }
        RootKind::Expr { expr, .. } => {
            let result = eval.eval_node(expr)?.clone();
            tracing::debug!(value = %result, "evaluated line");
            root.value = Some(result);
        }
    }
    Ok(())
}

/// Evaluation state for one line.
pub struct Evaluator<'a> {
    control: &'a Control,
}

impl<'a> Evaluator<'a> {
    pub fn new(control: &'a Control) -> Self {
        Evaluator { control }
    }

    /// Evaluate `node` and its subtree, returning the node's new value.
    pub fn eval_node<'n>(&mut self, node: &'n mut Node) -> Result<&'n Value, LangError> {
        ensure_sufficient_stack(move || self.eval_node_inner(node))
    }

    fn eval_node_inner<'n>(&mut self, node: &'n mut Node) -> Result<&'n Value, LangError> {
        self.control.checkpoint()?;
        let span = node.span;

        let value = match &mut node.kind {
            NodeKind::Leaf(leaf) => match node.value.take() {
                // Identifier leaves were filled in by inference.
                Some(value) => value,
                None => leaf.literal().ok_or_else(|| {
                    tracing::error!(leaf = ?leaf, "leaf has no value to evaluate");
                    LangError::internal(format!("cannot evaluate leaf {leaf:?}"))
                })?,
            },
            NodeKind::Unary { op, operand } => {
                let operand = self.eval_node(operand)?;
                evaluate_unary(operand, *op, span)?
            }
            NodeKind::Binary { op, left, right } => {
                let left = self.eval_node(left)?;
                let right = self.eval_node(right)?;
                evaluate_binary(left, right, *op, span)?
            }
            NodeKind::Ternary {
                cond,
                then_branch,
                else_branch,
            } => {
                let chosen = match self.eval_node(cond)? {
                    Value::Bool(true) => then_branch,
                    Value::Bool(false) => else_branch,
                    other => {
                        tracing::error!(ty = other.type_name(), "conditional on a non-bool");
                        return Err(LangError::internal(format!(
                            "conditional on a {} value",
                            other.type_name()
                        )));
                    }
                };
                self.eval_node(chosen)?.clone()
            }
        };

        tracing::trace!(%value, "evaluated node");
        Ok(node.value.insert(value))
    }
}
