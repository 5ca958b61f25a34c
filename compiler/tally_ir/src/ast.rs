//! AST for one input line.
//!
//! A line parses to a single [`Root`]: either an assignment or a bare
//! expression with an optional format specifier. Below the root, [`Node`]s
//! form a tree in which every internal node exclusively owns its one to
//! three children. No node is shared, so no reference counting is needed
//! and dropping the root frees the whole tree.
//!
//! Nodes are created by the parser and afterwards only mutated in place:
//! inference fills `ty`, evaluation fills `value`.

use std::fmt::{self, Write as _};

use crate::{BinaryOp, FormatSpec, Span, Ty, UnaryOp, Value};

/// Leaf payload.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Leaf {
    Int(i32),
    Bool(bool),
    Str(Vec<u8>),
    Fmt(FormatSpec),
    /// Variable reference, resolved during inference.
    Ident(String),
}

impl Leaf {
    /// Type a leaf has as soon as it is built.
    pub const fn initial_type(&self) -> Ty {
        match self {
            Leaf::Int(_) => Ty::Int,
            Leaf::Bool(_) => Ty::Bool,
            Leaf::Str(_) => Ty::Str,
            Leaf::Fmt(_) => Ty::Fmt,
            Leaf::Ident(_) => Ty::Id,
        }
    }

    /// Literal value, for leaves that carry one.
    pub fn literal(&self) -> Option<Value> {
        match self {
            Leaf::Int(n) => Some(Value::Int(*n)),
            Leaf::Bool(b) => Some(Value::Bool(*b)),
            Leaf::Str(s) => Some(Value::Str(s.clone())),
            Leaf::Fmt(_) | Leaf::Ident(_) => None,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum NodeKind {
    Leaf(Leaf),
    Unary {
        op: UnaryOp,
        operand: Box<Node>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// `(cond ? then_branch : else_branch)`
    Ternary {
        cond: Box<Node>,
        then_branch: Box<Node>,
        else_branch: Box<Node>,
    },
}

/// A non-root AST node.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub ty: Ty,
    /// Populated by evaluation (or by inference for identifier leaves).
    pub value: Option<Value>,
    pub span: Span,
}

impl Node {
    pub fn leaf(leaf: Leaf, span: Span) -> Self {
        Node {
            ty: leaf.initial_type(),
            kind: NodeKind::Leaf(leaf),
            value: None,
            span,
        }
    }

    pub fn unary(op: UnaryOp, operand: Node, span: Span) -> Self {
        Node::internal(
            NodeKind::Unary {
                op,
                operand: Box::new(operand),
            },
            span,
        )
    }

    pub fn binary(op: BinaryOp, left: Node, right: Node, span: Span) -> Self {
        Node::internal(
            NodeKind::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
            },
            span,
        )
    }

    pub fn ternary(cond: Node, then_branch: Node, else_branch: Node, span: Span) -> Self {
        Node::internal(
            NodeKind::Ternary {
                cond: Box::new(cond),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            },
            span,
        )
    }

    fn internal(kind: NodeKind, span: Span) -> Self {
        Node {
            kind,
            ty: Ty::None,
            value: None,
            span,
        }
    }

    /// Name of an identifier leaf.
    pub fn ident_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Leaf(Leaf::Ident(name)) => Some(name),
            _ => None,
        }
    }

    /// Render the tree shape as an s-expression, ignoring spans, types and
    /// values. Grouping parentheses never appear since they are not nodes.
    pub fn sexpr(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_sexpr(&mut out);
        out
    }

    fn write_sexpr(&self, out: &mut String) -> fmt::Result {
        match &self.kind {
            NodeKind::Leaf(leaf) => match leaf {
                Leaf::Int(n) => write!(out, "{n}"),
                Leaf::Bool(b) => write!(out, "{b}"),
                Leaf::Str(s) => write!(out, "{:?}", String::from_utf8_lossy(s)),
                Leaf::Fmt(spec) => write!(out, "#{spec}"),
                Leaf::Ident(name) => out.write_str(name),
            },
            NodeKind::Unary { op, operand } => {
                write!(out, "({op} ")?;
                operand.write_sexpr(out)?;
                out.write_char(')')
            }
            NodeKind::Binary { op, left, right } => {
                write!(out, "({op} ")?;
                left.write_sexpr(out)?;
                out.write_char(' ')?;
                right.write_sexpr(out)?;
                out.write_char(')')
            }
            NodeKind::Ternary {
                cond,
                then_branch,
                else_branch,
            } => {
                out.write_str("(? ")?;
                cond.write_sexpr(out)?;
                out.write_char(' ')?;
                then_branch.write_sexpr(out)?;
                out.write_char(' ')?;
                else_branch.write_sexpr(out)?;
                out.write_char(')')
            }
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum RootKind {
    /// `name = expr`; `target` is an identifier leaf.
    Assign { target: Node, value: Node },
    /// `expr` or `expr, spec`; `format` is a format-specifier leaf.
    Expr { expr: Node, format: Option<Node> },
}

/// Top of the tree for one input line.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Root {
    pub kind: RootKind,
    /// `Ty::Id` for assignments; the expression's type otherwise.
    pub ty: Ty,
    /// Result of an expression root after evaluation.
    pub value: Option<Value>,
}

impl Root {
    pub fn assign(target: Node, value: Node) -> Self {
        Root {
            kind: RootKind::Assign { target, value },
            ty: Ty::Id,
            value: None,
        }
    }

    pub fn expr(expr: Node, format: Option<Node>) -> Self {
        Root {
            kind: RootKind::Expr { expr, format },
            ty: Ty::None,
            value: None,
        }
    }

    pub fn is_assignment(&self) -> bool {
        matches!(self.kind, RootKind::Assign { .. })
    }

    /// Format specifier attached to an expression root, if any.
    pub fn format_spec(&self) -> Option<FormatSpec> {
        match &self.kind {
            RootKind::Expr {
                format: Some(node), ..
            } => match node.kind {
                NodeKind::Leaf(Leaf::Fmt(spec)) => Some(spec),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn sexpr(&self) -> String {
        match &self.kind {
            RootKind::Assign { target, value } => {
                format!("(= {} {})", target.sexpr(), value.sexpr())
            }
            RootKind::Expr { expr, format } => match format {
                Some(spec) => format!("{}, {}", expr.sexpr(), spec.sexpr()),
                None => expr.sexpr(),
            },
        }
    }
}

#[cfg(test)]
mod tests;
