use std::collections::HashMap;

use pretty_assertions::assert_eq;
use tally_diagnostic::{ErrorCode, LangError, TypeError};
use tally_ir::{
    BinaryOp, Binding, Control, Interrupt, Node, NodeKind, Root, RootKind, Span, Ty, UnaryOp,
    Value, VarStore,
};
use tally_parse::parse_line;

use super::{infer_binary, infer_root, infer_ternary, infer_unary};

#[derive(Default)]
struct Vars(HashMap<String, Binding>);

impl Vars {
    fn with(mut self, name: &str, value: Value) -> Self {
        self.0.insert(name.to_owned(), Binding::new(value));
        self
    }
}

impl VarStore for Vars {
    fn lookup(&self, name: &str) -> Option<Binding> {
        self.0.get(name).cloned()
    }

    fn store(&mut self, name: &str, ty: Ty, value: Value) {
        self.0.insert(name.to_owned(), Binding { ty, value });
    }
}

fn parse(source: &str) -> Root {
    parse_line(source, &Control::new()).unwrap_or_else(|e| panic!("parse of {source:?} failed: {e}"))
}

fn infer_with(source: &str, vars: &Vars) -> Result<Root, LangError> {
    let mut root = parse(source);
    infer_root(&mut root, vars, &Control::new())?;
    Ok(root)
}

fn infer(source: &str) -> Result<Root, LangError> {
    infer_with(source, &Vars::default())
}

fn root_ty(source: &str) -> Ty {
    infer(source)
        .unwrap_or_else(|e| panic!("inference of {source:?} failed: {e}"))
        .ty
}

fn error_code(source: &str) -> Option<ErrorCode> {
    match infer(source) {
        Ok(root) => panic!("expected {source:?} to be rejected, typed as {}", root.ty),
        Err(e) => e.code(),
    }
}

fn expr(root: &Root) -> &Node {
    match &root.kind {
        RootKind::Expr { expr, .. } => expr,
        RootKind::Assign { value, .. } => value,
    }
}

mod rules {
    use super::*;
    use pretty_assertions::assert_eq;

    const SPAN: Span = Span::DUMMY;

    #[test]
    fn unary_rules() {
        assert_eq!(infer_unary(UnaryOp::Neg, Ty::Int, SPAN), Ok(Ty::Int));
        assert_eq!(infer_unary(UnaryOp::Neg, Ty::Str, SPAN), Ok(Ty::Str));
        assert_eq!(infer_unary(UnaryOp::Not, Ty::Bool, SPAN), Ok(Ty::Bool));
        assert_eq!(
            infer_unary(UnaryOp::Neg, Ty::Bool, SPAN),
            Err(LangError::Type(TypeError::NotAllowed {
                op: "_",
                ty: Ty::Bool,
                span: SPAN,
            }))
        );
        assert!(infer_unary(UnaryOp::Not, Ty::Int, SPAN).is_err());
    }

    #[test]
    fn arithmetic_and_logic() {
        assert_eq!(infer_binary(BinaryOp::Add, Ty::Int, Ty::Int, SPAN), Ok(Ty::Int));
        assert_eq!(infer_binary(BinaryOp::Add, Ty::Str, Ty::Str, SPAN), Ok(Ty::Str));
        assert_eq!(infer_binary(BinaryOp::Sub, Ty::Int, Ty::Int, SPAN), Ok(Ty::Int));
        assert_eq!(infer_binary(BinaryOp::Div, Ty::Int, Ty::Int, SPAN), Ok(Ty::Int));
        assert_eq!(infer_binary(BinaryOp::Mod, Ty::Int, Ty::Int, SPAN), Ok(Ty::Int));
        assert_eq!(infer_binary(BinaryOp::And, Ty::Bool, Ty::Bool, SPAN), Ok(Ty::Bool));
        assert_eq!(infer_binary(BinaryOp::Or, Ty::Bool, Ty::Bool, SPAN), Ok(Ty::Bool));

        for op in [BinaryOp::Sub, BinaryOp::Div, BinaryOp::Mod] {
            assert!(infer_binary(op, Ty::Str, Ty::Str, SPAN).is_err(), "{op}");
        }
        assert!(infer_binary(BinaryOp::And, Ty::Int, Ty::Int, SPAN).is_err());
    }

    #[test]
    fn comparisons_produce_bool() {
        for op in [BinaryOp::Lt, BinaryOp::Gt, BinaryOp::Eq] {
            assert_eq!(infer_binary(op, Ty::Int, Ty::Int, SPAN), Ok(Ty::Bool), "{op}");
            assert_eq!(infer_binary(op, Ty::Str, Ty::Str, SPAN), Ok(Ty::Bool), "{op}");
            assert!(infer_binary(op, Ty::Bool, Ty::Bool, SPAN).is_err(), "{op}");
        }
    }

    #[test]
    fn mismatch_is_reported_before_allow_list() {
        assert_eq!(
            infer_binary(BinaryOp::Add, Ty::Int, Ty::Bool, SPAN),
            Err(LangError::Type(TypeError::Mismatch {
                op: "+",
                left: Ty::Int,
                right: Ty::Bool,
                span: SPAN,
            }))
        );
    }

    #[test]
    fn repeat() {
        assert_eq!(infer_binary(BinaryOp::Mul, Ty::Int, Ty::Int, SPAN), Ok(Ty::Int));
        assert_eq!(infer_binary(BinaryOp::Mul, Ty::Str, Ty::Int, SPAN), Ok(Ty::Str));
        assert!(infer_binary(BinaryOp::Mul, Ty::Int, Ty::Str, SPAN).is_err());
        assert!(infer_binary(BinaryOp::Mul, Ty::Str, Ty::Str, SPAN).is_err());
        assert!(infer_binary(BinaryOp::Mul, Ty::Bool, Ty::Int, SPAN).is_err());
    }

    #[test]
    fn ternary() {
        assert_eq!(infer_ternary(Ty::Bool, Ty::Str, Ty::Str, SPAN), Ok(Ty::Str));
        assert_eq!(
            infer_ternary(Ty::Int, Ty::Str, Ty::Str, SPAN)
                .err()
                .and_then(|e| e.code()),
            Some(ErrorCode::E2002)
        );
        assert_eq!(
            infer_ternary(Ty::Bool, Ty::Int, Ty::Str, SPAN)
                .err()
                .and_then(|e| e.code()),
            Some(ErrorCode::E2001)
        );
    }
}

mod lines {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn literal_roots() {
        assert_eq!(root_ty("7"), Ty::Int);
        assert_eq!(root_ty(r#""s""#), Ty::Str);
        assert_eq!(root_ty("true"), Ty::Bool);
    }

    #[test]
    fn nested_expressions() {
        assert_eq!(root_ty("((3 + 4) * 2)"), Ty::Int);
        assert_eq!(root_ty(r#"("ab" * 3)"#), Ty::Str);
        assert_eq!(root_ty(r#"(_ ("ab" + "cd"))"#), Ty::Str);
        assert_eq!(root_ty("((1 < 2) & (! false))"), Ty::Bool);
        assert_eq!(root_ty(r#"((1 < 2) ? "yes" : "no")"#), Ty::Str);
    }

    #[test]
    fn every_node_is_typed() {
        let root = infer("((1 + 2) < (_ 3))").unwrap_or_else(|e| panic!("{e}"));
        let NodeKind::Binary { left, right, .. } = &expr(&root).kind else {
            panic!("expected binary root expression");
        };
        assert_eq!(expr(&root).ty, Ty::Bool);
        assert_eq!(left.ty, Ty::Int);
        assert_eq!(right.ty, Ty::Int);
    }

    #[test]
    fn format_leaf_keeps_fmt() {
        let root = infer("(1 + 2), x").unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(root.ty, Ty::Int);
        let RootKind::Expr {
            format: Some(format),
            ..
        } = &root.kind
        else {
            panic!("expected format leaf");
        };
        assert_eq!(format.ty, Ty::Fmt);
    }

    #[test]
    fn assignment_keeps_marker() {
        let root = infer("x = (1 < 2)").unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(root.ty, Ty::Id);
        assert_eq!(expr(&root).ty, Ty::Bool);
        let RootKind::Assign { target, .. } = &root.kind else {
            panic!("expected assignment");
        };
        assert_eq!(target.ty, Ty::Id);
    }

    #[test]
    fn type_errors() {
        assert_eq!(error_code("(1 + true)"), Some(ErrorCode::E2001));
        assert_eq!(error_code(r#"(1 ~ "1")"#), Some(ErrorCode::E2001));
        assert_eq!(error_code(r#"("a" - "b")"#), Some(ErrorCode::E2002));
        assert_eq!(error_code("(true < false)"), Some(ErrorCode::E2002));
        assert_eq!(error_code("(! 1)"), Some(ErrorCode::E2002));
        assert_eq!(error_code(r#"(3 * "ab")"#), Some(ErrorCode::E2001));
        assert_eq!(error_code(r#"(1 ? 2 : 3)"#), Some(ErrorCode::E2002));
        assert_eq!(error_code(r#"(true ? 2 : "3")"#), Some(ErrorCode::E2001));
        assert_eq!(error_code("y = (1 + true)"), Some(ErrorCode::E2001));
    }

    #[test]
    fn first_error_wins() {
        // The left operand fails before the right one is looked at.
        assert_eq!(error_code("((! 1) + missing)"), Some(ErrorCode::E2002));
    }
}

mod variables {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn identifier_takes_binding() {
        let vars = Vars::default().with("x", Value::Int(7));
        let root = infer_with("x", &vars).unwrap_or_else(|e| panic!("{e}"));
        let node = expr(&root);
        assert_eq!(node.ty, Ty::Int);
        assert_eq!(node.value, Some(Value::Int(7)));
        assert_eq!(root.ty, Ty::Int);
    }

    #[test]
    fn identifiers_inside_expressions() {
        let vars = Vars::default()
            .with("s", Value::string("ab"))
            .with("n", Value::Int(3));
        let root = infer_with("(s * n)", &vars).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(root.ty, Ty::Str);
    }

    #[test]
    fn undefined_variable() {
        let Err(err) = infer("(1 + nope)") else {
            panic!("expected an undefined variable");
        };
        assert_eq!(
            err,
            LangError::UndefinedVariable {
                name: "nope".into(),
                span: Span::new(5, 9),
            }
        );
        assert_eq!(err.code(), Some(ErrorCode::E2003));
    }

    #[test]
    fn lookup_copies_value() {
        let mut vars = Vars::default().with("s", Value::string("abc"));
        let root = infer_with("s", &vars).unwrap_or_else(|e| panic!("{e}"));
        vars.store("s", Ty::Int, Value::Int(1));
        assert_eq!(expr(&root).value, Some(Value::string("abc")));
    }
}

#[test]
fn interrupt_propagates() {
    let mut root = parse("(1 + 2)");
    let control = Control::new();
    control.skip_current_line();
    assert_eq!(
        infer_root(&mut root, &Vars::default(), &control),
        Err(LangError::Interrupted(Interrupt::SkipLine))
    );
}
