use pretty_assertions::assert_eq;

use super::*;

fn int(n: i32) -> Node {
    Node::leaf(Leaf::Int(n), Span::DUMMY)
}

#[test]
fn leaves_start_with_their_literal_type() {
    assert_eq!(int(3).ty, Ty::Int);
    assert_eq!(Node::leaf(Leaf::Bool(true), Span::DUMMY).ty, Ty::Bool);
    assert_eq!(Node::leaf(Leaf::Str(b"ab".to_vec()), Span::DUMMY).ty, Ty::Str);
    assert_eq!(
        Node::leaf(Leaf::Fmt(FormatSpec::Hex), Span::DUMMY).ty,
        Ty::Fmt
    );
    assert_eq!(
        Node::leaf(Leaf::Ident("x".into()), Span::DUMMY).ty,
        Ty::Id
    );
}

#[test]
fn internal_nodes_start_untyped() {
    let node = Node::binary(BinaryOp::Add, int(3), int(4), Span::DUMMY);
    assert_eq!(node.ty, Ty::None);
    assert_eq!(node.value, None);
}

#[test]
fn sexpr_renders_every_arity() {
    let neg = Node::unary(UnaryOp::Neg, int(1), Span::DUMMY);
    let sum = Node::binary(BinaryOp::Add, neg, int(2), Span::DUMMY);
    let cond = Node::binary(BinaryOp::Lt, int(1), int(2), Span::DUMMY);
    let pick = Node::ternary(
        cond,
        Node::leaf(Leaf::Str(b"yes".to_vec()), Span::DUMMY),
        Node::leaf(Leaf::Str(b"no".to_vec()), Span::DUMMY),
        Span::DUMMY,
    );

    assert_eq!(sum.sexpr(), "(+ (_ 1) 2)");
    assert_eq!(pick.sexpr(), r#"(? (< 1 2) "yes" "no")"#);
}

#[test]
fn root_reports_its_format_spec() {
    let root = Root::expr(
        int(255),
        Some(Node::leaf(Leaf::Fmt(FormatSpec::HexUpper), Span::DUMMY)),
    );
    assert_eq!(root.format_spec(), Some(FormatSpec::HexUpper));
    assert_eq!(root.sexpr(), "255, #X");

    let plain = Root::expr(int(1), None);
    assert_eq!(plain.format_spec(), None);
}

#[test]
fn assignment_root_carries_target_marker() {
    let root = Root::assign(Node::leaf(Leaf::Ident("x".into()), Span::DUMMY), int(7));
    assert!(root.is_assignment());
    assert_eq!(root.ty, Ty::Id);
    assert_eq!(root.sexpr(), "(= x 7)");
}

#[test]
fn ident_name_only_for_identifier_leaves() {
    assert_eq!(
        Node::leaf(Leaf::Ident("count".into()), Span::DUMMY).ident_name(),
        Some("count")
    );
    assert_eq!(int(1).ident_name(), None);
}
