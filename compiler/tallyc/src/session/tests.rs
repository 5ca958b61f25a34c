use pretty_assertions::assert_eq;
use tally_diagnostic::{BufferEmitter, ErrorCode};
use tally_ir::{Control, Interrupt, Ty, Value, VarStore};

use super::{LineOutcome, Session};

fn session() -> Session<BufferEmitter> {
    Session::new(BufferEmitter::new())
}

fn value(text: &str) -> LineOutcome {
    LineOutcome::Value(text.to_owned())
}

#[test]
fn expression_lines() {
    let mut s = session();
    assert_eq!(s.process_line("(3 + 4)"), value("7"));
    assert_eq!(s.process_line(r#"("ab" * 3)"#), value("ababab"));
    assert_eq!(s.process_line("(255 + 0), x"), value("0xff"));
    assert_eq!(s.process_line("(1 < 2), d"), value("1"));
    assert!(s.emitter().diagnostics().is_empty());
}

#[test]
fn blank_lines_are_skipped() {
    let mut s = session();
    assert_eq!(s.process_line(""), LineOutcome::Empty);
    assert_eq!(s.process_line("   \t"), LineOutcome::Empty);
    assert!(s.emitter().diagnostics().is_empty());
}

#[test]
fn assignments_persist() {
    let mut s = session();
    assert_eq!(
        s.process_line("x = (3 + 4)"),
        LineOutcome::Assigned("x".into())
    );
    assert_eq!(s.process_line("x"), value("7"));
    assert_eq!(
        s.vars().lookup("x").map(|b| (b.ty, b.value)),
        Some((Ty::Int, Value::Int(7)))
    );
}

#[test]
fn each_failure_is_reported_once() {
    let mut s = session();
    assert_eq!(
        s.process_line("(5 / 0)"),
        LineOutcome::Failed(ErrorCode::E6001)
    );
    assert_eq!(s.emitter().diagnostics().len(), 1);
    assert_eq!(s.emitter().output(), "error[E6001]: division by zero");
    assert!(s.control().is_skipping_line());
}

#[test]
fn failure_does_not_poison_next_line() {
    let mut s = session();
    assert_eq!(
        s.process_line("(1 +"),
        LineOutcome::Failed(ErrorCode::E1001)
    );
    assert_eq!(s.process_line("(1 + 1)"), value("2"));
    assert!(!s.control().is_skipping_line());
}

#[test]
fn failed_assignment_leaves_variable_undefined() {
    let mut s = session();
    assert_eq!(
        s.process_line("y = (1 + true)"),
        LineOutcome::Failed(ErrorCode::E2001)
    );
    assert_eq!(
        s.process_line("y"),
        LineOutcome::Failed(ErrorCode::E2003)
    );
    assert!(s.vars().is_empty());
}

#[test]
fn reserved_assignment() {
    let mut s = session();
    assert_eq!(
        s.process_line("true = 1"),
        LineOutcome::Failed(ErrorCode::E2004)
    );
}

#[test]
fn terminate_stops_every_line() {
    let control = Control::new();
    let mut s = Session::with_control(BufferEmitter::new(), control.clone());
    control.request_terminate();

    assert_eq!(
        s.process_line("(1 + 2)"),
        LineOutcome::Interrupted(Interrupt::Terminate)
    );
    assert_eq!(
        s.process_line("x = 1"),
        LineOutcome::Interrupted(Interrupt::Terminate)
    );
    assert!(s.emitter().diagnostics().is_empty());
    assert!(s.vars().is_empty());
}
