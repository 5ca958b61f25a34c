//! Line-at-a-time interpreter state.

use tally_diagnostic::{Diagnostic, Emitter, ErrorCode, ErrorKind, LangError};
use tally_eval::VarTable;
use tally_ir::{Control, Interrupt, Root, RootKind};

use crate::format::format_value;
use crate::{infer_and_evaluate, parse_line, release};

/// What happened to one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// An expression line; the formatted result to print.
    Value(String),
    /// An assignment stored into the named variable.
    Assigned(String),
    /// Nothing to do (blank line).
    Empty,
    /// The line was rejected; the diagnostic has already been emitted.
    Failed(ErrorCode),
    /// Work stopped because a control flag was raised.
    Interrupted(Interrupt),
}

/// An interpreter session: variables persist from line to line.
pub struct Session<E: Emitter> {
    vars: VarTable,
    control: Control,
    emitter: E,
}

impl<E: Emitter> Session<E> {
    pub fn new(emitter: E) -> Self {
        Self::with_control(emitter, Control::new())
    }

    /// Share flags with an outside party (a signal handler, for instance).
    pub fn with_control(emitter: E, control: Control) -> Self {
        Session {
            vars: VarTable::new(),
            control,
            emitter,
        }
    }

    pub fn vars(&self) -> &VarTable {
        &self.vars
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// Parse, type, evaluate and report one line.
    ///
    /// A failing line is reported once through the emitter and leaves the
    /// variable table untouched; the next line starts fresh.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        self.control.begin_line();
        if line.trim().is_empty() {
            return LineOutcome::Empty;
        }

        match self.run_line(line) {
            Ok(outcome) => outcome,
            Err(error) => self.report(line, &error),
        }
    }

    fn run_line(&mut self, line: &str) -> Result<LineOutcome, LangError> {
        let mut root = parse_line(line, &self.control)?;
        infer_and_evaluate(&mut root, &mut self.vars, &self.control)?;
        tracing::trace!(vars = self.vars.len(), "line evaluated");
        let outcome = outcome_of(&root)?;
        release(root);
        Ok(outcome)
    }

    fn report(&mut self, line: &str, error: &LangError) -> LineOutcome {
        if let LangError::Interrupted(interrupt) = error {
            tracing::debug!(%interrupt, "line interrupted");
            return LineOutcome::Interrupted(*interrupt);
        }
        let Some(diagnostic) = Diagnostic::from_error(error) else {
            tracing::error!(%error, "error without a code");
            return LineOutcome::Failed(ErrorCode::E9001);
        };

        if error.kind() == ErrorKind::Internal {
            tracing::error!(%error, "internal error, terminating");
            self.control.request_terminate();
        }

        self.emitter.set_source(line);
        self.emitter.emit(&diagnostic);
        self.emitter.flush();
        self.control.skip_current_line();
        LineOutcome::Failed(diagnostic.code)
    }
}

fn outcome_of(root: &Root) -> Result<LineOutcome, LangError> {
    match &root.kind {
        RootKind::Assign { target, .. } => target
            .ident_name()
            .map(|name| LineOutcome::Assigned(name.to_owned()))
            .ok_or_else(|| LangError::internal("assignment target is not an identifier")),
        RootKind::Expr { .. } => root
            .value
            .as_ref()
            .map(|value| LineOutcome::Value(format_value(value, root.format_spec())))
            .ok_or_else(|| LangError::internal("expression produced no value")),
    }
}

#[cfg(test)]
mod tests;
