//! Diagnostic output.
//!
//! [`TerminalEmitter`] renders to any writer (stderr in the binary) and
//! can underline the offending span when given the source line.
//! [`BufferEmitter`] keeps the rendered text for tests.

use std::io::Write;

use crate::Diagnostic;

/// Sink for diagnostics.
pub trait Emitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Attach the line the next diagnostics refer to. Emitters that do
    /// not show source ignore it.
    fn set_source(&mut self, _source: &str) {}

    fn flush(&mut self) {}
}

/// Render a diagnostic, with a caret line under `source` when both the
/// source and the span are available.
///
/// Spans are byte offsets; the caret column and width count characters
/// so the underline stays aligned after multi-byte text.
pub fn render(diagnostic: &Diagnostic, source: Option<&str>) -> String {
    let mut out = diagnostic.to_string();
    if let (Some(source), Some(span)) = (source, diagnostic.span) {
        let start = span.start as usize;
        let end = (span.end as usize).clamp(start, source.len().max(start));
        if let (Some(prefix), Some(text)) = (source.get(..start), source.get(start..end)) {
            let column = prefix.chars().count();
            let width = text.chars().count().max(1);
            out.push_str("\n  | ");
            out.push_str(source);
            out.push_str("\n  | ");
            out.push_str(&" ".repeat(column));
            out.push_str(&"^".repeat(width));
        }
    }
    out
}

/// Writes diagnostics to a terminal-like writer.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    source: Option<String>,
}

impl<W: Write> TerminalEmitter<W> {
    pub fn new(writer: W) -> Self {
        TerminalEmitter {
            writer,
            source: None,
        }
    }
}

impl<W: Write> Emitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let text = render(diagnostic, self.source.as_deref());
        // A broken stderr leaves nowhere to report to.
        let _ = writeln!(self.writer, "{text}");
    }

    fn set_source(&mut self, source: &str) {
        self.source = Some(source.to_owned());
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}

/// Captures rendered diagnostics in memory.
#[derive(Default)]
pub struct BufferEmitter {
    rendered: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl BufferEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// All rendered diagnostics, one per line.
    pub fn output(&self) -> String {
        self.rendered.join("\n")
    }

    pub fn clear(&mut self) {
        self.rendered.clear();
        self.diagnostics.clear();
    }
}

impl Emitter for BufferEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.rendered.push(render(diagnostic, None));
        self.diagnostics.push(diagnostic.clone());
    }
}
