//! Diagnostic types for the dependency analysis.

use std::sync::Arc;

use crate::core::Span;

/// A diagnostic message with location.
///
/// The message text is part of the external contract; hosting tooling
/// matches on it verbatim. Severity mapping and rendering belong to the
/// hosting linter, not to this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where the diagnostic applies.
    pub span: Span,
    /// Rule code, e.g. `no-unnecessary-dependson`.
    pub code: Arc<str>,
    /// The diagnostic message.
    pub message: Arc<str>,
}

impl Diagnostic {
    pub fn new(span: Span, code: impl Into<Arc<str>>, message: impl Into<Arc<str>>) -> Self {
        Self {
            span,
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Accumulates diagnostics during one analysis pass.
///
/// Append-only: entries keep the order they were added in (document order of
/// declarations, list order within a declaration). No deduplication, sorting,
/// or filtering happens here. A fresh sink is created per run.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    /// Create a new empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic.
    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// The diagnostics accumulated so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of accumulated diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Whether the sink is empty.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Finalize the sink, handing the accumulated sequence to the caller.
    pub fn finish(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
