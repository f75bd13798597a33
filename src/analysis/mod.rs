//! # Dependency Analysis
//!
//! Flags explicit `dependsOn` entries that are already implied by a
//! program's data flow: ordinary body references, parent/child nesting, and
//! indexed access into loop collections. Removing them keeps generated
//! deployment graphs minimal.
//!
//! The comparison is direct-edge only: an entry that is implied merely
//! transitively (A reads B, B reads C, A declares C) is not flagged.

pub mod inference;
pub mod redundancy;
pub mod reference;

pub use inference::{InferredDependencies, infer, infer_all};
pub use redundancy::format_message;
pub use reference::{Reference, extract_reference};

use tracing::debug;

use crate::semantic::model::{SymbolModel, bind};
use crate::semantic::types::{BindError, Diagnostic, DiagnosticSink};
use crate::syntax::Program;

/// Stable identifier for this rule.
pub const RULE_CODE: &str = "no-unnecessary-dependson";

/// Documentation page for the rule.
pub const RULE_DOCS_URI: &str = "https://deplint.dev/rules/no-unnecessary-dependson";

/// Run the analysis over a bound program.
///
/// Pure and deterministic: the same model always yields the same diagnostic
/// sequence. Diagnostics appear in document order of declarations and, within
/// a declaration, in dependency-list order.
pub fn analyze(model: &SymbolModel<'_>) -> Vec<Diagnostic> {
    let inferred = infer_all(model);
    let mut sink = DiagnosticSink::new();
    for id in model.iter_ids() {
        redundancy::check(model, id, &inferred[&id], &mut sink);
    }
    debug!("[ANALYZE] {} diagnostic(s)", sink.len());
    sink.finish()
}

/// Bind a program and run the analysis in one step.
pub fn analyze_program(program: &Program) -> Result<Vec<Diagnostic>, BindError> {
    let model = bind(program)?;
    Ok(analyze(&model))
}
