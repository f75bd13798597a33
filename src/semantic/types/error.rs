use thiserror::Error;

use crate::core::Span;

/// Errors raised while building the symbol model from a program.
///
/// The analysis itself never raises errors; anything it cannot classify it
/// skips. Binding failures mean the input program violates the model's
/// preconditions and are propagated to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindError {
    #[error("declaration '{name}' is already defined in this scope")]
    DuplicateDeclaration { name: String, span: Span },
}

impl BindError {
    /// The source location the error points at.
    pub fn span(&self) -> Span {
        match self {
            BindError::DuplicateDeclaration { span, .. } => *span,
        }
    }
}
