//! Reference extraction: deciding whether an expression denotes a
//! declaration, and under which surface form.
//!
//! A pure query over the symbol model; no side effects, idempotent and
//! order-independent. Shapes the extractor does not recognize yield `None`
//! and are left to the caller to recurse into.

use tracing::trace;

use crate::core::Span;
use crate::semantic::model::{DeclarationId, SymbolModel};
use crate::syntax::Expr;

/// The result of recognizing an expression as pointing at a declaration.
///
/// `text` is the exact source form as written: scoped chains keep every `::`
/// separator, indexed accesses keep the index expression and drop any
/// trailing member access. No normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub target: DeclarationId,
    pub span: Span,
    pub text: String,
}

/// Try to read `expr` as a reference to a declaration, as seen from within
/// the body of the declaration `within`.
///
/// Recognized shapes, in precedence order:
/// - direct name access: `appServicePlan`
/// - scoped access: `grandparent::parent[::child…]`
/// - indexed access into a loop collection: `collection[expr]`, also when
///   wrapped in trailing member access (`collection[expr].name` reports
///   `collection[expr]`)
///
/// Index expressions are never evaluated; any index shape is accepted as
/// long as the base resolves to a loop collection.
pub fn extract_reference(
    expr: &Expr,
    model: &SymbolModel<'_>,
    within: DeclarationId,
) -> Option<Reference> {
    match expr {
        Expr::Identifier { name, span } => {
            let target = model.resolve(name, within)?;
            Some(Reference {
                target,
                span: *span,
                text: name.to_string(),
            })
        }
        Expr::ScopedAccess { segments, span } => {
            let names: Vec<_> = segments.iter().map(|s| s.name.clone()).collect();
            let target = model.resolve_scoped(&names, within)?;
            Some(Reference {
                target,
                span: *span,
                text: expr.source_text(),
            })
        }
        Expr::IndexAccess { base, span, .. } => {
            let base_ref = extract_reference(base, model, within)?;
            if !model.is_loop_collection(base_ref.target) {
                trace!(
                    "[EXTRACT] '{}' indexed but not a loop collection",
                    base_ref.text
                );
                return None;
            }
            Some(Reference {
                target: base_ref.target,
                span: *span,
                text: expr.source_text(),
            })
        }
        // `collection[i].name` counts as a reference to the collection; the
        // reported form stops at the indexing expression. A property access
        // over anything other than an index chain is not itself a reference.
        Expr::PropertyAccess { base, .. } => {
            let stripped = strip_member_access(base);
            match stripped {
                Expr::IndexAccess { .. } => extract_reference(stripped, model, within),
                _ => None,
            }
        }
        Expr::Object { .. }
        | Expr::Array { .. }
        | Expr::FunctionCall { .. }
        | Expr::Interpolation { .. }
        | Expr::Binary { .. }
        | Expr::Ternary { .. }
        | Expr::StringLit { .. }
        | Expr::IntLit { .. }
        | Expr::BoolLit { .. }
        | Expr::Null { .. } => None,
    }
}

/// Peel trailing member accesses: `a[0].b.c` -> `a[0]`, `x.y` -> `x`.
fn strip_member_access(expr: &Expr) -> &Expr {
    let mut current = expr;
    while let Expr::PropertyAccess { base, .. } = current {
        current = base;
    }
    current
}
