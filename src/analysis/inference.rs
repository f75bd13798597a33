//! Dependency inference: the set of declarations a declaration implicitly
//! depends on, derived from its body and from parent/child structure.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::trace;

use crate::analysis::reference::extract_reference;
use crate::semantic::model::{DeclarationId, SymbolModel};
use crate::syntax::{DEPENDS_ON_PROPERTY, Expr};

/// Per-declaration inferred dependency sets. Direct edges only; no
/// transitive closure is ever computed over this map.
pub type InferredDependencies = FxHashMap<DeclarationId, FxHashSet<DeclarationId>>;

/// Build the inferred dependency set for every declaration in the model.
pub fn infer_all(model: &SymbolModel<'_>) -> InferredDependencies {
    let mut map = InferredDependencies::default();
    for id in model.iter_ids() {
        map.insert(id, infer(model, id));
    }
    map
}

/// The declarations `id` implicitly depends on.
///
/// Pre-order walk of the body with the `dependsOn` subtree excluded, so
/// declared entries are never echoed back as inferred. A recognized
/// reference is terminal: its subtree is not descended into, since anything
/// below it belongs to the resolved declaration's own structure. The loop
/// source collection, when present, is walked as part of the declaration.
///
/// Structural rules applied unconditionally, independent of the body: a
/// nested child depends on its enclosing parent, and a declaration with an
/// explicit `parent:` reference depends on its target. The deployment engine
/// orders parents before children regardless of what the body references.
///
/// The result is an under-approximation: expressions the extractor cannot
/// classify are silently omitted, which can only hide a redundancy, never
/// invent one.
pub fn infer(model: &SymbolModel<'_>, id: DeclarationId) -> FxHashSet<DeclarationId> {
    let mut dependencies = FxHashSet::default();

    if let Some(parent) = model.parent_of(id) {
        trace!(
            "[INFER] '{}' depends on parent '{}'",
            model.symbol(id).name,
            model.symbol(parent).name
        );
        dependencies.insert(parent);
    }

    let body = model.declaring_body(id);
    match body {
        Expr::Object { properties, .. } => {
            for property in properties {
                if property.name == DEPENDS_ON_PROPERTY {
                    continue;
                }
                walk(&property.value, model, id, &mut dependencies);
            }
        }
        other => walk(other, model, id, &mut dependencies),
    }

    if let Some(loop_ctx) = &model.declaration(id).loop_context {
        walk(&loop_ctx.collection, model, id, &mut dependencies);
    }

    dependencies
}

fn walk(
    expr: &Expr,
    model: &SymbolModel<'_>,
    within: DeclarationId,
    dependencies: &mut FxHashSet<DeclarationId>,
) {
    if let Some(reference) = extract_reference(expr, model, within) {
        trace!(
            "[INFER] '{}' references '{}' via '{}'",
            model.symbol(within).name,
            model.symbol(reference.target).name,
            reference.text
        );
        dependencies.insert(reference.target);
        return;
    }
    for child in expr.children() {
        walk(child, model, within, dependencies);
    }
}
