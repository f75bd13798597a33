//! Redundancy checking: declared `dependsOn` entries already implied by the
//! inferred dependency set.

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::analysis::reference::extract_reference;
use crate::analysis::RULE_CODE;
use crate::semantic::model::{DeclarationId, SymbolModel};
use crate::semantic::types::{Diagnostic, DiagnosticSink};

/// Format the diagnostic message for a redundant entry.
///
/// The wording is part of the external contract; tooling matches it
/// verbatim.
pub fn format_message(entry_text: &str) -> String {
    format!("Remove unnecessary dependsOn entry '{entry_text}'.")
}

/// Check one declaration's explicit dependency list against its inferred
/// set, emitting a diagnostic per redundant entry.
///
/// Entries that are not a recognized reference shape are skipped silently;
/// unrecognized shapes are never flagged. Duplicate entries naming the same
/// target each produce their own diagnostic. A declaration without a
/// dependency list, or with an empty one, contributes nothing.
pub fn check(
    model: &SymbolModel<'_>,
    id: DeclarationId,
    inferred: &FxHashSet<DeclarationId>,
    sink: &mut DiagnosticSink,
) {
    let Some(entries) = model.depends_on_list(id) else {
        return;
    };

    for entry in entries {
        let Some(reference) = extract_reference(entry, model, id) else {
            trace!(
                "[CHECK] '{}': skipping unrecognized dependsOn entry",
                model.symbol(id).name
            );
            continue;
        };
        if inferred.contains(&reference.target) {
            trace!(
                "[CHECK] '{}': redundant dependsOn entry '{}'",
                model.symbol(id).name,
                reference.text
            );
            sink.add(Diagnostic::new(
                entry.span(),
                RULE_CODE,
                format_message(&reference.text),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::inference::infer;
    use crate::core::Span;
    use crate::semantic::model::bind;
    use crate::syntax::Program;
    use crate::syntax::builder::*;

    fn id_of(model: &SymbolModel<'_>, name: &str) -> DeclarationId {
        model
            .iter_ids()
            .find(|id| model.symbol(*id).name == name)
            .unwrap()
    }

    fn check_decl(program: &Program, name: &str) -> Vec<Diagnostic> {
        let model = bind(program).unwrap();
        let id = id_of(&model, name);
        let inferred = infer(&model, id);
        let mut sink = DiagnosticSink::new();
        check(&model, id, &inferred, &mut sink);
        sink.finish()
    }

    #[test]
    fn test_redundant_entry_flagged_with_exact_text() {
        let program = Program::new(vec![
            resource("plan", "Microsoft.Web/serverfarms@2020-12-01").build(),
            resource("web", "Microsoft.Web/sites@2018-11-01")
                .body_prop("properties", obj(vec![("serverFarmId", prop(ident("plan"), "id"))]))
                .depends_on(vec![ident("plan")])
                .build(),
        ]);

        let diagnostics = check_decl(&program, "web");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message.as_ref(),
            "Remove unnecessary dependsOn entry 'plan'."
        );
    }

    #[test]
    fn test_necessary_entry_not_flagged() {
        let program = Program::new(vec![
            resource("plan", "Microsoft.Web/serverfarms@2020-12-01").build(),
            resource("web", "Microsoft.Web/sites@2018-11-01")
                .depends_on(vec![ident("plan")])
                .build(),
        ]);
        assert!(check_decl(&program, "web").is_empty());
    }

    #[test]
    fn test_unrecognized_entry_shapes_skipped() {
        let program = Program::new(vec![
            resource("plan", "Microsoft.Web/serverfarms@2020-12-01").build(),
            resource("web", "Microsoft.Web/sites@2018-11-01")
                .body_prop("properties", obj(vec![("serverFarmId", prop(ident("plan"), "id"))]))
                .depends_on(vec![
                    call("first", vec![ident("plan")]),
                    string("plan"),
                    binary("+", ident("plan"), int(0)),
                    prop(ident("plan"), "name"),
                ])
                .build(),
        ]);
        assert!(check_decl(&program, "web").is_empty());
    }

    #[test]
    fn test_duplicate_entries_each_flagged_at_own_span() {
        let span_a = Span::from_coords(10, 4, 10, 8);
        let span_b = Span::from_coords(11, 4, 11, 8);
        let program = Program::new(vec![
            resource("plan", "Microsoft.Web/serverfarms@2020-12-01").build(),
            resource("web", "Microsoft.Web/sites@2018-11-01")
                .body_prop("properties", obj(vec![("serverFarmId", prop(ident("plan"), "id"))]))
                .depends_on(vec![at(ident("plan"), span_a), at(ident("plan"), span_b)])
                .build(),
        ]);

        let diagnostics = check_decl(&program, "web");
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].span, span_a);
        assert_eq!(diagnostics[1].span, span_b);
        assert_eq!(diagnostics[0].message, diagnostics[1].message);
    }

    #[test]
    fn test_empty_list_silent() {
        let program = Program::new(vec![
            resource("web", "Microsoft.Web/sites@2018-11-01")
                .depends_on(vec![])
                .build(),
        ]);
        assert!(check_decl(&program, "web").is_empty());
    }

    #[test]
    fn test_unresolvable_entry_skipped() {
        let program = Program::new(vec![
            resource("web", "Microsoft.Web/sites@2018-11-01")
                .depends_on(vec![ident("missing")])
                .build(),
        ]);
        assert!(check_decl(&program, "web").is_empty());
    }
}
