//! Resource and module declarations.

use smol_str::SmolStr;

use crate::core::Span;
use crate::syntax::expr::Expr;

/// Property name carrying the explicit ordering hints in a declaration body.
pub const DEPENDS_ON_PROPERTY: &str = "dependsOn";

/// Property name carrying an explicit parent reference in a declaration body.
pub const PARENT_PROPERTY: &str = "parent";

/// What kind of unit a declaration introduces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Resource,
    Module,
}

impl DeclarationKind {
    pub fn display(&self) -> &'static str {
        match self {
            DeclarationKind::Resource => "resource",
            DeclarationKind::Module => "module",
        }
    }
}

/// Loop context for a declaration that produces a collection,
/// e.g. `[for storageName in storageAccounts: { ... }]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LoopContext {
    /// The loop variable name
    pub variable: SmolStr,
    /// The expression producing the source collection
    pub collection: Expr,
}

/// A named resource or module declaration.
///
/// Children declared inside the body are owned by this declaration; the
/// symbol model records the reverse (child → parent) relation as a lookup,
/// never as ownership.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: SmolStr,
    pub kind: DeclarationKind,
    /// Resource type or module path as written, e.g.
    /// `Microsoft.Web/sites@2018-11-01`
    pub type_name: SmolStr,
    /// The declaration body (an object expression). The `dependsOn` and
    /// `parent` properties live here like any other property; the analysis
    /// gives them their special meaning.
    pub body: Expr,
    /// Present when this declaration produces a loop collection
    pub loop_context: Option<LoopContext>,
    /// Declarations nested inside this one's body
    pub children: Vec<Declaration>,
    /// Span of the whole declaration
    pub span: Span,
    /// Span of the declared name
    pub name_span: Span,
}

impl Declaration {
    /// The explicit dependency list, if the body declares one.
    ///
    /// Returns the entry expressions in list order. A `dependsOn` property
    /// whose value is not an array counts as absent.
    pub fn depends_on_entries(&self) -> Option<&[Expr]> {
        match &self.depends_on_property()?.value {
            Expr::Array { items, .. } => Some(items),
            _ => None,
        }
    }

    /// The `dependsOn` property itself, if present.
    pub fn depends_on_property(&self) -> Option<&crate::syntax::expr::ObjectProperty> {
        self.body.property(DEPENDS_ON_PROPERTY)
    }

    /// The explicit parent reference expression, if the body declares one.
    pub fn parent_ref(&self) -> Option<&Expr> {
        self.body.property(PARENT_PROPERTY).map(|p| &p.value)
    }

    /// Whether this declaration produces a loop collection.
    pub fn is_loop(&self) -> bool {
        self.loop_context.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::builder::*;

    #[test]
    fn test_depends_on_entries_in_list_order() {
        let decl = resource("web", "Microsoft.Web/sites@2018-11-01")
            .body_prop("name", string("web"))
            .depends_on(vec![ident("a"), ident("b")])
            .build();

        let entries = decl.depends_on_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].source_text(), "a");
        assert_eq!(entries[1].source_text(), "b");
    }

    #[test]
    fn test_depends_on_absent() {
        let decl = resource("web", "Microsoft.Web/sites@2018-11-01")
            .body_prop("name", string("web"))
            .build();
        assert!(decl.depends_on_entries().is_none());
    }

    #[test]
    fn test_depends_on_non_array_counts_as_absent() {
        let decl = resource("web", "Microsoft.Web/sites@2018-11-01")
            .body_prop(DEPENDS_ON_PROPERTY, string("oops"))
            .build();
        assert!(decl.depends_on_entries().is_none());
    }

    #[test]
    fn test_parent_ref() {
        let decl = resource("child", "Microsoft.Net/a/b@2021-01-01")
            .body_prop(PARENT_PROPERTY, ident("parentResource"))
            .build();
        assert_eq!(decl.parent_ref().unwrap().source_text(), "parentResource");
    }
}
