//! Symbol model: identity and scope for every declaration.
//!
//! Built once per program by [`bind`], immutable afterwards. Every syntactic
//! notation that can name a declaration (plain name, scoped path, indexed
//! access) resolves to the same [`DeclarationId`], so set-membership
//! comparisons downstream never look at source text or AST node identity.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::trace;

use crate::core::Span;
use crate::semantic::types::BindError;
use crate::syntax::{Declaration, DeclarationKind, Expr, Program};

/// Unique identifier for a declaration in the arena.
/// Uses u32 for compact storage (supports ~4 billion declarations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeclarationId(pub u32);

impl DeclarationId {
    /// Create a new DeclarationId from an index
    pub fn new(index: usize) -> Self {
        Self(index as u32)
    }

    /// Get the index into the arena
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Semantic facts about one declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationSymbol {
    pub name: SmolStr,
    pub kind: DeclarationKind,
    /// Enclosing declaration for nested children; None at top level.
    /// A lookup relation only: children are owned by the AST, never through
    /// this back-reference.
    pub enclosing: Option<DeclarationId>,
    /// Target of an explicit `parent:` reference, resolved at bind time.
    pub explicit_parent: Option<DeclarationId>,
    /// Whether this declaration produces a loop collection.
    pub is_loop_collection: bool,
    pub span: Span,
    pub name_span: Span,
}

/// The symbol model consumed by the dependency analysis.
///
/// Borrows the program's AST; the arena index of each declaration is its
/// canonical identity. Declarations are stored in document order (each
/// declaration before its nested children), so iterating ids in arena order
/// is iterating the document.
#[derive(Debug)]
pub struct SymbolModel<'a> {
    decls: Vec<&'a Declaration>,
    symbols: Vec<DeclarationSymbol>,
    /// Names declared at the top level of the program
    top_level: IndexMap<SmolStr, DeclarationId>,
    /// Names of declarations nested directly inside each declaration
    children: FxHashMap<DeclarationId, IndexMap<SmolStr, DeclarationId>>,
}

impl<'a> SymbolModel<'a> {
    /// Number of declarations in the model.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the model contains no declarations.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All declaration ids, in document order.
    pub fn iter_ids(&self) -> impl Iterator<Item = DeclarationId> + use<> {
        (0..self.symbols.len() as u32).map(DeclarationId)
    }

    /// Semantic facts for a declaration.
    pub fn symbol(&self, id: DeclarationId) -> &DeclarationSymbol {
        &self.symbols[id.index()]
    }

    /// The AST node that declared this symbol.
    pub fn declaration(&self, id: DeclarationId) -> &'a Declaration {
        self.decls[id.index()]
    }

    /// The body expression of a declaration.
    pub fn declaring_body(&self, id: DeclarationId) -> &'a Expr {
        &self.decls[id.index()].body
    }

    /// The explicit dependency list of a declaration, in list order.
    pub fn depends_on_list(&self, id: DeclarationId) -> Option<&'a [Expr]> {
        self.decls[id.index()].depends_on_entries()
    }

    /// Whether this declaration produces a loop collection.
    pub fn is_loop_collection(&self, id: DeclarationId) -> bool {
        self.symbols[id.index()].is_loop_collection
    }

    /// The nesting/explicit-parent relation.
    ///
    /// Nested children report their enclosing declaration; top-level
    /// declarations report the target of their `parent:` reference if they
    /// carry one.
    pub fn parent_of(&self, id: DeclarationId) -> Option<DeclarationId> {
        let symbol = &self.symbols[id.index()];
        symbol.enclosing.or(symbol.explicit_parent)
    }

    /// Resolve a plain name as seen from within a declaration's body.
    ///
    /// Walks the scope chain outward: names nested inside the referencing
    /// declaration first, then each enclosing level, then the top level.
    /// A loop variable shadows declarations of the same name anywhere on the
    /// chain.
    pub fn resolve(&self, name: &str, within: DeclarationId) -> Option<DeclarationId> {
        let mut cursor = Some(within);
        while let Some(current) = cursor {
            let decl = self.decls[current.index()];
            if let Some(loop_ctx) = &decl.loop_context {
                if loop_ctx.variable == name {
                    trace!("[BIND] '{}' shadowed by loop variable of '{}'", name, decl.name);
                    return None;
                }
            }
            if let Some(found) = self.children.get(&current).and_then(|c| c.get(name)) {
                return Some(*found);
            }
            cursor = self.symbols[current.index()].enclosing;
        }
        self.top_level.get(name).copied()
    }

    /// Resolve a scoped path (`ancestor::descendant[::…]`) as seen from
    /// within a declaration's body.
    ///
    /// The first segment resolves like a plain name; every later segment
    /// must name a declaration nested directly inside the previous one.
    /// Fails if any segment does not.
    pub fn resolve_scoped(
        &self,
        segments: &[SmolStr],
        within: DeclarationId,
    ) -> Option<DeclarationId> {
        let (first, rest) = segments.split_first()?;
        let mut current = self.resolve(first, within)?;
        for segment in rest {
            current = *self.children.get(&current)?.get(segment)?;
        }
        Some(current)
    }
}

/// Build the symbol model for a program.
///
/// Assigns arena ids in document order, records nesting scopes, resolves
/// explicit `parent:` references, and rejects duplicate names within a
/// scope.
pub fn bind(program: &Program) -> Result<SymbolModel<'_>, BindError> {
    let mut model = SymbolModel {
        decls: Vec::new(),
        symbols: Vec::new(),
        top_level: IndexMap::new(),
        children: FxHashMap::default(),
    };

    for decl in &program.declarations {
        bind_declaration(&mut model, decl, None)?;
    }

    resolve_explicit_parents(&mut model);

    trace!("[BIND] bound {} declarations", model.symbols.len());
    Ok(model)
}

fn bind_declaration<'a>(
    model: &mut SymbolModel<'a>,
    decl: &'a Declaration,
    enclosing: Option<DeclarationId>,
) -> Result<DeclarationId, BindError> {
    let id = DeclarationId::new(model.symbols.len());

    let scope_names = match enclosing {
        Some(parent) => model.children.entry(parent).or_default(),
        None => &mut model.top_level,
    };
    if scope_names.contains_key(&decl.name) {
        return Err(BindError::DuplicateDeclaration {
            name: decl.name.to_string(),
            span: decl.name_span,
        });
    }
    scope_names.insert(decl.name.clone(), id);

    trace!(
        "[BIND] {} '{}' -> id {} (enclosing: {:?})",
        decl.kind.display(),
        decl.name,
        id.0,
        enclosing
    );

    model.decls.push(decl);
    model.symbols.push(DeclarationSymbol {
        name: decl.name.clone(),
        kind: decl.kind,
        enclosing,
        explicit_parent: None,
        is_loop_collection: decl.is_loop(),
        span: decl.span,
        name_span: decl.name_span,
    });

    for child in &decl.children {
        bind_declaration(model, child, Some(id))?;
    }

    Ok(id)
}

/// Resolve `parent:` properties to declaration ids.
///
/// Only a plain identifier is accepted as the parent target; anything else
/// is left unresolved and contributes no parent relation.
fn resolve_explicit_parents(model: &mut SymbolModel<'_>) {
    let mut resolved: Vec<(DeclarationId, DeclarationId)> = Vec::new();
    for id in model.iter_ids() {
        let Some(Expr::Identifier { name, .. }) = model.declaration(id).parent_ref() else {
            continue;
        };
        if let Some(target) = model.resolve(name, id) {
            trace!("[BIND] explicit parent of '{}' -> id {}", name, target.0);
            resolved.push((id, target));
        }
    }
    for (id, target) in resolved {
        model.symbols[id.index()].explicit_parent = Some(target);
    }
}
