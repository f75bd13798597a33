//! Ergonomic constructors for programs and expressions.
//!
//! Parsing is an external collaborator, so programs arrive as ASTs. These
//! helpers keep embedders and tests from spelling out spans and boxes for
//! every node. Spans default to a zero point; use [`at`] where a test needs
//! a real location.

use smol_str::SmolStr;

use crate::core::Span;
use crate::syntax::declaration::{
    DEPENDS_ON_PROPERTY, Declaration, DeclarationKind, LoopContext,
};
use crate::syntax::expr::{Expr, InterpSegment, ObjectProperty, PathSegment};

fn dummy() -> Span {
    Span::point(0, 0)
}

/// A bare identifier expression.
pub fn ident(name: &str) -> Expr {
    Expr::Identifier {
        name: SmolStr::new(name),
        span: dummy(),
    }
}

/// A scoped access chain, e.g. `scoped(&["grandparent", "parent"])`.
pub fn scoped(segments: &[&str]) -> Expr {
    Expr::ScopedAccess {
        segments: segments
            .iter()
            .map(|s| PathSegment {
                name: SmolStr::new(s),
                span: dummy(),
            })
            .collect(),
        span: dummy(),
    }
}

/// An index access, e.g. `index(ident("items"), int(0))`.
pub fn index(base: Expr, idx: Expr) -> Expr {
    Expr::IndexAccess {
        base: Box::new(base),
        index: Box::new(idx),
        span: dummy(),
    }
}

/// A property access, e.g. `prop(ident("plan"), "id")`.
pub fn prop(base: Expr, property: &str) -> Expr {
    Expr::PropertyAccess {
        base: Box::new(base),
        property: SmolStr::new(property),
        span: dummy(),
    }
}

/// An object expression from (name, value) pairs.
pub fn obj(properties: Vec<(&str, Expr)>) -> Expr {
    Expr::Object {
        properties: properties
            .into_iter()
            .map(|(name, value)| ObjectProperty {
                name: SmolStr::new(name),
                value,
                span: dummy(),
            })
            .collect(),
        span: dummy(),
    }
}

/// An array expression.
pub fn arr(items: Vec<Expr>) -> Expr {
    Expr::Array {
        items,
        span: dummy(),
    }
}

/// A function call expression.
pub fn call(name: &str, args: Vec<Expr>) -> Expr {
    Expr::FunctionCall {
        name: SmolStr::new(name),
        args,
        span: dummy(),
    }
}

/// An interpolated string from segments.
pub fn interp(segments: Vec<InterpSegment>) -> Expr {
    Expr::Interpolation {
        segments,
        span: dummy(),
    }
}

/// A binary operation.
pub fn binary(op: &str, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary {
        op: SmolStr::new(op),
        lhs: Box::new(lhs),
        rhs: Box::new(rhs),
        span: dummy(),
    }
}

/// A conditional expression.
pub fn ternary(condition: Expr, then_value: Expr, else_value: Expr) -> Expr {
    Expr::Ternary {
        condition: Box::new(condition),
        then_value: Box::new(then_value),
        else_value: Box::new(else_value),
        span: dummy(),
    }
}

/// A string literal.
pub fn string(value: &str) -> Expr {
    Expr::StringLit {
        value: value.to_string(),
        span: dummy(),
    }
}

/// An integer literal.
pub fn int(value: i64) -> Expr {
    Expr::IntLit {
        value,
        span: dummy(),
    }
}

/// A boolean literal.
pub fn boolean(value: bool) -> Expr {
    Expr::BoolLit {
        value,
        span: dummy(),
    }
}

/// The null literal.
pub fn null() -> Expr {
    Expr::Null { span: dummy() }
}

/// Rewrite the top-level span of an expression.
pub fn at(expr: Expr, span: Span) -> Expr {
    match expr {
        Expr::Identifier { name, .. } => Expr::Identifier { name, span },
        Expr::ScopedAccess { segments, .. } => Expr::ScopedAccess { segments, span },
        Expr::IndexAccess { base, index, .. } => Expr::IndexAccess { base, index, span },
        Expr::PropertyAccess { base, property, .. } => Expr::PropertyAccess {
            base,
            property,
            span,
        },
        Expr::Object { properties, .. } => Expr::Object { properties, span },
        Expr::Array { items, .. } => Expr::Array { items, span },
        Expr::FunctionCall { name, args, .. } => Expr::FunctionCall { name, args, span },
        Expr::Interpolation { segments, .. } => Expr::Interpolation { segments, span },
        Expr::Binary { op, lhs, rhs, .. } => Expr::Binary { op, lhs, rhs, span },
        Expr::Ternary {
            condition,
            then_value,
            else_value,
            ..
        } => Expr::Ternary {
            condition,
            then_value,
            else_value,
            span,
        },
        Expr::StringLit { value, .. } => Expr::StringLit { value, span },
        Expr::IntLit { value, .. } => Expr::IntLit { value, span },
        Expr::BoolLit { value, .. } => Expr::BoolLit { value, span },
        Expr::Null { .. } => Expr::Null { span },
    }
}

/// Start building a resource declaration.
pub fn resource(name: &str, type_name: &str) -> DeclarationBuilder {
    DeclarationBuilder::new(name, type_name, DeclarationKind::Resource)
}

/// Start building a module declaration.
pub fn module(name: &str, path: &str) -> DeclarationBuilder {
    DeclarationBuilder::new(name, path, DeclarationKind::Module)
}

/// Builder for [`Declaration`].
pub struct DeclarationBuilder {
    name: SmolStr,
    kind: DeclarationKind,
    type_name: SmolStr,
    properties: Vec<ObjectProperty>,
    loop_context: Option<LoopContext>,
    children: Vec<Declaration>,
    span: Span,
    name_span: Span,
}

impl DeclarationBuilder {
    fn new(name: &str, type_name: &str, kind: DeclarationKind) -> Self {
        Self {
            name: SmolStr::new(name),
            kind,
            type_name: SmolStr::new(type_name),
            properties: Vec::new(),
            loop_context: None,
            children: Vec::new(),
            span: dummy(),
            name_span: dummy(),
        }
    }

    /// Add a property to the declaration body.
    pub fn body_prop(mut self, name: &str, value: Expr) -> Self {
        self.properties.push(ObjectProperty {
            name: SmolStr::new(name),
            value,
            span: dummy(),
        });
        self
    }

    /// Add a `dependsOn` list with the given entries.
    pub fn depends_on(self, entries: Vec<Expr>) -> Self {
        self.body_prop(DEPENDS_ON_PROPERTY, arr(entries))
    }

    /// Mark this declaration as loop-produced, e.g.
    /// `[for storageName in storageAccounts: { ... }]`.
    pub fn loop_over(mut self, variable: &str, collection: Expr) -> Self {
        self.loop_context = Some(LoopContext {
            variable: SmolStr::new(variable),
            collection,
        });
        self
    }

    /// Nest a child declaration inside this one.
    pub fn child(mut self, child: Declaration) -> Self {
        self.children.push(child);
        self
    }

    /// Set the declaration span.
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Set the declared-name span.
    pub fn name_span(mut self, span: Span) -> Self {
        self.name_span = span;
        self
    }

    pub fn build(self) -> Declaration {
        Declaration {
            name: self.name,
            kind: self.kind,
            type_name: self.type_name,
            body: Expr::Object {
                properties: self.properties,
                span: self.span,
            },
            loop_context: self.loop_context,
            children: self.children,
            span: self.span,
            name_span: self.name_span,
        }
    }
}
