//! Expression trees for declaration bodies.
//!
//! Expressions arrive from the external parser already shaped as a tagged
//! union; every shape the analysis cares about is a distinct variant, so the
//! reference extractor and the inference walk can match exhaustively instead
//! of probing node kinds at runtime.

use smol_str::SmolStr;

use crate::core::Span;

/// One segment of a scoped access chain (`ancestor::descendant`),
/// carrying the segment name and its own span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub name: SmolStr,
    pub span: Span,
}

/// A named property inside an object expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProperty {
    pub name: SmolStr,
    pub value: Expr,
    pub span: Span,
}

/// An expression in a declaration body.
///
/// Reference-shaped variants (`Identifier`, `ScopedAccess`, `IndexAccess`)
/// preserve enough structure that their written surface form round-trips
/// through [`Expr::source_text`].
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A bare identifier, e.g. `appServicePlan`
    Identifier { name: SmolStr, span: Span },
    /// An ancestor chain, e.g. `grandparent::parent::child`
    ScopedAccess { segments: Vec<PathSegment>, span: Span },
    /// Indexing into a collection, e.g. `storageAccountResources[0]`
    IndexAccess {
        base: Box<Expr>,
        index: Box<Expr>,
        span: Span,
    },
    /// Member access, e.g. `appServicePlan.id`
    PropertyAccess {
        base: Box<Expr>,
        property: SmolStr,
        span: Span,
    },
    /// An object literal with named properties
    Object {
        properties: Vec<ObjectProperty>,
        span: Span,
    },
    /// An array literal
    Array { items: Vec<Expr>, span: Span },
    /// A function call, e.g. `resourceGroup()`
    FunctionCall {
        name: SmolStr,
        args: Vec<Expr>,
        span: Span,
    },
    /// A string with interpolated segments, e.g. `'${prefix}-suffix'`
    Interpolation { segments: Vec<InterpSegment>, span: Span },
    /// A binary operation, e.g. `count + 1`
    Binary {
        op: SmolStr,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        span: Span,
    },
    /// A conditional, e.g. `isProd ? a : b`
    Ternary {
        condition: Box<Expr>,
        then_value: Box<Expr>,
        else_value: Box<Expr>,
        span: Span,
    },
    StringLit { value: String, span: Span },
    IntLit { value: i64, span: Span },
    BoolLit { value: bool, span: Span },
    Null { span: Span },
}

/// One segment of an interpolated string: literal text or an embedded expression.
#[derive(Debug, Clone, PartialEq)]
pub enum InterpSegment {
    Text(String),
    Expr(Expr),
}

impl Expr {
    /// The source span of this expression.
    pub fn span(&self) -> Span {
        match self {
            Expr::Identifier { span, .. }
            | Expr::ScopedAccess { span, .. }
            | Expr::IndexAccess { span, .. }
            | Expr::PropertyAccess { span, .. }
            | Expr::Object { span, .. }
            | Expr::Array { span, .. }
            | Expr::FunctionCall { span, .. }
            | Expr::Interpolation { span, .. }
            | Expr::Binary { span, .. }
            | Expr::Ternary { span, .. }
            | Expr::StringLit { span, .. }
            | Expr::IntLit { span, .. }
            | Expr::BoolLit { span, .. }
            | Expr::Null { span } => *span,
        }
    }

    /// Render the expression exactly as written in the source.
    ///
    /// For reference shapes this is the text reported in diagnostics, so it
    /// keeps scope separators and index expressions verbatim and applies no
    /// normalization.
    pub fn source_text(&self) -> String {
        let mut out = String::new();
        self.write_source(&mut out);
        out
    }

    fn write_source(&self, out: &mut String) {
        match self {
            Expr::Identifier { name, .. } => out.push_str(name),
            Expr::ScopedAccess { segments, .. } => {
                for (i, segment) in segments.iter().enumerate() {
                    if i > 0 {
                        out.push_str("::");
                    }
                    out.push_str(&segment.name);
                }
            }
            Expr::IndexAccess { base, index, .. } => {
                base.write_source(out);
                out.push('[');
                index.write_source(out);
                out.push(']');
            }
            Expr::PropertyAccess { base, property, .. } => {
                base.write_source(out);
                out.push('.');
                out.push_str(property);
            }
            Expr::Object { properties, .. } => {
                out.push('{');
                for (i, prop) in properties.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push_str(&prop.name);
                    out.push_str(": ");
                    prop.value.write_source(out);
                }
                out.push('}');
            }
            Expr::Array { items, .. } => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    item.write_source(out);
                }
                out.push(']');
            }
            Expr::FunctionCall { name, args, .. } => {
                out.push_str(name);
                out.push('(');
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    arg.write_source(out);
                }
                out.push(')');
            }
            Expr::Interpolation { segments, .. } => {
                out.push('\'');
                for segment in segments {
                    match segment {
                        InterpSegment::Text(text) => out.push_str(text),
                        InterpSegment::Expr(expr) => {
                            out.push_str("${");
                            expr.write_source(out);
                            out.push('}');
                        }
                    }
                }
                out.push('\'');
            }
            Expr::Binary { op, lhs, rhs, .. } => {
                lhs.write_source(out);
                out.push(' ');
                out.push_str(op);
                out.push(' ');
                rhs.write_source(out);
            }
            Expr::Ternary {
                condition,
                then_value,
                else_value,
                ..
            } => {
                condition.write_source(out);
                out.push_str(" ? ");
                then_value.write_source(out);
                out.push_str(" : ");
                else_value.write_source(out);
            }
            Expr::StringLit { value, .. } => {
                out.push('\'');
                out.push_str(value);
                out.push('\'');
            }
            Expr::IntLit { value, .. } => out.push_str(&value.to_string()),
            Expr::BoolLit { value, .. } => out.push_str(if *value { "true" } else { "false" }),
            Expr::Null { .. } => out.push_str("null"),
        }
    }

    /// Collect this expression's direct sub-expressions, in source order.
    ///
    /// Used by the inference walk when an expression is not itself a
    /// reference. Reference shapes still expose their children here; whether
    /// to descend is the caller's decision.
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Expr::Identifier { .. }
            | Expr::ScopedAccess { .. }
            | Expr::StringLit { .. }
            | Expr::IntLit { .. }
            | Expr::BoolLit { .. }
            | Expr::Null { .. } => Vec::new(),
            Expr::IndexAccess { base, index, .. } => vec![base, index],
            Expr::PropertyAccess { base, .. } => vec![base],
            Expr::Object { properties, .. } => properties.iter().map(|p| &p.value).collect(),
            Expr::Array { items, .. } => items.iter().collect(),
            Expr::FunctionCall { args, .. } => args.iter().collect(),
            Expr::Interpolation { segments, .. } => segments
                .iter()
                .filter_map(|s| match s {
                    InterpSegment::Expr(expr) => Some(expr),
                    InterpSegment::Text(_) => None,
                })
                .collect(),
            Expr::Binary { lhs, rhs, .. } => vec![lhs, rhs],
            Expr::Ternary {
                condition,
                then_value,
                else_value,
                ..
            } => vec![condition, then_value, else_value],
        }
    }

    /// Look up a property by name if this is an object expression.
    pub fn property(&self, name: &str) -> Option<&ObjectProperty> {
        match self {
            Expr::Object { properties, .. } => properties.iter().find(|p| p.name == name),
            _ => None,
        }
    }
}
