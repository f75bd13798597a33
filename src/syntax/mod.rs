//! AST types for infrastructure programs.
//!
//! The external parser produces these; this crate only reads them.

pub mod builder;
pub mod declaration;
pub mod expr;
pub mod program;

pub use declaration::{
    DEPENDS_ON_PROPERTY, Declaration, DeclarationKind, LoopContext, PARENT_PROPERTY,
};
pub use expr::{Expr, InterpSegment, ObjectProperty, PathSegment};
pub use program::Program;
