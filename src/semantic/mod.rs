//! # Semantic Model
//!
//! This module provides the symbol model for infrastructure programs,
//! transforming a parsed declaration tree into a queryable model with
//! canonical identity per declaration and scope-aware name resolution.

pub mod model;
pub mod types;

pub use model::{DeclarationId, DeclarationSymbol, SymbolModel, bind};
pub use types::{BindError, Diagnostic, DiagnosticSink};
