//! # deplint-base
//!
//! Core library for declarative infrastructure template AST, symbol model,
//! and dependency analysis.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! analysis  → reference extraction, dependency inference, redundancy check
//!   ↓
//! semantic  → symbol model (declaration identity, scopes), diagnostics
//!   ↓
//! syntax    → AST types: expressions, declarations, programs, builders
//!   ↓
//! core      → primitives (Span, Position)
//! ```
//!
//! Parsing source text and rendering diagnostics are external collaborators:
//! programs arrive as ASTs ([`syntax::Program`]), and the analysis returns
//! plain `{span, message}` diagnostics for the hosting linter to present.
//!
//! ## Example
//!
//! ```
//! use deplint::analysis::analyze_program;
//! use deplint::syntax::Program;
//! use deplint::syntax::builder::*;
//!
//! let program = Program::new(vec![
//!     resource("appServicePlan", "Microsoft.Web/serverfarms@2020-12-01").build(),
//!     resource("webApplication", "Microsoft.Web/sites@2018-11-01")
//!         .body_prop(
//!             "properties",
//!             obj(vec![("serverFarmId", prop(ident("appServicePlan"), "id"))]),
//!         )
//!         .depends_on(vec![ident("appServicePlan")])
//!         .build(),
//! ]);
//!
//! let diagnostics = analyze_program(&program).unwrap();
//! assert_eq!(
//!     diagnostics[0].message.as_ref(),
//!     "Remove unnecessary dependsOn entry 'appServicePlan'."
//! );
//! ```

/// Foundation types: Span, Position
pub mod core;

/// Syntax: AST types for expressions, declarations, and programs
pub mod syntax;

/// Semantic model: declaration identity, scopes, diagnostics
pub mod semantic;

/// The dependency-inference and redundancy-detection engine
pub mod analysis;

// Re-export foundation types
pub use crate::core::{Position, Span};
pub use analysis::{RULE_CODE, analyze, analyze_program};
pub use semantic::{BindError, DeclarationId, Diagnostic, SymbolModel, bind};
pub use syntax::Program;
