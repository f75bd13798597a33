pub mod diagnostic;
pub mod error;

pub use diagnostic::{Diagnostic, DiagnosticSink};
pub use error::BindError;
