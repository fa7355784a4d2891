//! Shared types for the BanglaScript preprocessor.
//!
//! Bangla script classification, source positions and the structured
//! diagnostics every pipeline stage reports through.

mod diagnostic;
pub mod script;
mod span;

pub use diagnostic::{Diagnostic, Diagnostics, ErrorCategory, ErrorCode, Severity, MAX_STORED};
pub use span::{SourceFile, Span};
