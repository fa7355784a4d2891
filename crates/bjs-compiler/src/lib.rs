//! BanglaScript compiler: orchestrates the preprocessing pipeline.
//!
//! ```text
//! Source → Lexer → Rewrite pass → Backend (parse + codegen) → code + map
//! ```
//!
//! The rewrite pass is pure. [`Pipeline`] owns the backend and a
//! [`bjs_cache::TranspilationCache`] that memoizes both stages.

pub mod backend;
pub mod error;
pub mod pipeline;
pub mod rewrite;
pub mod stats;
pub mod validate;

pub use backend::{Backend, CompileError, CompiledOutput, PassthroughBackend};
pub use error::TranspileError;
pub use pipeline::{Pipeline, PreprocessOptions, Preprocessed, Transpiled};
pub use rewrite::{rewrite, rewrite_source, rewrite_token};
pub use stats::CodeStats;
pub use validate::validate;
