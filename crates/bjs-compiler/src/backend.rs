//! The downstream parser/code generator seam.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Output of a [`Backend`] run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompiledOutput {
    pub code: String,
    /// Source map or other position map, if the backend produces one.
    pub map: Option<Value>,
}

/// A backend failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CompileError {
    pub message: String,
    /// Byte offset into the rewritten text, when known.
    pub offset: Option<usize>,
}

impl CompileError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            offset: None,
        }
    }

    pub fn at(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Turns rewritten target-language text into final output.
///
/// Implementations are expected to recover from most malformed input and
/// return partial output; the pipeline never retries a failure.
pub trait Backend {
    fn compile(&self, rewritten: &str, source_file_name: &str) -> Result<CompiledOutput, CompileError>;
}

impl<B: Backend + ?Sized> Backend for &B {
    fn compile(&self, rewritten: &str, source_file_name: &str) -> Result<CompiledOutput, CompileError> {
        (**self).compile(rewritten, source_file_name)
    }
}

/// Identity backend: the rewritten text is the output, with no map.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughBackend;

impl Backend for PassthroughBackend {
    fn compile(&self, rewritten: &str, _source_file_name: &str) -> Result<CompiledOutput, CompileError> {
        Ok(CompiledOutput {
            code: rewritten.to_string(),
            map: None,
        })
    }
}
