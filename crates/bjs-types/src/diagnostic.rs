//! Structured diagnostics shared by validation and the pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Span;

/// Diagnostics stored per collection; later ones are only counted.
pub const MAX_STORED: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}

/// Which stage raised a diagnostic; follows from the code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// E100–E199, source-level checks.
    Syntax,
    /// E200–E299, the downstream parser/codegen.
    Backend,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorCategory::Syntax => "syntax",
            ErrorCategory::Backend => "backend",
        })
    }
}

/// Numeric diagnostic code, shown as `E100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    /// A closing bracket with no open bracket of its kind.
    pub const UNMATCHED_CLOSING: Self = Self(100);
    /// An opening bracket that is never closed.
    pub const UNCLOSED_OPENING: Self = Self(101);
    /// A danda (`।`) outside literals, where `;` was probably meant.
    pub const STRAY_DANDA: Self = Self(102);
    /// The backend rejected the rewritten text.
    pub const BACKEND_FAILED: Self = Self(200);

    pub const fn category(self) -> ErrorCategory {
        if self.0 >= 200 {
            ErrorCategory::Backend
        } else {
            ErrorCategory::Syntax
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:03}", self.0)
    }
}

/// One finding, with enough context to print it without the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{file}:{span}: {severity}[{code}] {message}")]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub category: ErrorCategory,
    pub message: String,
    pub file: String,
    #[serde(flatten)]
    pub span: Span,
    /// The source line the span starts on.
    pub source_line: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    fn with_severity(severity: Severity, code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            severity,
            category: code.category(),
            message: message.into(),
            file: String::new(),
            span: Span::point(1, 1),
            source_line: String::new(),
            suggestion: None,
        }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, code, message)
    }

    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, code, message)
    }

    #[must_use]
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = file.into();
        self
    }

    /// Position the diagnostic and record the line it points into.
    #[must_use]
    pub fn at(mut self, span: Span, source_line: impl Into<String>) -> Self {
        self.span = span;
        self.source_line = source_line.into();
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// A bounded, ordered collection of diagnostics.
///
/// The first [`MAX_STORED`] are kept; every push is counted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    stored: Vec<Diagnostic>,
    error_count: usize,
    warning_count: usize,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        if self.stored.len() < MAX_STORED {
            self.stored.push(diagnostic);
        }
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn is_empty(&self) -> bool {
        self.error_count == 0 && self.warning_count == 0
    }

    /// Errors pushed, including ones past the storage bound.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Warnings pushed, including ones past the storage bound.
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Stored diagnostics in push order.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.stored.iter()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.stored.iter().filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.stored.iter().filter(|d| d.severity == Severity::Warning)
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
