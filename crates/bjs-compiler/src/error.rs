//! Pipeline errors.

use bjs_types::{Diagnostic, ErrorCode, SourceFile, Span};
use thiserror::Error;

/// A failure surfaced by [`Pipeline::transpile`](crate::Pipeline::transpile).
///
/// Lexing, rewriting and caching never fail; only the backend can.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranspileError {
    #[error("Transpilation error at line {}: {message}", line_label(line))]
    Backend {
        /// 1-based line in the rewritten text, when the backend reported an
        /// offset.
        line: Option<u32>,
        message: String,
    },
}

fn line_label(line: &Option<u32>) -> String {
    match line {
        Some(n) => n.to_string(),
        None => "?".to_string(),
    }
}

impl TranspileError {
    pub fn line(&self) -> Option<u32> {
        match self {
            Self::Backend { line, .. } => *line,
        }
    }

    /// Structured `E200` diagnostic. `rewritten` supplies the offending line.
    pub fn to_diagnostic(&self, rewritten: &SourceFile) -> Diagnostic {
        let Self::Backend { line, message } = self;
        let line_no = line.unwrap_or(1);
        let source_line = line.and_then(|n| rewritten.line(n)).unwrap_or_default();
        Diagnostic::error(ErrorCode::BACKEND_FAILED, message.clone())
            .in_file(rewritten.name.clone())
            .at(Span::point(line_no, 1), source_line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_with_line() {
        let err = TranspileError::Backend {
            line: Some(3),
            message: "Unexpected token".into(),
        };
        assert_eq!(err.to_string(), "Transpilation error at line 3: Unexpected token");
    }

    #[test]
    fn test_message_without_line() {
        let err = TranspileError::Backend {
            line: None,
            message: "boom".into(),
        };
        assert_eq!(err.to_string(), "Transpilation error at line ?: boom");
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_diagnostic() {
        let file = SourceFile::new("main.bjs", "let a = 1;\nlet = ;\n");
        let err = TranspileError::Backend {
            line: Some(2),
            message: "Unexpected token".into(),
        };
        let diag = err.to_diagnostic(&file);
        assert_eq!(diag.code, ErrorCode::BACKEND_FAILED);
        assert_eq!(diag.file, "main.bjs");
        assert_eq!(diag.source_line, "let = ;");
        assert_eq!(diag.span.start_line, 2);
    }
}
