//! Source validation: bracket balance and stray dandas.
//!
//! Works on the token stream, so anything inside strings, comments and
//! pattern literals is ignored.

use bjs_lexer::{tokenize, TokenKind};
use bjs_types::{Diagnostic, Diagnostics, ErrorCode, SourceFile, Span};

const PAIRS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];
const DANDA: char = '।';

/// Check a source file.
///
/// Each bracket kind is tracked on its own stack. An unmatched closer is
/// `E100` at the closer; each kind left open yields one `E101` at its
/// outermost unclosed opener. A danda outside literals is an `E102`
/// warning. Never fails.
pub fn validate(source: &str, file_name: &str) -> Diagnostics {
    let file = SourceFile::new(file_name, source);
    let mut diagnostics = Diagnostics::new();
    let mut open: [Vec<Span>; 3] = Default::default();

    for token in tokenize(source) {
        if token.kind != TokenKind::Symbol {
            continue;
        }
        let mut chars = token.text.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            continue;
        };

        if let Some(kind) = PAIRS.iter().position(|&(o, _)| o == c) {
            open[kind].push(token.span);
        } else if let Some(kind) = PAIRS.iter().position(|&(_, cl)| cl == c) {
            if open[kind].pop().is_none() {
                diagnostics.push(locate(
                    Diagnostic::error(ErrorCode::UNMATCHED_CLOSING, format!("unmatched closing '{c}'")),
                    &file,
                    token.span,
                ));
            }
        } else if c == DANDA {
            diagnostics.push(
                locate(
                    Diagnostic::warning(ErrorCode::STRAY_DANDA, "danda is not a statement terminator"),
                    &file,
                    token.span,
                )
                .with_suggestion("use ';'"),
            );
        }
    }

    for (kind, stack) in open.iter().enumerate() {
        if let Some(&outermost) = stack.first() {
            let (opener, closer) = PAIRS[kind];
            diagnostics.push(
                locate(
                    Diagnostic::error(ErrorCode::UNCLOSED_OPENING, format!("unclosed opening '{opener}'")),
                    &file,
                    outermost,
                )
                .with_suggestion(format!("add a matching '{closer}'")),
            );
        }
    }

    if !diagnostics.is_empty() {
        tracing::debug!(
            file = file_name,
            errors = diagnostics.error_count(),
            warnings = diagnostics.warning_count(),
            "validation findings"
        );
    }
    diagnostics
}

fn locate(diagnostic: Diagnostic, file: &SourceFile, span: Span) -> Diagnostic {
    let line = file.line(span.start_line).unwrap_or_default();
    diagnostic.in_file(file.name.clone()).at(span, line)
}
