//! Source statistics.

use bjs_lexer::{tokenize, Token, TokenKind};
use serde::{Deserialize, Serialize};

/// Line and character counts for a source file.
///
/// A line counts as code if any non-comment token touches it, as a comment
/// line if only comments do, and as blank otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodeStats {
    pub total_lines: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    pub blank_lines: usize,
    /// Unicode scalar values.
    pub characters: usize,
}

#[derive(Clone, Copy, Default)]
struct LineUse {
    code: bool,
    comment: bool,
}

impl CodeStats {
    pub fn of(source: &str) -> Self {
        let total_lines = source.split('\n').count();
        let mut lines = vec![LineUse::default(); total_lines];

        for token in tokenize(source) {
            if token.is_whitespace() {
                continue;
            }
            let (first, last) = line_range(&token);
            for line in lines.iter_mut().take(last).skip(first - 1) {
                if token.kind == TokenKind::Comment {
                    line.comment = true;
                } else {
                    line.code = true;
                }
            }
        }

        let code_lines = lines.iter().filter(|l| l.code).count();
        let comment_lines = lines.iter().filter(|l| !l.code && l.comment).count();
        Self {
            total_lines,
            code_lines,
            comment_lines,
            blank_lines: total_lines - code_lines - comment_lines,
            characters: source.chars().count(),
        }
    }
}

/// 1-based inclusive line range a token covers. A trailing newline does
/// not pull in the next line.
fn line_range(token: &Token<'_>) -> (usize, usize) {
    let lines = token.span.lines();
    let first = (*lines.start() as usize).max(1);
    let mut last = (*lines.end() as usize).max(first);
    if token.text.ends_with('\n') && last > first {
        last -= 1;
    }
    (first, last)
}
