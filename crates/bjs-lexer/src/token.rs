//! Token types for the BanglaScript lexer.
//!
//! A [`Token`] borrows its exact source slice, delimiters included, so the
//! token stream can always be concatenated back into the original text.

use bjs_types::Span;
use std::fmt;

// ─────────────────────────────────────────────────────────────────────
// Token
// ─────────────────────────────────────────────────────────────────────

/// A single token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    /// What kind of token this is.
    pub kind: TokenKind,
    /// The exact source slice.
    pub text: &'src str,
    /// Source location.
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Returns `true` for kinds whose text must never be rewritten.
    pub fn is_literal(&self) -> bool {
        self.kind.is_literal()
    }

    /// Returns `true` for a whitespace run.
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Symbol && self.text.chars().all(char::is_whitespace)
    }
}

// ─────────────────────────────────────────────────────────────────────
// TokenKind
// ─────────────────────────────────────────────────────────────────────

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier or keyword in either script: `নাম`, `user_id`, `$el`
    Word,
    /// Digit run in either script, with `.`: `২৫`, `3.14`
    Number,
    /// Quoted string, quotes included: `"হ্যালো"`, `'x'`, `` `t` ``
    String,
    /// Line or block comment, markers included
    Comment,
    /// Pattern literal with modifiers: `/[০-৯]+/g`
    Pattern,
    /// Single punctuation character, or a whitespace run
    Symbol,
}

impl TokenKind {
    /// Returns `true` for String, Comment and Pattern.
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::String | TokenKind::Comment | TokenKind::Pattern)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Word => f.write_str("word"),
            TokenKind::Number => f.write_str("number"),
            TokenKind::String => f.write_str("string"),
            TokenKind::Comment => f.write_str("comment"),
            TokenKind::Pattern => f.write_str("pattern"),
            TokenKind::Symbol => f.write_str("symbol"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────
