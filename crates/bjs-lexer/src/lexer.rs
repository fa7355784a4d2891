//! Core BanglaScript lexer: converts source text to a token stream.
//!
//! Features:
//! - Lossless: concatenating every token's text reproduces the input
//! - String, comment and pattern literals are captured whole, never split
//! - Digits and letters of both the Latin and the Bangla script
//! - Division vs. pattern-literal disambiguation via an expression-start flag
//! - Never fails: unterminated literals run to end of input

use bjs_types::script::{self, is_any_digit, is_word_continue, is_word_start};
use bjs_types::Span;

use crate::token::{Token, TokenKind};

/// Words after which a `/` opens a pattern literal rather than dividing.
///
/// The English forms plus every localized keyword that rewrites to one of
/// them.
pub const EXPRESSION_KEYWORDS: &[&str] = &[
    "return", "throw", "await", "delete", "void", "typeof", "new", "yield",
    // return
    "ফেরত", "প্রেরণ", "ফিরিয়ে_দাও",
    // throw
    "ফেলা", "নিক্ষেপ", "ছুড়ে_দাও",
    // await
    "অপেক্ষা", "অপেক্ষা_করো",
    // delete
    "মুছো",
    // typeof
    "টাইপ", "ধরন", "কিসের",
    // new
    "নতুন",
    // void
    "ভ্যাড", "শূন্যতা",
];

/// Modifier letters accepted after a closing pattern delimiter.
const PATTERN_FLAGS: &str = "dgimsuvy";

/// Saved cursor position at the start of a token.
#[derive(Debug, Clone, Copy)]
struct Mark {
    pos: usize,
    line: u32,
    col: u32,
}

/// The BanglaScript lexer.
///
/// Converts source text into a vector of [`Token`]s in a single forward
/// pass.
pub struct Lexer<'src> {
    /// The full source text.
    source: &'src str,
    /// Current byte offset into `source`.
    pos: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based, in characters).
    col: u32,
    /// Whether a `/` at the cursor would sit in value position.
    expression_start: bool,
}

/// Tokenize `source` in one call.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).lex()
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            col: 1,
            expression_start: true,
        }
    }

    /// Lex the entire source into a token stream.
    pub fn lex(mut self) -> Vec<Token<'src>> {
        let mut tokens = Vec::new();
        while !self.at_end() {
            let token = self.scan_token();
            self.update_expression_start(&token);
            tokens.push(token);
        }
        tokens
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.advance();
        }
    }

    /// Advance the cursor up to (not beyond) byte offset `end`.
    fn advance_to(&mut self, end: usize) {
        while self.pos < end && self.advance().is_some() {}
    }

    fn at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            line: self.line,
            col: self.col,
        }
    }

    fn finish(&self, mark: Mark, kind: TokenKind) -> Token<'src> {
        let span = Span::new(
            mark.line,
            mark.col,
            self.line,
            self.col.saturating_sub(1).max(1),
        );
        Token::new(kind, &self.source[mark.pos..self.pos], span)
    }

    // ─────────────────────────────────────────────────────────────
    // Token dispatch
    // ─────────────────────────────────────────────────────────────

    /// Scan one token. Must only be called when input remains.
    fn scan_token(&mut self) -> Token<'src> {
        let mark = self.mark();
        let Some(ch) = self.peek() else {
            return self.finish(mark, TokenKind::Symbol);
        };

        match ch {
            '"' | '\'' | '`' => {
                self.scan_string(ch);
                self.finish(mark, TokenKind::String)
            }
            '/' if self.peek_at(1) == Some('/') => {
                self.advance_while(|c| c != '\n');
                self.finish(mark, TokenKind::Comment)
            }
            '/' if self.peek_at(1) == Some('*') => {
                self.scan_block_comment();
                self.finish(mark, TokenKind::Comment)
            }
            '/' if self.expression_start => match self.pattern_end() {
                Some(end) => {
                    self.advance_to(end);
                    self.finish(mark, TokenKind::Pattern)
                }
                None => {
                    self.advance();
                    self.finish(mark, TokenKind::Symbol)
                }
            },
            c if is_any_digit(c) => {
                self.advance_while(|c| is_any_digit(c) || c == '.');
                self.finish(mark, TokenKind::Number)
            }
            c if is_word_start(c) => {
                self.advance();
                self.advance_while(is_word_continue);
                self.finish(mark, TokenKind::Word)
            }
            c if c.is_whitespace() => {
                self.advance_while(char::is_whitespace);
                self.finish(mark, TokenKind::Symbol)
            }
            _ => {
                self.advance();
                self.finish(mark, TokenKind::Symbol)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Literals
    // ─────────────────────────────────────────────────────────────

    /// Scan a quoted string up to the matching unescaped `quote`, or to end
    /// of input when it never closes.
    fn scan_string(&mut self, quote: char) {
        self.advance(); // opening quote
        let mut escaped = false;
        while let Some(c) = self.advance() {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == quote {
                return;
            }
        }
    }

    /// Scan `/* ... */`, or to end of input when unterminated.
    fn scan_block_comment(&mut self) {
        let body_start = self.pos + 2;
        let end = self.source[body_start..]
            .find("*/")
            .map_or(self.source.len(), |i| body_start + i + 2);
        self.advance_to(end);
    }

    /// Find the byte offset just past a pattern literal starting at the
    /// cursor, modifiers included. `None` when no closing delimiter exists
    /// before the end of the line.
    fn pattern_end(&self) -> Option<usize> {
        let rest = self.rest();
        let mut escaped = false;
        let mut in_class = false;

        for (i, c) in rest.char_indices().skip(1) {
            if c == '\n' || c == '\r' {
                return None;
            }
            if escaped {
                escaped = false;
                continue;
            }
            match c {
                '\\' => escaped = true,
                '[' => in_class = true,
                ']' => in_class = false,
                '/' if !in_class => {
                    let body_end = i + 1;
                    let flags_len: usize = rest[body_end..]
                        .chars()
                        .take_while(|f| PATTERN_FLAGS.contains(*f))
                        .map(char::len_utf8)
                        .sum();
                    return Some(self.pos + body_end + flags_len);
                }
                _ => {}
            }
        }
        None
    }

    // ─────────────────────────────────────────────────────────────
    // Division vs. pattern state
    // ─────────────────────────────────────────────────────────────

    fn update_expression_start(&mut self, token: &Token<'_>) {
        match token.kind {
            TokenKind::Symbol if token.is_whitespace() => {}
            TokenKind::Symbol => self.expression_start = symbol_starts_expression(token.text),
            TokenKind::Word => self.expression_start = is_expression_keyword(token.text),
            TokenKind::Number | TokenKind::String | TokenKind::Pattern => {
                self.expression_start = false;
            }
            TokenKind::Comment => {}
        }
    }
}

/// Operators and opening brackets leave the lexer in value position;
/// closing brackets and anything else do not.
fn symbol_starts_expression(symbol: &str) -> bool {
    matches!(
        symbol,
        "+" | "-" | "*" | "/" | "%" | "=" | "!" | "<" | ">" | "&" | "|" | "^" | "~" | "?"
            | ":" | "," | ";" | "(" | "[" | "{"
    )
}

fn is_expression_keyword(word: &str) -> bool {
    let word = script::canonicalize(word);
    EXPRESSION_KEYWORDS
        .iter()
        .any(|kw| script::canonicalize(kw) == word)
}
