//! Token-level rewrite pass.
//!
//! A one-to-one map over the token stream: literals and symbols pass
//! through byte for byte, numbers get ASCII digits, words become keywords
//! or transliterated identifiers. Token count and order never change.

use std::borrow::Cow;

use bjs_lexer::{tokenize, Token, TokenKind};
use bjs_translit::{keywords, transliterate};
use bjs_types::script::{has_bangla, normalize_digits};

/// Rewrite a single token.
pub fn rewrite_token<'src>(token: &Token<'src>, no_transliterate: bool) -> Cow<'src, str> {
    match token.kind {
        TokenKind::String | TokenKind::Comment | TokenKind::Pattern | TokenKind::Symbol => {
            Cow::Borrowed(token.text)
        }
        TokenKind::Number => normalize_digits(token.text),
        TokenKind::Word => rewrite_word(token.text, no_transliterate),
    }
}

fn rewrite_word(word: &str, no_transliterate: bool) -> Cow<'_, str> {
    if let Some(target) = keywords::lookup(word) {
        return Cow::Borrowed(target);
    }
    if !no_transliterate && has_bangla(word) {
        return Cow::Owned(transliterate(word));
    }
    Cow::Borrowed(word)
}

/// Rewrite a token stream into target-language text.
pub fn rewrite(tokens: &[Token<'_>], no_transliterate: bool) -> String {
    let mut out = String::with_capacity(tokens.iter().map(|t| t.text.len()).sum());
    for token in tokens {
        out.push_str(&rewrite_token(token, no_transliterate));
    }
    out
}

/// Tokenize and rewrite `source` in one call, with no caching.
pub fn rewrite_source(source: &str, no_transliterate: bool) -> String {
    rewrite(&tokenize(source), no_transliterate)
}
