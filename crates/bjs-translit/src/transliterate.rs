//! Identifier transliteration.
//!
//! Turns any word, Bangla, Latin or mixed, into a string matching
//! `[A-Za-z_$][A-Za-z0-9_$]*` that is not a reserved word. The result
//! depends on the input alone.

use bjs_types::script::canonicalize;

use crate::{dictionary, graphemes, reserved, rules};

/// Prefix added to a result that collides with a reserved word.
pub const RESERVED_PREFIX: &str = "bn_";

/// Identifier used when nothing transliterable is left.
pub const PLACEHOLDER: &str = "bangla_var";

/// Returns `true` if `text` is a syntactically valid target identifier.
pub fn is_valid_identifier(text: &str) -> bool {
    let mut bytes = text.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' || b == b'$' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'$')
}

/// Transliterate one word into a valid, non-reserved identifier.
///
/// Whitespace-separated parts are transliterated independently and joined
/// with `_`.
pub fn transliterate(word: &str) -> String {
    if is_valid_identifier(word) {
        return guard(word.to_owned());
    }

    let parts: Vec<&str> = word.split_whitespace().collect();
    if parts.len() > 1 {
        return parts
            .into_iter()
            .map(transliterate)
            .collect::<Vec<_>>()
            .join("_");
    }

    transliterate_single(word)
}

fn transliterate_single(part: &str) -> String {
    let word = canonicalize(part.trim());

    if let Some(curated) = dictionary::lookup(&word) {
        return guard(curated.to_owned());
    }

    let mut latin = String::with_capacity(word.len());
    for c in word.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
            latin.push(c);
        } else if let Some(fragment) = graphemes::fragment(c) {
            latin.push_str(fragment);
        }
    }

    guard(rules::apply(&latin).into_owned())
}

fn guard(mut ident: String) -> String {
    if reserved::is_reserved(&ident) {
        ident.insert_str(0, RESERVED_PREFIX);
    }
    if ident.is_empty() {
        return PLACEHOLDER.to_owned();
    }
    if ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    ident
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifier() {
        assert!(is_valid_identifier("nam"));
        assert!(is_valid_identifier("_x1"));
        assert!(is_valid_identifier("$"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("1x"));
        assert!(!is_valid_identifier("নাম"));
        assert!(!is_valid_identifier("a-b"));
    }

    #[test]
    fn test_guard_order() {
        assert_eq!(guard(String::new()), PLACEHOLDER);
        assert_eq!(guard("class".into()), "bn_class");
        assert_eq!(guard("12".into()), "_12");
        assert_eq!(guard("ok".into()), "ok");
    }
}
