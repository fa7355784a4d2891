//! Reserved words of the target language.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Keywords, strict-mode reserved words and the global value names that
/// cannot be rebound. Stored lower-case.
#[rustfmt::skip]
pub const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "export", "extends", "false",
    "finally", "for", "function", "if", "import", "in", "instanceof", "new",
    "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with", "yield",
    "let", "static", "implements", "interface", "package", "private",
    "protected", "public", "await", "arguments", "eval",
    "undefined", "nan", "infinity",
];

static RESERVED: Lazy<HashSet<&'static str>> = Lazy::new(|| RESERVED_WORDS.iter().copied().collect());

/// Returns `true` if `ident` is reserved, ignoring ASCII case.
pub fn is_reserved(ident: &str) -> bool {
    if ident.bytes().any(|b| b.is_ascii_uppercase()) {
        RESERVED.contains(ident.to_ascii_lowercase().as_str())
    } else {
        RESERVED.contains(ident)
    }
}
