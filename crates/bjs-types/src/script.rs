//! Bangla script classification shared by the lexer and the transliterator.
//!
//! The Bengali Unicode block is U+0980..=U+09FF. Digits ০–৯ live at
//! U+09E6..=U+09EF.

use std::borrow::Cow;

const BANGLA_DIGIT_ZERO: u32 = 0x09E6;

/// Zero-width non-joiner, used inside conjunct spellings.
pub const ZWNJ: char = '\u{200C}';
/// Zero-width joiner, used for ya-phala forms like র‍্যা.
pub const ZWJ: char = '\u{200D}';

/// Returns `true` for any character of the Bengali block.
pub fn is_bangla_char(c: char) -> bool {
    ('\u{0980}'..='\u{09FF}').contains(&c)
}

/// Returns `true` for a Bangla decimal digit (০–৯).
pub fn is_bangla_digit(c: char) -> bool {
    ('\u{09E6}'..='\u{09EF}').contains(&c)
}

/// Numeric value of a Bangla digit.
pub fn bangla_digit_value(c: char) -> Option<u32> {
    is_bangla_digit(c).then(|| c as u32 - BANGLA_DIGIT_ZERO)
}

/// Returns `true` for an ASCII or Bangla decimal digit.
pub fn is_any_digit(c: char) -> bool {
    c.is_ascii_digit() || is_bangla_digit(c)
}

/// Returns `true` for a character that may start a word: an ASCII letter,
/// a non-digit Bangla character, `_` or `$`.
pub fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$' || (is_bangla_char(c) && !is_bangla_digit(c))
}

/// Returns `true` for a character that may continue a word.
pub fn is_word_continue(c: char) -> bool {
    is_word_start(c) || is_any_digit(c) || c == ZWJ || c == ZWNJ
}

/// Returns `true` if `text` contains at least one Bangla character.
pub fn has_bangla(text: &str) -> bool {
    text.chars().any(is_bangla_char)
}

/// Replace Bangla digits with their ASCII counterparts.
///
/// Every other character is left untouched.
pub fn normalize_digits(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_bangla_digit) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| match bangla_digit_value(c).and_then(|d| char::from_digit(d, 10)) {
                Some(ascii) => ascii,
                None => c,
            })
            .collect(),
    )
}

/// Fold alternative encodings of the same Bangla spelling to one form.
///
/// Nukta consonants (ড়, ঢ়, য়) may be typed precomposed or as base plus
/// U+09BC; the vowel signs ো and ৌ may be typed as two code points. The
/// canonical form uses the single precomposed code point for all of them.
pub fn canonicalize(word: &str) -> Cow<'_, str> {
    if !needs_folding(word) {
        return Cow::Borrowed(word);
    }

    let mut out = String::with_capacity(word.len());
    let mut chars = word.chars().peekable();
    while let Some(c) = chars.next() {
        let next = chars.peek().copied();
        let folded = match (c, next) {
            ('\u{09A1}', Some('\u{09BC}')) => Some('\u{09DC}'),
            ('\u{09A2}', Some('\u{09BC}')) => Some('\u{09DD}'),
            ('\u{09AF}', Some('\u{09BC}')) => Some('\u{09DF}'),
            ('\u{09C7}', Some('\u{09BE}')) => Some('\u{09CB}'),
            ('\u{09C7}', Some('\u{09D7}')) => Some('\u{09CC}'),
            _ => None,
        };
        match folded {
            Some(single) => {
                chars.next();
                out.push(single);
            }
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn needs_folding(word: &str) -> bool {
    let mut prev = None;
    for c in word.chars() {
        let pair = matches!(
            (prev, c),
            (Some('\u{09A1}' | '\u{09A2}' | '\u{09AF}'), '\u{09BC}')
                | (Some('\u{09C7}'), '\u{09BE}' | '\u{09D7}')
        );
        if pair {
            return true;
        }
        prev = Some(c);
    }
    false
}
