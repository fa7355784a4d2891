//! Grapheme table: one Bangla code point → Latin fragment.
//!
//! Used only when a word is neither a keyword nor a dictionary entry. Input
//! is expected in canonical form, so the nukta consonants arrive as their
//! precomposed code points.

/// Latin fragment for a single Bangla character.
///
/// `Some("")` means the character is known but silent (virama, avagraha,
/// a stray nukta). `None` means the character is not in the table and the
/// caller drops it.
pub fn fragment(c: char) -> Option<&'static str> {
    let latin = match c {
        // independent vowels
        'অ' => "o",
        'আ' => "a",
        'ই' => "i",
        'ঈ' => "ee",
        'উ' => "u",
        'ঊ' => "oo",
        'ঋ' => "ri",
        'এ' => "e",
        'ঐ' => "oi",
        'ও' => "o",
        'ঔ' => "ou",

        // consonants
        'ক' => "k",
        'খ' => "kh",
        'গ' => "g",
        'ঘ' => "gh",
        'ঙ' => "ng",
        'চ' => "ch",
        'ছ' => "chh",
        'জ' => "j",
        'ঝ' => "jh",
        'ঞ' => "n",
        'ট' => "t",
        'ঠ' => "th",
        'ড' => "d",
        'ঢ' => "dh",
        'ণ' => "n",
        'ত' => "t",
        'থ' => "th",
        'দ' => "d",
        'ধ' => "dh",
        'ন' => "n",
        'প' => "p",
        'ফ' => "ph",
        'ব' => "b",
        'ভ' => "bh",
        'ম' => "m",
        'য' => "j",
        'র' => "r",
        'ল' => "l",
        'শ' => "sh",
        'ষ' => "sh",
        'স' => "s",
        'হ' => "h",
        '\u{09DC}' => "r",
        '\u{09DD}' => "rh",
        '\u{09DF}' => "y",
        'ৎ' => "t",
        'ং' => "ng",
        'ঃ' => "h",
        'ঁ' => "n",

        // dependent vowel signs
        'া' => "a",
        'ি' => "i",
        'ী' => "ee",
        'ু' => "u",
        'ূ' => "oo",
        'ৃ' => "ri",
        'ে' => "e",
        'ৈ' => "oi",
        '\u{09CB}' => "o",
        '\u{09CC}' => "ou",

        // silent marks
        '\u{09CD}' | '\u{09BC}' | 'ঽ' | '\u{09D7}' => "",

        '০' => "0",
        '১' => "1",
        '২' => "2",
        '৩' => "3",
        '৪' => "4",
        '৫' => "5",
        '৬' => "6",
        '৭' => "7",
        '৮' => "8",
        '৯' => "9",

        _ => return None,
    };
    Some(latin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bjs_types::script::is_bangla_digit;

    #[test]
    fn test_fragments_are_lowercase_ascii_or_digits() {
        for c in '\u{0980}'..='\u{09FF}' {
            if let Some(latin) = fragment(c) {
                assert!(
                    latin.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()),
                    "U+{:04X} -> {latin:?}",
                    c as u32
                );
            }
        }
    }

    #[test]
    fn test_digits_map_to_ascii() {
        for (i, c) in ('০'..='৯').enumerate() {
            assert!(is_bangla_digit(c));
            assert_eq!(fragment(c), Some(["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"][i]));
        }
    }

    #[test]
    fn test_virama_is_silent() {
        assert_eq!(fragment('\u{09CD}'), Some(""));
    }

    #[test]
    fn test_non_bangla_is_unknown() {
        assert_eq!(fragment('a'), None);
        assert_eq!(fragment('।'), None);
        assert_eq!(fragment('\u{200D}'), None);
    }

    #[test]
    fn test_nukta_consonants() {
        assert_eq!(fragment('\u{09DC}'), Some("r"));
        assert_eq!(fragment('\u{09DF}'), Some("y"));
    }
}
