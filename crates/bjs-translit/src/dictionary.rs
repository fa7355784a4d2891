//! Curated whole-word dictionary.
//!
//! Natural Latin spellings for common vocabulary, consulted before the
//! grapheme-by-grapheme fallback.

use std::collections::HashMap;

use bjs_types::script::canonicalize;
use once_cell::sync::Lazy;

#[rustfmt::skip]
const WORDS: &[(&str, &str)] = &[
    ("পরিবার", "paribar"),
    ("নাম", "nam"),
    ("বয়স", "boyos"),
    ("ফলাফল", "folafol"),
    ("শুভেচ্ছা", "shubhochcha"),
    ("যোগফল", "jogfol"),
    ("বাক্য", "bakyo"),
    ("ব্যবহারকারী", "byabaharkari"),
    ("ছাত্র", "chhatro"),
    ("শিক্ষক", "shikkhok"),
    ("মানুষ", "manush"),
    ("গ্রাহক", "grahok"),
    ("কর্মী", "kormi"),
    ("পণ্য", "ponno"),
    ("বই", "boi"),
    ("গাড়ি", "gari"),
    ("ঠিকানা", "thikana"),
    ("ফোন", "phone"),
    ("ইমেল", "email"),
    ("পাসওয়ার্ড", "password"),
    ("অ্যাকাউন্ট", "account"),
    ("বোতাম", "button"),
    ("ফর্ম", "form"),
    ("ইনপুট", "input"),
    ("বাটন", "button"),
    ("লেবেল", "label"),
    ("ছবি", "chobi"),
    ("চিত্র", "chitra"),
    ("টেক্সট", "text"),
    ("বার্তা", "message"),
    ("বার্তাসমূহ", "bartasomuho"),
    ("সংখ্যা", "songkha"),
    ("গণনা", "gonona"),
    ("গড়", "gor"),
    ("গুন", "gun"),
    ("ভাগ", "vag"),
    ("বিয়োগ", "biyog"),
    ("তালিকা", "talika"),
    ("অ্যারে", "array"),
    ("অবজেক্ট", "object"),
    ("ডাটা", "data"),
    ("সময়", "shomoy"),
    ("তারিখ", "tarikh"),
    ("দিন", "din"),
    ("মাস", "mas"),
    ("বছর", "bochor"),
    ("মুহূর্ত", "muhurt"),
    ("ঘণ্টা", "ghonta"),
    ("সেকেন্ড", "second"),
    ("অবস্থা", "obostha"),
    ("শর্ত", "shorot"),
    ("গণিত", "gonit"),
    ("পরীক্ষা", "porikkha"),
    ("ফল", "fol"),
    ("উত্তর", "response"),
    ("প্রশ্ন", "proshno"),
    ("মন্তব্য", "comment"),
    ("বিবরণ", "bibron"),
    ("যোগ", "jog"),
    ("চালাও", "chalaw"),
    ("দেখাও", "dekhaw"),
    ("লিখো", "likho"),
    ("নাও", "nao"),
    ("পাঠাও", "pathaw"),
    ("ফিরিয়ে_দাও", "feriye_dao"),
    ("সংরক্ষণ", "songrokkhon"),
    ("সম্পাদনা", "shompodona"),
    ("মুছে_ফেলো", "muche_felo"),
    ("ফাইল", "file"),
    ("ফোল্ডার", "folder"),
    ("নেটওয়ার্ক", "network"),
    ("অনুরোধ", "onurodh"),
    ("ইউআরএল", "url"),
    ("সার্ভার", "server"),
    ("ডাটাবেস", "database"),
    ("সংযোগ", "shongjog"),
    ("সংরক্ষিত", "stored"),
    ("লগইন", "login"),
    ("লগআউট", "logout"),
    ("নিবন্ধন", "register"),
    ("প্রমাণীকরণ", "auth"),
    ("টোকেন", "token"),
    ("ব্যবহার", "use"),
    ("লোডিং", "loading"),
    ("ত্রুটি", "error"),
    ("সাফল্য", "success"),
    ("সতর্কতা", "warning"),
    ("শহর", "shohor"),
    ("দেশ", "desh"),
    ("ঠিক", "thik"),
    ("লিংক", "link"),
    ("ছাত্রছাত্রী", "chhatrochhatri"),
    ("প্রকল্প", "projokt"),
];

static INDEX: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    WORDS
        .iter()
        .map(|&(word, latin)| (canonicalize(word).into_owned(), latin))
        .collect()
});

/// Curated spelling of a whole word, if the dictionary has one.
pub fn lookup(word: &str) -> Option<&'static str> {
    INDEX.get(canonicalize(word).as_ref()).copied()
}

/// Number of dictionary words.
pub fn len() -> usize {
    WORDS.len()
}

/// Every `(word, latin)` pair in table order.
pub fn words() -> impl Iterator<Item = (&'static str, &'static str)> {
    WORDS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_duplicate_words() {
        assert_eq!(INDEX.len(), WORDS.len());
    }

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("নাম"), Some("nam"));
        assert_eq!(lookup("পরিবার"), Some("paribar"));
        assert_eq!(lookup("নামটা"), None);
    }

    #[test]
    fn test_lookup_ignores_nukta_encoding() {
        assert_eq!(lookup("গা\u{09DC}ি"), Some("gari"));
        assert_eq!(lookup("গা\u{09A1}\u{09BC}ি"), Some("gari"));
    }

    #[test]
    fn test_spellings_are_plain_ascii() {
        for (word, latin) in words() {
            assert!(
                latin.bytes().all(|b| b.is_ascii_lowercase() || b == b'_'),
                "{word} -> {latin}"
            );
        }
    }
}
