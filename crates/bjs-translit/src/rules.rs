//! Consonant-cluster rewrite rules.
//!
//! Grapheme-by-grapheme output drops the inherent vowel, so `পরিবার`
//! comes out as `pribar`. The rules below are an ordered policy table of
//! `(pattern, replacement)` pairs, each applied once over the whole string,
//! left to right, in table order. Adding a rule never touches control flow.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Ordered `(pattern, replacement)` pairs.
///
/// The consonant unit treats the digraphs produced by the grapheme table
/// (`kh`, `chh`, `ng`, ...) as single letters so a filler vowel never lands
/// inside one. `h`, `y` and `f` never count as a standalone consonant.
pub const CLUSTER_RULES: &[(&str, &str)] = &[
    (
        r"(?P<first>chh|ng|[bcdgjkpstr]h|[bcdgjklmnpqrstvwxz])(?P<second>chh|ng|[bcdgjkpstr]h|[bcdgjklmnpqrstvwxz])",
        "${first}a${second}",
    ),
];

static COMPILED: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    CLUSTER_RULES
        .iter()
        .filter_map(|&(pattern, replacement)| {
            Regex::new(pattern).ok().map(|re| (re, replacement))
        })
        .collect()
});

/// Apply every cluster rule once, in order.
pub fn apply(latin: &str) -> Cow<'_, str> {
    let mut out = Cow::Borrowed(latin);
    for (re, replacement) in COMPILED.iter() {
        let rewritten = match re.replace_all(&out, *replacement) {
            Cow::Borrowed(_) => continue,
            Cow::Owned(rewritten) => rewritten,
        };
        out = Cow::Owned(rewritten);
    }
    out
}
