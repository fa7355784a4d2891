//! BanglaScript keyword tables and identifier transliteration.
//!
//! Three immutable process-wide tables back the rewrite pass:
//!
//! - [`keywords`]: localized keyword spelling → target spelling
//! - [`dictionary`]: curated whole-word Latin spellings
//! - [`graphemes`]: single-character phonetic fragments
//!
//! [`transliterate()`] combines the last two with the [`rules`] cluster
//! table to turn any word into a valid target identifier.

pub mod dictionary;
pub mod graphemes;
pub mod keywords;
pub mod reserved;
pub mod rules;
pub mod transliterate;

pub use keywords::{KeywordCategory, KeywordEntry};
pub use transliterate::{is_valid_identifier, transliterate, PLACEHOLDER, RESERVED_PREFIX};
