//! Keyword table: localized spelling → target-language spelling.
//!
//! Lookups are exact and encoding-insensitive (see
//! [`bjs_types::script::canonicalize`]). Several localized spellings may map
//! to the same target; the reverse direction is not unique.

use std::collections::HashMap;
use std::fmt;

use bjs_types::script::canonicalize;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Grouping of keyword entries, used for listings and highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCategory {
    Declaration,
    Function,
    Conditional,
    Loop,
    ObjectModel,
    Console,
    Literal,
    Exception,
    Async,
    Switch,
    Module,
    Membership,
    Operator,
    Debugging,
    Dialog,
    ArrayMethod,
    StringMethod,
    Math,
    Json,
    Dom,
    Event,
    Logic,
    Comparison,
}

impl KeywordCategory {
    /// Every category, in listing order.
    pub const ALL: &'static [KeywordCategory] = &[
        Self::Declaration,
        Self::Function,
        Self::Conditional,
        Self::Loop,
        Self::ObjectModel,
        Self::Console,
        Self::Literal,
        Self::Exception,
        Self::Async,
        Self::Switch,
        Self::Module,
        Self::Membership,
        Self::Operator,
        Self::Debugging,
        Self::Dialog,
        Self::ArrayMethod,
        Self::StringMethod,
        Self::Math,
        Self::Json,
        Self::Dom,
        Self::Event,
        Self::Logic,
        Self::Comparison,
    ];
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Declaration => "declaration",
            Self::Function => "function",
            Self::Conditional => "conditional",
            Self::Loop => "loop",
            Self::ObjectModel => "object model",
            Self::Console => "console",
            Self::Literal => "literal",
            Self::Exception => "exception",
            Self::Async => "async",
            Self::Switch => "switch",
            Self::Module => "module",
            Self::Membership => "membership",
            Self::Operator => "operator",
            Self::Debugging => "debugging",
            Self::Dialog => "dialog",
            Self::ArrayMethod => "array method",
            Self::StringMethod => "string method",
            Self::Math => "math",
            Self::Json => "json",
            Self::Dom => "dom",
            Self::Event => "event",
            Self::Logic => "logic",
            Self::Comparison => "comparison",
        };
        f.write_str(name)
    }
}

/// One keyword-table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordEntry {
    /// Localized spelling as written in source.
    pub spelling: &'static str,
    /// Target-language keyword or expression.
    pub target: &'static str,
    pub category: KeywordCategory,
}

use KeywordCategory::*;

#[rustfmt::skip]
const ENTRIES: &[(&str, &str, KeywordCategory)] = &[
    ("সংখ্যা", "let", Declaration),
    ("শব্দ", "let", Declaration),
    ("বাক্য", "let", Declaration),
    ("চলক", "let", Declaration),
    ("পরিবর্তনশীল", "var", Declaration),
    ("ধ্রুবক", "const", Declaration),
    ("ব্যাক্তি", "const", Declaration),
    ("অনুষ্ঠান", "function", Function),
    ("ফাংশন", "function", Function),
    ("প্রেরণ", "return", Function),
    ("ফেরত", "return", Function),
    ("ফিরিয়ে_দাও", "return", Function),
    ("যদি", "if", Conditional),
    ("নাহলে", "else", Conditional),
    ("অন্যথায়", "else", Conditional),
    ("নাহলে_যদি", "else if", Conditional),
    ("যখন", "while", Loop),
    ("জন্য", "for", Loop),
    ("প্রতিটি", "for", Loop),
    ("করো", "do", Loop),
    ("থামাও", "break", Loop),
    ("চালিয়ে_যাও", "continue", Loop),
    ("পুনরাবৃত্তি", "for", Loop),
    ("নতুন", "new", ObjectModel),
    ("শ্রেণী", "class", ObjectModel),
    ("ক্লাস", "class", ObjectModel),
    ("গঠন", "constructor", ObjectModel),
    ("নির্মাতা", "constructor", ObjectModel),
    ("বিস্তৃত", "extends", ObjectModel),
    ("সম্প্রসারিত", "extends", ObjectModel),
    ("স্ট্যাটিক", "static", ObjectModel),
    ("স্থির", "static", ObjectModel),
    ("এটি", "this", ObjectModel),
    ("এই", "this", ObjectModel),
    ("সুপার", "super", ObjectModel),
    ("অতিক্লাস", "super", ObjectModel),
    ("লিখো", "console.log", Console),
    ("ছাপাও", "console.log", Console),
    ("প্রিন্ট", "console.log", Console),
    ("দেখাও", "console.log", Console),
    ("সমস্যা_লিখো", "console.log", Console),
    ("ত্রুটি_লিখো", "console.error", Console),
    ("লিখো_সতর্কতা", "console.warn", Console),
    ("লিখো_সাবধান", "console.warn", Console),
    ("লিখো_তথ্য", "console.info", Console),
    ("পরিষ্কার_করো", "console.clear", Console),
    ("সত্য", "true", Literal),
    ("মিথ্যা", "false", Literal),
    ("শূন্য", "null", Literal),
    ("শুন্য", "null", Literal),
    ("অনির্ধারিত", "undefined", Literal),
    ("অসংজ্ঞায়িত", "undefined", Literal),
    ("চেষ্টা", "try", Exception),
    ("চেষ্টা_করো", "try", Exception),
    ("ধরো", "catch", Exception),
    ("ধরা", "catch", Exception),
    ("অবশেষে", "finally", Exception),
    ("শেষে", "finally", Exception),
    ("ফেলা", "throw", Exception),
    ("নিক্ষেপ", "throw", Exception),
    ("ছুড়ে_দাও", "throw", Exception),
    ("অপেক্ষা", "await", Async),
    ("অপেক্ষা_করো", "await", Async),
    ("অ্যাসিঙ্ক", "async", Async),
    ("অসমকালীন", "async", Async),
    ("প্রতিজ্ঞা", "Promise", Async),
    ("সুইচ", "switch", Switch),
    ("পরিবর্তন", "switch", Switch),
    ("কেস", "case", Switch),
    ("ক্ষেত্র", "case", Switch),
    ("ডিফল্ট", "default", Switch),
    ("সাধারণ", "default", Switch),
    ("আমদানি", "import", Module),
    ("আনো", "import", Module),
    ("রপ্তানি", "export", Module),
    ("রফতানি", "export", Module),
    ("পাঠাও", "export", Module),
    ("থেকে", "from", Module),
    ("হিসেবে", "as", Module),
    ("হিসাবে", "as", Module),
    ("যেমন", "as", Module),
    ("ইন", "in", Membership),
    ("ভিতরে", "in", Membership),
    ("মধ্যে", "in", Membership),
    ("অফ", "of", Membership),
    ("মধ্য", "of", Membership),
    ("এর", "of", Membership),
    ("টাইপ", "typeof", Operator),
    ("ধরন", "typeof", Operator),
    ("কিসের", "typeof", Operator),
    ("ইনস্ট্যান্স", "instanceof", Operator),
    ("উদাহরণ", "instanceof", Operator),
    ("ভ্যাড", "void", Operator),
    ("শূন্যতা", "void", Operator),
    ("মুছো", "delete", Operator),
    ("ডিবাগ", "debugger", Debugging),
    ("থামো", "debugger", Debugging),
    ("ইনপুট", "prompt", Dialog),
    ("জিজ্ঞাসা", "prompt", Dialog),
    ("সতর্কতা_বক্স", "alert", Dialog),
    ("সতর্কবার্তা", "alert", Dialog),
    ("নিশ্চিত", "confirm", Dialog),
    ("নিশ্চিত_করো", "confirm", Dialog),
    ("ঠেলো", "push", ArrayMethod),
    ("ঢোকাও", "push", ArrayMethod),
    ("তোলা", "pop", ArrayMethod),
    ("বের_করো", "pop", ArrayMethod),
    ("শিফট", "shift", ArrayMethod),
    ("প্রথম_সরাও", "shift", ArrayMethod),
    ("আনশিফট", "unshift", ArrayMethod),
    ("প্রথমে_যোগ", "unshift", ArrayMethod),
    ("কেটে_দাও", "splice", ArrayMethod),
    ("কাটো", "splice", ArrayMethod),
    ("খুঁজে", "find", ArrayMethod),
    ("খুঁজো", "find", ArrayMethod),
    ("খুঁজে_সূচক", "findIndex", ArrayMethod),
    ("সূচক_খুঁজো", "findIndex", ArrayMethod),
    ("ম্যাপ", "map", ArrayMethod),
    ("ছাঁকনি", "filter", ArrayMethod),
    ("ফিল্টার", "filter", ArrayMethod),
    ("হ্রাস", "reduce", ArrayMethod),
    ("জোড়া", "join", ArrayMethod),
    ("ভাগ", "split", ArrayMethod),
    ("সাজাও", "sort", ArrayMethod),
    ("উল্টাও", "reverse", ArrayMethod),
    ("প্রতিটিতে", "forEach", ArrayMethod),
    ("কিছু", "some", ArrayMethod),
    ("সব", "every", ArrayMethod),
    ("অন্তর্ভুক্ত", "includes", ArrayMethod),
    ("দৈর্ঘ্য", "length", StringMethod),
    ("বড়হাতের", "toUpperCase", StringMethod),
    ("ছোটহাতের", "toLowerCase", StringMethod),
    ("ছাঁটাই", "trim", StringMethod),
    ("প্রতিস্থাপন", "replace", StringMethod),
    ("খণ্ড", "slice", StringMethod),
    ("উপস্ট্রিং", "substring", StringMethod),
    ("সূচকে", "indexOf", StringMethod),
    ("শেষ_সূচক", "lastIndexOf", StringMethod),
    ("গণিত", "Math", Math),
    ("পাই", "Math.PI", Math),
    ("বর্গমূল", "Math.sqrt", Math),
    ("শক্তি", "Math.pow", Math),
    ("পরম", "Math.abs", Math),
    ("সিলিং", "Math.ceil", Math),
    ("ফ্লোর", "Math.floor", Math),
    ("রাউন্ড", "Math.round", Math),
    ("সর্বোচ্চ", "Math.max", Math),
    ("সর্বনিম্ন", "Math.min", Math),
    ("এলোমেলো_সংখ্যা", "Math.random", Math),
    ("শব্দসমূহ", "JSON.stringify", Json),
    ("পার্স", "JSON.parse", Json),
    ("বিশ্লেষণ", "JSON.parse", Json),
    ("দস্তাবেজ", "document", Dom),
    ("ডকুমেন্ট", "document", Dom),
    ("নথি", "document", Dom),
    ("উইন্ডো", "window", Dom),
    ("জানালা", "window", Dom),
    ("বডি", "body", Dom),
    ("শিরোনাম", "title", Dom),
    ("আইডি_দ্বারা_পাও", "getElementById", Dom),
    ("শ্রেণী_দ্বারা_পাও", "getElementsByClassName", Dom),
    ("ট্যাগ_দ্বারা_পাও", "getElementsByTagName", Dom),
    ("সিলেক্টর_দ্বারা_পাও", "querySelector", Dom),
    ("সব_সিলেক্টর_দ্বারা_পাও", "querySelectorAll", Dom),
    ("ইভেন্ট_শুনো", "addEventListener", Dom),
    ("ইভেন্ট_যোগ_করো", "addEventListener", Dom),
    ("ইভেন্ট_মুছো", "removeEventListener", Dom),
    ("ইভেন্ট_অপসারণ_করো", "removeEventListener", Dom),
    ("তৈরি_করো", "createElement", Dom),
    ("যোগ_করো", "appendChild", Dom),
    ("মুছ_ফেলো", "removeChild", Dom),
    ("সেট_করো", "setAttribute", Dom),
    ("যাপাও", "getAttribute", Dom),
    ("ক্লাস_যোগ_করো", "classList.add", Dom),
    ("ক্লাস_মুছো", "classList.remove", Dom),
    ("ক্লাস_টগল_করো", "classList.toggle", Dom),
    ("স্টাইল_প্রয়োগ_করো", "style", Dom),
    ("শৈলী", "style", Dom),
    ("বিষয়বস্তু_পরিবর্তন_করো", "innerHTML", Dom),
    ("টেক্সট_পরিবর্তন_করো", "innerText", Dom),
    ("রঙ", "color", Dom),
    ("ক্লিক", "click", Event),
    ("প্রস্তুত_অবস্থা", "readyState", Event),
    ("সম্পূর্ণ", "complete", Event),
    ("ডকুমেন্ট_সামগ্রী_লোডেড", "DOMContentLoaded", Event),
    ("এবংএবং", "&&", Logic),
    ("অথবাঅথবা", "||", Logic),
    ("না", "!", Logic),
    ("নয়", "!", Logic),
    ("সমান", "===", Comparison),
    ("অসমান", "!==", Comparison),
    ("বড়", ">", Comparison),
    ("ছোট", "<", Comparison),
    ("বড়_বা_সমান", ">=", Comparison),
    ("ছোট_বা_সমান", "<=", Comparison),
];

/// Canonical spelling → row index into [`ENTRIES`]. The first row wins.
static INDEX: Lazy<HashMap<String, usize>> = Lazy::new(|| {
    let mut index = HashMap::with_capacity(ENTRIES.len());
    for (i, (spelling, _, _)) in ENTRIES.iter().enumerate() {
        index.entry(canonicalize(spelling).into_owned()).or_insert(i);
    }
    index
});

fn row(word: &str) -> Option<KeywordEntry> {
    let i = *INDEX.get(canonicalize(word).as_ref())?;
    let (spelling, target, category) = ENTRIES[i];
    Some(KeywordEntry {
        spelling,
        target,
        category,
    })
}

/// Target spelling for a localized keyword, `None` for anything else.
pub fn lookup(word: &str) -> Option<&'static str> {
    row(word).map(|entry| entry.target)
}

/// Returns `true` if `word` is a keyword-table entry.
pub fn is_keyword(word: &str) -> bool {
    row(word).is_some()
}

/// The category of a keyword, `None` for identifiers.
pub fn category(word: &str) -> Option<KeywordCategory> {
    row(word).map(|entry| entry.category)
}

/// Every keyword entry, in table order.
pub fn entries() -> impl Iterator<Item = KeywordEntry> {
    ENTRIES
        .iter()
        .map(|&(spelling, target, category)| KeywordEntry {
            spelling,
            target,
            category,
        })
}

/// Localized spellings in one category, in table order.
pub fn by_category(category: KeywordCategory) -> Vec<&'static str> {
    entries()
        .filter(|entry| entry.category == category)
        .map(|entry| entry.spelling)
        .collect()
}
