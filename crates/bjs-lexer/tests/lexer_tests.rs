//! Lexer tests: literal capture, digit and word classes in both scripts,
//! division vs. pattern disambiguation, degenerate input, losslessness and
//! the 100-iteration determinism test.

use bjs_lexer::{tokenize, Lexer, TokenKind};
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

/// Tokenize and return `(kind, text)` pairs, whitespace runs dropped.
fn pairs(source: &str) -> Vec<(TokenKind, String)> {
    tokenize(source)
        .into_iter()
        .filter(|t| !t.is_whitespace())
        .map(|t| (t.kind, t.text.to_string()))
        .collect()
}

/// Tokenize and return just the kinds, whitespace runs dropped.
fn kinds(source: &str) -> Vec<TokenKind> {
    pairs(source).into_iter().map(|(k, _)| k).collect()
}

/// Texts of every token of `kind`.
fn texts_of(source: &str, kind: TokenKind) -> Vec<String> {
    pairs(source)
        .into_iter()
        .filter(|(k, _)| *k == kind)
        .map(|(_, t)| t)
        .collect()
}

fn rejoin(source: &str) -> String {
    tokenize(source).iter().map(|t| t.text).collect()
}

// ─────────────────────────────────────────────────────────────────────
// Literal capture
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_assignment_with_bangla_string() {
    let source = "নাম = \"হ্যালো, বিশ্ব!\";";
    let tokens: Vec<_> = tokenize(source)
        .into_iter()
        .map(|t| (t.kind, t.text))
        .collect();
    assert_eq!(
        tokens,
        vec![
            (TokenKind::Word, "নাম"),
            (TokenKind::Symbol, " "),
            (TokenKind::Symbol, "="),
            (TokenKind::Symbol, " "),
            (TokenKind::String, "\"হ্যালো, বিশ্ব!\""),
            (TokenKind::Symbol, ";"),
        ]
    );
}

#[test]
fn test_all_quote_styles() {
    assert_eq!(texts_of("'একক'", TokenKind::String), vec!["'একক'"]);
    assert_eq!(texts_of("\"দ্বৈত\"", TokenKind::String), vec!["\"দ্বৈত\""]);
    assert_eq!(
        texts_of("`টেমপ্লেট ${নাম}\nলাইন`", TokenKind::String),
        vec!["`টেমপ্লেট ${নাম}\nলাইন`"]
    );
}

#[test]
fn test_string_escapes_do_not_terminate() {
    assert_eq!(
        texts_of(r#"লিখো("সে বলল \"না\"");"#, TokenKind::String),
        vec![r#""সে বলল \"না\"""#]
    );
    assert_eq!(texts_of(r"'it\'s'", TokenKind::String), vec![r"'it\'s'"]);
    assert_eq!(texts_of(r#""\\" + x"#, TokenKind::String), vec![r#""\\""#]);
}

#[test]
fn test_other_quote_inside_string() {
    assert_eq!(texts_of(r#""it's" + 'say "hi"'"#, TokenKind::String).len(), 2);
}

#[test]
fn test_unterminated_string_runs_to_end() {
    let tokens = tokenize("\"abc");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].text, "\"abc");
}

#[test]
fn test_unterminated_string_after_code() {
    let source = "ধরো x = 'খোলা\nলিখো(x);";
    let strings = texts_of(source, TokenKind::String);
    assert_eq!(strings, vec!["'খোলা\nলিখো(x);"]);
}

#[test]
fn test_line_comment_stops_at_newline() {
    let source = "// লিখো(\"x\") যদি\nযদি";
    assert_eq!(
        pairs(source),
        vec![
            (TokenKind::Comment, "// লিখো(\"x\") যদি".to_string()),
            (TokenKind::Word, "যদি".to_string()),
        ]
    );
}

#[test]
fn test_block_comment() {
    let source = "/* বহু\nলাইন */ ফেরত";
    assert_eq!(
        pairs(source),
        vec![
            (TokenKind::Comment, "/* বহু\nলাইন */".to_string()),
            (TokenKind::Word, "ফেরত".to_string()),
        ]
    );
}

#[test]
fn test_unterminated_block_comment() {
    let tokens = tokenize("x /* খোলা মন্তব্য");
    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::Comment);
    assert_eq!(last.text, "/* খোলা মন্তব্য");
}

#[test]
fn test_quote_inside_comment_is_not_a_string() {
    assert_eq!(kinds("// it's\nx"), vec![TokenKind::Comment, TokenKind::Word]);
}

// ─────────────────────────────────────────────────────────────────────
// Numbers & words
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_numbers_in_both_scripts() {
    assert_eq!(texts_of("২৫ + 3.14 + ৩.১৪", TokenKind::Number), vec!["২৫", "3.14", "৩.১৪"]);
}

#[test]
fn test_mixed_script_number_run() {
    assert_eq!(texts_of("১2৩", TokenKind::Number), vec!["১2৩"]);
}

#[test]
fn test_words() {
    assert_eq!(
        texts_of("ধ্রুবক user_নাম = $el._x১;", TokenKind::Word),
        vec!["ধ্রুবক", "user_নাম", "$el", "_x১"]
    );
}

#[test]
fn test_underscore_keywords_are_one_word() {
    assert_eq!(texts_of("নাহলে_যদি (ক)", TokenKind::Word), vec!["নাহলে_যদি", "ক"]);
}

#[test]
fn test_zero_width_joiner_continues_word() {
    let word = "র\u{200D}্যাব";
    assert_eq!(texts_of(word, TokenKind::Word), vec![word]);
}

#[test]
fn test_danda_is_a_symbol() {
    assert_eq!(kinds("লিখো(ক)।"), vec![
        TokenKind::Word,
        TokenKind::Symbol,
        TokenKind::Word,
        TokenKind::Symbol,
        TokenKind::Symbol,
    ]);
}

#[test]
fn test_whitespace_is_one_symbol_per_run() {
    let tokens = tokenize("ক  \t\n খ");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].kind, TokenKind::Symbol);
    assert_eq!(tokens[1].text, "  \t\n ");
}

// ─────────────────────────────────────────────────────────────────────
// Division vs. pattern literal
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_pattern_after_assignment() {
    assert_eq!(
        texts_of("ধরো re = /[০-৯]+/g;", TokenKind::Pattern),
        vec!["/[০-৯]+/g"]
    );
}

#[test]
fn test_pattern_as_call_argument() {
    assert_eq!(
        texts_of("s.replace(/\\s+/g, \" \")", TokenKind::Pattern),
        vec!["/\\s+/g"]
    );
}

#[test]
fn test_division_after_identifier() {
    assert!(texts_of("ক = খ / গ / ঘ;", TokenKind::Pattern).is_empty());
}

#[test]
fn test_division_after_number_and_closing_bracket() {
    assert!(texts_of("x = 10 / 2 / 5", TokenKind::Pattern).is_empty());
    assert!(texts_of("x = (a) / 2 / b", TokenKind::Pattern).is_empty());
    assert!(texts_of("x = arr[0] / y / z", TokenKind::Pattern).is_empty());
}

#[test]
fn test_division_after_string() {
    assert!(texts_of("x = 'a' / b / c", TokenKind::Pattern).is_empty());
}

#[test]
fn test_pattern_after_english_return() {
    assert_eq!(texts_of("return /ab/i.test(s)", TokenKind::Pattern), vec!["/ab/i"]);
}

#[test]
fn test_pattern_after_localized_return() {
    assert_eq!(texts_of("ফেরত /ক+/u;", TokenKind::Pattern), vec!["/ক+/u"]);
}

#[test]
fn test_pattern_at_start_of_input() {
    assert_eq!(texts_of("/x/.test(y)", TokenKind::Pattern), vec!["/x/"]);
}

#[test]
fn test_pattern_with_slash_in_class_and_escape() {
    assert_eq!(
        texts_of(r"p = /[/\]]+\/x/;", TokenKind::Pattern),
        vec![r"/[/\]]+\/x/"]
    );
}

#[test]
fn test_pattern_contents_are_not_words_or_strings() {
    let source = r#"x = /"যদি"/;"#;
    assert_eq!(
        kinds(source),
        vec![TokenKind::Word, TokenKind::Symbol, TokenKind::Pattern, TokenKind::Symbol]
    );
}

#[test]
fn test_unclosed_pattern_falls_back_to_symbol() {
    let source = "x = / 2";
    assert_eq!(
        pairs(source),
        vec![
            (TokenKind::Word, "x".to_string()),
            (TokenKind::Symbol, "=".to_string()),
            (TokenKind::Symbol, "/".to_string()),
            (TokenKind::Number, "2".to_string()),
        ]
    );
}

#[test]
fn test_pattern_does_not_cross_newline() {
    let source = "x = /abc\n y / 2";
    assert!(texts_of(source, TokenKind::Pattern).is_empty());
}

#[test]
fn test_comment_keeps_expression_state() {
    let source = "x = // মন্তব্য\n/re/";
    assert_eq!(texts_of(source, TokenKind::Pattern), vec!["/re/"]);
}

#[test]
fn test_whitespace_keeps_expression_state() {
    assert_eq!(texts_of("(   /a/ )", TokenKind::Pattern), vec!["/a/"]);
    assert!(texts_of("a   / b / c", TokenKind::Pattern).is_empty());
}

// ─────────────────────────────────────────────────────────────────────
// Spans
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_spans_count_characters() {
    let tokens = tokenize("নাম = ১;\nলিখো(নাম);");
    let words: Vec<_> = tokens.iter().filter(|t| t.kind == TokenKind::Word).collect();
    assert_eq!((words[0].span.start_line, words[0].span.start_col), (1, 1));
    assert_eq!(words[0].span.end_col, 3);
    assert_eq!((words[1].span.start_line, words[1].span.start_col), (2, 1));
    assert_eq!((words[2].span.start_line, words[2].span.start_col), (2, 6));
}

// ─────────────────────────────────────────────────────────────────────
// Losslessness & determinism
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_source() {
    assert!(tokenize("").is_empty());
}

#[test]
fn test_program_is_lossless() {
    let source = r#"
অনুষ্ঠান যোগ(ক, খ) {
  // যোগফল ফেরত দাও
  ফেরত ক + খ;
}
ধ্রুবক re = /^[০-৯]+$/u;
লিখো(`ফল: ${যোগ(২, ৩)}`, 'শেষ' / 1); /* শেষ
"#;
    assert_eq!(rejoin(source), source);
}

#[test]
fn test_lexer_determinism_100_iterations() {
    let source = "ধরো x = a / b; ফেরত /ক/g; লিখো(\"স্ট্রিং\");";
    let first = pairs(source);
    for i in 0..100 {
        let result: Vec<_> = Lexer::new(source)
            .lex()
            .into_iter()
            .filter(|t| !t.is_whitespace())
            .map(|t| (t.kind, t.text.to_string()))
            .collect();
        assert_eq!(first, result, "Determinism failure at iteration {i}");
    }
}

proptest! {
    #[test]
    fn prop_tokenization_is_lossless(source in r#"[\x{0980}-\x{09FF}a-zA-Z0-9_$"'`/*\[\]\\ \n\t=;(){}+.-]{0,64}"#) {
        prop_assert_eq!(rejoin(&source), source);
    }

    #[test]
    fn prop_arbitrary_text_is_lossless(source in any::<String>()) {
        prop_assert_eq!(rejoin(&source), source);
    }

    #[test]
    fn prop_no_empty_tokens(source in r#"[\x{0980}-\x{09FF}a-z0-9"'/*\n =]{0,48}"#) {
        for token in tokenize(&source) {
            prop_assert!(!token.text.is_empty());
        }
    }
}
