//! Edge case tests for morloc-lex

use crate::lexer::KEYWORDS;
use crate::token::NumberKind::*;
use crate::token::TokenKind::*;
use crate::{Lexer, LexerConfig, Mode, Token, TokenKind};
use morloc_util::{DiagnosticCode, Handler, Level};

struct Lexed<'a> {
    tokens: Vec<Token<'a>>,
    modes: Vec<Mode>,
    handler: Handler,
}

impl<'a> Lexed<'a> {
    fn pairs(&self) -> Vec<(TokenKind, &'a str)> {
        self.tokens.iter().map(|t| (t.kind, t.text)).collect()
    }

    fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind).collect()
    }

    fn texts_of(&self, kind: TokenKind) -> Vec<&'a str> {
        self.tokens
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.text)
            .collect()
    }
}

fn lex_with(source: &str, config: LexerConfig) -> Lexed<'_> {
    let handler = Handler::new();
    let mut lexer = Lexer::with_config(source, &handler, config);
    let tokens: Vec<_> = lexer.by_ref().collect();
    let modes = lexer.open_modes().to_vec();
    drop(lexer);
    Lexed {
        tokens,
        modes,
        handler,
    }
}

fn lex(source: &str) -> Lexed<'_> {
    lex_with(source, LexerConfig::default())
}

// ==================== STRINGS ====================

#[test]
fn test_edge_multiline_string_keeps_inner_quotes() {
    let out = lex(r#""""a "quoted" ""b""""#);
    assert_eq!(out.modes, [Mode::Root]);
    assert!(out.kinds().iter().all(|&k| k == TokenKind::String));
    assert_eq!(out.tokens.first().map(|t| t.text), Some("\"\"\""));
    assert_eq!(out.tokens.last().map(|t| t.text), Some("\"\"\""));
}

#[test]
fn test_edge_multiline_string_spans_lines() {
    let out = lex("\"\"\"\nline #{x}\n\"\"\" y");
    assert_eq!(out.modes, [Mode::Root]);
    assert_eq!(out.texts_of(StringInterpol), ["#{", "}"]);
    assert_eq!(out.tokens.last().map(|t| (t.kind, t.text)), Some((Name, "y")));
}

#[test]
fn test_edge_nested_interpolation() {
    let out = lex(r##""x#{ f("#{1}") }y""##);
    assert_eq!(out.modes, [Mode::Root]);
    assert!(out.handler.diagnostics().is_empty());
    assert_eq!(out.texts_of(StringInterpol), ["#{", "#{", "}", "}"]);
    assert_eq!(out.texts_of(Name), ["f"]);
    assert_eq!(
        out.pairs()[out.tokens.len() - 2..],
        [(TokenKind::String, "y"), (TokenKind::String, "\"")]
    );
}

#[test]
fn test_edge_bare_interpolation_inside_expression() {
    let out = lex(r##""#{ f(#{1}) }""##);
    assert_eq!(out.modes, [Mode::Root]);
    assert!(out.handler.diagnostics().is_empty());
    assert_eq!(out.texts_of(StringInterpol), ["#{", "#{", "}", "}"]);
    assert_eq!(out.texts_of(Punctuation), ["(", ")"]);
}

#[test]
fn test_edge_brackets_balance_inside_interpolation() {
    let out = lex(r##""#{ [x, y] }!""##);
    assert_eq!(out.modes, [Mode::Root]);
    assert_eq!(out.texts_of(StringInterpol), ["#{", "}"]);
    assert_eq!(out.texts_of(TokenKind::String), ["\"", "!", "\""]);
}

#[test]
fn test_edge_braces_balance_inside_interpolation() {
    let out = lex(r##""#{ {a = 1} }""##);
    assert_eq!(out.modes, [Mode::Root]);
    assert_eq!(
        out.pairs()[out.tokens.len() - 4..],
        [
            (Punctuation, "}"),
            (Whitespace, " "),
            (StringInterpol, "}"),
            (TokenKind::String, "\""),
        ]
    );
}

#[test]
fn test_edge_hash_without_brace_is_content() {
    let out = lex(r##""a#b""##);
    assert_eq!(
        out.pairs(),
        [
            (TokenKind::String, "\""),
            (TokenKind::String, "a"),
            (TokenKind::String, "#"),
            (TokenKind::String, "b"),
            (TokenKind::String, "\""),
        ]
    );
}

#[test]
fn test_edge_escapes() {
    let out = lex(r#""a\nb\^Ac\x41\o17\65\#""#);
    assert_eq!(out.modes, [Mode::Root]);
    assert_eq!(
        out.texts_of(StringEscape),
        ["\\", "n", "\\", "^A", "\\", "x41", "\\", "o17", "\\", "65", "\\", "#"]
    );
    assert_eq!(out.texts_of(TokenKind::String), ["\"", "a", "b", "c", "\""]);
}

#[test]
fn test_edge_string_gap() {
    let out = lex("\"a\\  \n  \\b\"");
    assert_eq!(out.modes, [Mode::Root]);
    assert_eq!(out.texts_of(StringEscape), ["\\", "\\"]);
    assert_eq!(out.texts_of(Whitespace), ["  \n  "]);
}

#[test]
fn test_edge_invalid_escape_recovers() {
    let out = lex(r#""\q" x"#);
    assert_eq!(
        out.pairs(),
        [
            (TokenKind::String, "\""),
            (StringEscape, "\\"),
            (Error, "q"),
            (TokenKind::String, "\""),
            (Whitespace, " "),
            (Name, "x"),
        ]
    );
    assert_eq!(out.handler.error_count(), 1);
    assert_eq!(out.modes, [Mode::Root]);
}

#[test]
fn test_edge_newline_after_backslash_resyncs() {
    let out = lex("\"a\\\nb\"");
    assert_eq!(
        out.pairs()[3..],
        [
            (Whitespace, "\n"),
            (Name, "b"),
            (TokenKind::String, "\""),
        ]
    );
    assert_eq!(out.handler.error_count(), 0);
    assert_eq!(out.handler.warning_count(), 1);
    assert_eq!(out.modes, [Mode::Root, Mode::String]);
}

#[test]
fn test_edge_newline_without_resync_is_error() {
    let out = lex_with("\"a\\\nb\"", LexerConfig::default().newline_resync(false));
    assert_eq!(
        out.pairs()[3..],
        [
            (Error, "\n"),
            (StringEscape, "b"),
            (TokenKind::String, "\""),
        ]
    );
    assert_eq!(out.handler.error_count(), 1);
    assert_eq!(out.modes, [Mode::Root]);
}

#[test]
fn test_edge_unclosed_string() {
    let out = lex("\"abc");
    assert_eq!(out.modes, [Mode::Root, Mode::String]);
    let diagnostics = out.handler.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, Some(DiagnosticCode::W_LEXER_UNCLOSED_MODE));
    assert_eq!(diagnostics[0].span.start, 4);
}

// ==================== DECLARATIONS ====================

#[test]
fn test_edge_source_from_with_aliases() {
    let out = lex(r#"source Py from "foo.py" ("sum" as msum, "mul")"#);
    assert_eq!(out.modes, [Mode::Root]);
    assert_eq!(
        out.pairs(),
        [
            (Keyword, "source"),
            (Whitespace, " "),
            (NameType, "Py"),
            (Whitespace, " "),
            (Keyword, "from"),
            (Whitespace, " "),
            (TokenKind::String, "\"foo.py\""),
            (Whitespace, " "),
            (Text, "("),
            (TokenKind::String, "\"sum\""),
            (Whitespace, " "),
            (Keyword, "as"),
            (Whitespace, " "),
            (Name, "msum"),
            (Punctuation, ","),
            (Whitespace, " "),
            (TokenKind::String, "\"mul\""),
            (Text, ")"),
        ]
    );
}

#[test]
fn test_edge_source_list_spans_lines() {
    let out = lex("source Cpp (\n  \"a\" -- first\n  , \"b\"\n)\nx");
    assert_eq!(out.modes, [Mode::Root]);
    assert_eq!(out.texts_of(CommentSingle), ["-- first"]);
    assert_eq!(out.texts_of(Text), ["(", ")"]);
    assert_eq!(out.tokens.last().map(|t| t.kind), Some(Name));
}

#[test]
fn test_edge_import_list() {
    let out = lex("import math (sin, cos')");
    assert_eq!(out.modes, [Mode::Root]);
    assert_eq!(
        out.pairs(),
        [
            (Keyword, "import"),
            (Whitespace, " "),
            (Name, "math"),
            (Whitespace, " "),
            (Punctuation, "("),
            (Name, "sin"),
            (Punctuation, ","),
            (Whitespace, " "),
            (Name, "cos'"),
            (Text, ")"),
        ]
    );
}

#[test]
fn test_edge_import_hyphenated_module() {
    let out = lex("import math-utils.core");
    assert_eq!(
        out.pairs(),
        [
            (Keyword, "import"),
            (Whitespace, " "),
            (Name, "math-utils.core"),
        ]
    );
}

#[test]
fn test_edge_import_anonymous_list() {
    let out = lex("import (a)");
    assert_eq!(out.modes, [Mode::Root]);
    assert_eq!(out.kinds()[..3], [Keyword, Whitespace, Punctuation]);
}

#[test]
fn test_edge_type_declaration() {
    let out = lex("type Person = Str");
    assert_eq!(
        out.pairs(),
        [
            (Keyword, "type"),
            (Whitespace, " "),
            (NameType, "Person"),
            (Whitespace, " "),
            (Operator, "="),
            (Whitespace, " "),
            (NameType, "Str"),
        ]
    );
}

#[test]
fn test_edge_module_without_name_pops() {
    let out = lex("module Foo");
    assert_eq!(out.kinds(), [Keyword, Whitespace, NameType]);
    assert_eq!(out.modes, [Mode::Root]);
}

#[test]
fn test_edge_every_keyword_alone() {
    for word in KEYWORDS.iter().chain(&["module"]) {
        let out = lex(word);
        assert_eq!(out.pairs(), [(Keyword, *word)], "{word}");
    }
}

#[test]
fn test_edge_keyword_after_digit_is_not_keyword() {
    let out = lex("1as");
    assert_eq!(out.pairs(), [(Number(Integer), "1"), (Name, "as")]);
}

// ==================== LITERALS ====================

#[test]
fn test_edge_number_kinds() {
    let out = lex("0xFF 0b1010 0o17 1_000 2.5e-3 0x1.8p3 1e10");
    let numbers: Vec<_> = out.kinds().into_iter().filter(|k| k.is_number()).collect();
    assert_eq!(
        numbers,
        [
            Number(Hex),
            Number(Bin),
            Number(Oct),
            Number(Integer),
            Number(Float),
            Number(Float),
            Number(Float),
        ]
    );
}

#[test]
fn test_edge_unit_list_and_wildcard() {
    let out = lex("[] () _ _x");
    assert_eq!(
        out.pairs(),
        [
            (KeywordType, "[]"),
            (Whitespace, " "),
            (NameBuiltin, "()"),
            (Whitespace, " "),
            (Operator, "_"),
            (Whitespace, " "),
            (Name, "_x"),
        ]
    );
}

#[test]
fn test_edge_promoted_types() {
    let out = lex("'[Int] ': '(a, b)");
    assert_eq!(out.texts_of(KeywordType), ["'[Int]", "':", "'(a, b)"]);
}

#[test]
fn test_edge_unicode_identifiers() {
    let out = lex("λx Σ");
    assert_eq!(
        out.pairs(),
        [(Name, "λx"), (Whitespace, " "), (NameType, "Σ")]
    );
}

#[test]
fn test_edge_signature_operators() {
    let out = lex("f :: a -> [b] => c");
    assert_eq!(out.texts_of(Operator), ["::", "->", "=>"]);
    assert_eq!(out.texts_of(Punctuation), ["[", "]"]);
}

#[test]
fn test_edge_line_comment() {
    let out = lex("x -- note\ny");
    assert_eq!(
        out.pairs(),
        [
            (Name, "x"),
            (Whitespace, " "),
            (CommentSingle, "-- note"),
            (Whitespace, "\n"),
            (Name, "y"),
        ]
    );
}

// ==================== PATTERNS ====================

#[test]
fn test_edge_trailing_dot_is_operator() {
    let out = lex("x.");
    assert_eq!(out.pairs(), [(Name, "x"), (Operator, ".")]);
    assert_eq!(out.modes, [Mode::Root]);
}

#[test]
fn test_edge_pattern_value_with_parens() {
    let out = lex(".(.0 = (1, 2), .name = f x)");
    assert_eq!(out.modes, [Mode::Root]);
    assert!(out.handler.diagnostics().is_empty());
    assert_eq!(out.texts_of(Name), ["name", "f", "x"]);
}

#[test]
fn test_edge_pattern_value_with_list() {
    let out = lex(".(.0 = [1, 2], .1 = 3)");
    assert_eq!(out.modes, [Mode::Root]);
    assert!(out.handler.diagnostics().is_empty());
    assert_eq!(out.texts_of(Number(Integer)), ["0", "1", "2", "1", "3"]);
    assert_eq!(out.texts_of(Punctuation), ["(", "[", ",", "]", ",", ")"]);
}

#[test]
fn test_edge_pattern_value_with_nested_brackets() {
    let out = lex(".(.xs = [[1], {a = [2, 3]}, []])");
    assert_eq!(out.modes, [Mode::Root]);
    assert!(out.handler.diagnostics().is_empty());
    assert_eq!(out.texts_of(KeywordType), ["[]"]);
}

#[test]
fn test_edge_pattern_dot_after_operator() {
    let out = lex("y=.name");
    assert_eq!(
        out.pairs(),
        [(Name, "y"), (Operator, "="), (Operator, "."), (Name, "name")]
    );

    let out = lex("x+.0");
    assert_eq!(
        out.pairs(),
        [(Name, "x"), (Operator, "+"), (Operator, "."), (Number(Integer), "0")]
    );
    assert_eq!(out.modes, [Mode::Root]);
}

#[test]
fn test_edge_operator_dot_without_selector() {
    let out = lex("f <. g");
    assert_eq!(out.texts_of(Operator), ["<."]);
}

#[test]
fn test_edge_unclosed_pattern_group() {
    let out = lex(".(.0");
    assert_eq!(out.modes, [Mode::Root, Mode::PatternGroup]);
    assert_eq!(out.handler.warning_count(), 1);
}

#[test]
fn test_edge_pattern_in_interpolation() {
    let out = lex(r##""#{p.0}""##);
    assert_eq!(out.modes, [Mode::Root]);
    assert_eq!(out.texts_of(Number(Integer)), ["0"]);
}

// ==================== STRUCTURE ====================

#[test]
fn test_edge_deep_comment_nesting() {
    let source = format!("{}{}", "{-".repeat(1000), "-}".repeat(1000));
    let out = lex(&source);
    assert_eq!(out.modes, [Mode::Root]);
    assert!(out.kinds().iter().all(|&k| k == CommentMultiline));
}

#[test]
fn test_edge_comment_with_lone_delimiters() {
    let out = lex("{- a - b { c } -}");
    assert_eq!(out.modes, [Mode::Root]);
    let texts: Vec<_> = out.tokens.iter().map(|t| t.text).collect();
    assert_eq!(texts.concat(), "{- a - b { c } -}");
}

#[test]
fn test_edge_spans_track_lines() {
    let out = lex("module m\n  x");
    let x = out.tokens.last().map(|t| t.span);
    assert_eq!(x.map(|s| (s.line, s.column, s.start)), Some((2, 3, 11)));
}

#[test]
fn test_edge_crlf() {
    let out = lex("x\r\ny");
    assert_eq!(out.pairs(), [(Name, "x"), (Whitespace, "\r\n"), (Name, "y")]);
}

#[test]
fn test_edge_error_diagnostic_level() {
    let out = lex("`ok` ¤");
    let diagnostics = out.handler.diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].level, Level::Error);
    assert_eq!(diagnostics[0].message, "unrecognized input '¤'");
}

#[test]
fn test_edge_iterator_is_fused() {
    let handler = Handler::new();
    let mut lexer = Lexer::new("{-", &handler);
    assert!(lexer.next().is_some());
    assert!(lexer.next().is_none());
    assert!(lexer.next().is_none());
    assert_eq!(handler.warning_count(), 1);
}
