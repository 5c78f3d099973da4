//! Property tests over arbitrary input.

use morloc_lex::lexer::KEYWORDS;
use morloc_lex::{tokenize, Lexer, LexerConfig, Mode, NumberKind, Token, TokenKind};
use morloc_util::{DiagnosticCode, Handler};
use proptest::prelude::*;

fn lex(source: &str, config: LexerConfig) -> (Vec<Token<'_>>, Handler) {
    let handler = Handler::new();
    let tokens = Lexer::with_config(source, &handler, config).collect();
    (tokens, handler)
}

/// Checks that tokens partition `source` and carry correct positions.
fn assert_partition(source: &str, tokens: &[Token<'_>]) {
    let mut offset = 0;
    let (mut line, mut column) = (1u32, 1u32);
    for token in tokens {
        assert!(!token.text.is_empty(), "empty token at {offset}");
        assert_eq!(token.start(), offset);
        assert_eq!(token.end(), offset + token.text.len());
        assert_eq!(&source[token.start()..token.end()], token.text);
        assert_eq!((token.span.line, token.span.column), (line, column));
        for c in token.text.chars() {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        offset = token.end();
    }
    assert_eq!(offset, source.len());
}

/// Fragments that exercise every mode when glued together at random.
fn fragment() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "module ", "m.n", "{-", "-}", "--", "\n", " ", "\"", "\"\"\"", "#{", "}", "{", "\\",
        "x", "Y", "_", "'[", "'", "3.0", "0x1", ".", ".(", ".0", "=", ",", "(", ")",
        "import ", "source ", "R ", "from ", "as ", "type ", "^A", "o7", "¤", "λ",
    ])
}

proptest! {
    #[test]
    fn prop_arbitrary_text_is_partitioned(source in any::<String>()) {
        let (tokens, handler) = lex(&source, LexerConfig::default());
        assert_partition(&source, &tokens);
        let errors = tokens.iter().filter(|t| t.kind == TokenKind::Error).count();
        prop_assert_eq!(errors, handler.error_count());
        prop_assert!(handler.warning_count() <= 1);
    }

    #[test]
    fn prop_fragment_soup_is_partitioned(
        parts in prop::collection::vec(fragment(), 0..60),
        resync in any::<bool>(),
    ) {
        let source = parts.concat();
        let config = LexerConfig::default().newline_resync(resync);
        let (tokens, handler) = lex(&source, config);
        assert_partition(&source, &tokens);
        for token in tokens.iter().filter(|t| t.kind == TokenKind::Error) {
            prop_assert_eq!(token.text.chars().count(), 1);
        }
        for diagnostic in handler.diagnostics() {
            prop_assert!(
                diagnostic.code == Some(DiagnosticCode::E_LEXER_UNRECOGNIZED_INPUT)
                    || diagnostic.code == Some(DiagnosticCode::W_LEXER_UNCLOSED_MODE)
            );
        }
    }

    #[test]
    fn prop_warning_iff_modes_left_open(parts in prop::collection::vec(fragment(), 0..40)) {
        let source = parts.concat();
        let handler = Handler::new();
        let mut lexer = Lexer::new(&source, &handler);
        lexer.by_ref().for_each(drop);
        let open = lexer.open_modes().len() > 1;
        prop_assert_eq!(lexer.open_modes()[0], Mode::Root);
        prop_assert_eq!(handler.warning_count() == 1, open);
    }

    #[test]
    fn prop_identifiers_are_single_tokens(input in "[a-z][a-zA-Z0-9_']{0,30}") {
        prop_assume!(input != "module" && !KEYWORDS.contains(&input.as_str()));
        let tokens = tokenize(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Name);
    }

    #[test]
    fn prop_decimal_fractions_are_single_floats(input in "[0-9]{1,10}\\.[0-9]{1,10}") {
        let tokens = tokenize(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number(NumberKind::Float));
    }

    #[test]
    fn prop_hex_literals_are_single_tokens(digits in "[0-9a-fA-F]{1,16}") {
        let input = format!("0x{digits}");
        let tokens = tokenize(&input);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Number(NumberKind::Hex));
    }

    #[test]
    fn prop_plain_strings_close(body in "[^\"\\\\#]{0,60}") {
        let source = format!("\"{body}\"");
        let handler = Handler::new();
        let mut lexer = Lexer::new(&source, &handler);
        let tokens: Vec<_> = lexer.by_ref().collect();
        prop_assert!(tokens.iter().all(|t| t.kind == TokenKind::String));
        prop_assert_eq!(lexer.open_modes(), &[Mode::Root][..]);
    }

    #[test]
    fn prop_interpolated_sums_balance(a in 0u32..1000, b in 0u32..1000, depth in 1usize..6) {
        let mut source = format!("{a}+{b}");
        for _ in 0..depth {
            source = format!("\"#{{{source}}}\"");
        }
        let handler = Handler::new();
        let mut lexer = Lexer::new(&source, &handler);
        let tokens: Vec<_> = lexer.by_ref().collect();
        prop_assert_eq!(lexer.open_modes(), &[Mode::Root][..]);
        let interpol = tokens.iter().filter(|t| t.kind == TokenKind::StringInterpol).count();
        prop_assert_eq!(interpol, depth * 2);
        prop_assert!(handler.diagnostics().is_empty());
    }
}
