//! Keyword, declaration header and identifier rules.
//!
//! Declaration headers (`type Name`, `import name (`, `source Lang from
//! "path" (`) are matched as a whole so that the name after the keyword gets
//! its declaration-specific classification, and so that list headers can
//! enter their list modes. Bare keywords and identifiers come after them.

use super::rule::{eat_word, Captures, Matcher, Rule};
use crate::cursor::Cursor;
use crate::mode::Mode;
use crate::token::TokenKind;
use crate::unicode::{
    is_ident_continue, is_lower_start, is_operator_char, is_upper_start, is_word_char,
};
use crate::token::TokenKind::{Keyword, Name, NameType, Punctuation, Text, Whitespace};

/// Reserved words with no special follow-on syntax.
pub const KEYWORDS: &[&str] = &[
    "source", "class", "instance", "from", "as", "where", "type", "import", "object", "table",
    "record", "export",
];

fn whitespace(cursor: &mut Cursor<'_>) -> usize {
    cursor.eat_while(char::is_whitespace)
}

/// Scans a run of whitespace.
pub(super) fn scan_whitespace(cursor: &mut Cursor<'_>) -> bool {
    whitespace(cursor) > 0
}

/// Scans a double-quoted string without escapes: `"[^"]+"`.
pub(super) fn scan_plain_string(cursor: &mut Cursor<'_>) -> bool {
    cursor.eat('"') && cursor.eat_while(|c| c != '"') > 0 && cursor.eat('"')
}

/// Scans an import target: `[A-Za-z.][\w.-]*`.
fn scan_module_path(cursor: &mut Cursor<'_>) -> bool {
    if !cursor.eat_if(|c| c.is_ascii_alphabetic() || c == '.') {
        return false;
    }
    cursor.eat_while(|c| is_word_char(c) || c == '.' || c == '-');
    true
}

/// `type` Name
fn scan_type_header(cursor: &mut Cursor<'_>, caps: &mut Captures) -> bool {
    if !eat_word(cursor, "type") {
        return false;
    }
    caps.mark(cursor);
    if whitespace(cursor) == 0 {
        return false;
    }
    caps.mark(cursor);
    if !cursor.eat_if(is_upper_start) {
        return false;
    }
    cursor.eat_while(is_ident_continue);
    caps.mark(cursor);
    true
}

/// `import` name `(`
fn scan_import_list_header(cursor: &mut Cursor<'_>, caps: &mut Captures) -> bool {
    scan_import_target(cursor, caps) && {
        whitespace(cursor);
        caps.mark(cursor);
        let open = cursor.eat('(');
        caps.mark(cursor);
        open
    }
}

/// `import` name
fn scan_import_target(cursor: &mut Cursor<'_>, caps: &mut Captures) -> bool {
    if !eat_word(cursor, "import") {
        return false;
    }
    caps.mark(cursor);
    if whitespace(cursor) == 0 {
        return false;
    }
    caps.mark(cursor);
    let named = scan_module_path(cursor);
    caps.mark(cursor);
    named
}

/// `import (`
fn scan_import_anonymous_list(cursor: &mut Cursor<'_>, caps: &mut Captures) -> bool {
    if !eat_word(cursor, "import") {
        return false;
    }
    caps.mark(cursor);
    whitespace(cursor);
    caps.mark(cursor);
    let open = cursor.eat('(');
    caps.mark(cursor);
    open
}

/// `source` Lang
fn scan_source_language(cursor: &mut Cursor<'_>, caps: &mut Captures) -> bool {
    if !eat_word(cursor, "source") {
        return false;
    }
    caps.mark(cursor);
    if whitespace(cursor) == 0 {
        return false;
    }
    caps.mark(cursor);
    let named = cursor.eat_while(|c| c.is_ascii_alphabetic()) > 0;
    caps.mark(cursor);
    named
}

/// Optional whitespace, then `(` closing the header.
fn scan_list_open(cursor: &mut Cursor<'_>, caps: &mut Captures) -> bool {
    whitespace(cursor);
    caps.mark(cursor);
    let open = cursor.eat('(');
    caps.mark(cursor);
    open
}

/// `source` Lang `from` "path" `(`
fn scan_source_from_header(cursor: &mut Cursor<'_>, caps: &mut Captures) -> bool {
    if !scan_source_language(cursor, caps) || whitespace(cursor) == 0 {
        return false;
    }
    caps.mark(cursor);
    if !eat_word(cursor, "from") {
        return false;
    }
    caps.mark(cursor);
    if whitespace(cursor) == 0 {
        return false;
    }
    caps.mark(cursor);
    if !scan_plain_string(cursor) {
        return false;
    }
    caps.mark(cursor);
    scan_list_open(cursor, caps)
}

/// `source` Lang `(`
fn scan_source_header(cursor: &mut Cursor<'_>, caps: &mut Captures) -> bool {
    scan_source_language(cursor, caps) && scan_list_open(cursor, caps)
}

/// `"path" as name` inside a source list.
pub(super) fn scan_aliased_source(cursor: &mut Cursor<'_>, caps: &mut Captures) -> bool {
    if !scan_plain_string(cursor) {
        return false;
    }
    caps.mark(cursor);
    if whitespace(cursor) == 0 {
        return false;
    }
    caps.mark(cursor);
    if !eat_word(cursor, "as") {
        return false;
    }
    caps.mark(cursor);
    if whitespace(cursor) == 0 {
        return false;
    }
    caps.mark(cursor);
    let named = cursor.eat_while(is_word_char) > 0;
    caps.mark(cursor);
    named
}

/// A name inside an import list: `[A-Za-z][\w']*`.
pub(super) fn scan_import_item(cursor: &mut Cursor<'_>) -> bool {
    if !cursor.eat_if(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    cursor.eat_while(is_ident_continue);
    true
}

/// `module` keyword entering [`Mode::Module`].
pub(super) fn module_rule() -> Rule {
    Rule::token(Matcher::Word("module"), Keyword).push(Mode::Module)
}

/// Declaration headers, in the order they must be tried.
pub(super) fn declaration_rules() -> Vec<Rule> {
    vec![
        Rule::groups(
            scan_source_from_header,
            &[
                Keyword,
                Whitespace,
                NameType,
                Whitespace,
                Keyword,
                Whitespace,
                TokenKind::String,
                Whitespace,
                Text,
            ],
        )
        .push(Mode::SourceList),
        Rule::groups(
            scan_source_header,
            &[Keyword, Whitespace, NameType, Whitespace, Text],
        )
        .push(Mode::SourceList),
        Rule::groups(scan_type_header, &[Keyword, Whitespace, NameType]),
        Rule::groups(
            scan_import_list_header,
            &[Keyword, Whitespace, Name, Whitespace, Punctuation],
        )
        .push(Mode::ImportList),
        Rule::groups(scan_import_target, &[Keyword, Whitespace, Name]),
        Rule::groups(
            scan_import_anonymous_list,
            &[Keyword, Whitespace, Punctuation],
        )
        .push(Mode::ImportList),
    ]
}

/// One word-boundary rule per entry of [`KEYWORDS`].
pub(super) fn keyword_rules() -> Vec<Rule> {
    KEYWORDS
        .iter()
        .map(|&word| Rule::token(Matcher::Word(word), Keyword))
        .collect()
}

/// Scans a value-level name: lower-case initial, or `_` followed by at
/// least one identifier character.
fn scan_lower_ident(cursor: &mut Cursor<'_>) -> bool {
    if cursor.eat('_') {
        return cursor.eat_while(is_ident_continue) > 0;
    }
    if !cursor.eat_if(is_lower_start) {
        return false;
    }
    cursor.eat_while(is_ident_continue);
    true
}

fn scan_upper_ident(cursor: &mut Cursor<'_>) -> bool {
    if !cursor.eat_if(is_upper_start) {
        return false;
    }
    cursor.eat_while(is_ident_continue);
    true
}

/// Scans `'[...]`, `'(...)` or `'` followed by operator symbols.
fn scan_promoted_type(cursor: &mut Cursor<'_>) -> bool {
    if !cursor.eat('\'') {
        return false;
    }
    for (open, close) in [('[', ']'), ('(', ')')] {
        if cursor.eat(open) {
            cursor.eat_while(|c| c != close);
            return cursor.eat(close);
        }
    }
    cursor.eat_while(is_operator_char) > 0
}

/// Identifier rules, including the wildcard `_`.
pub(super) fn identifier_rules() -> Vec<Rule> {
    vec![
        Rule::scan(scan_lower_ident, Name),
        Rule::scan(scan_upper_ident, NameType),
        Rule::literal("_", TokenKind::Operator),
    ]
}

/// Promoted type literal rule.
pub(super) fn promoted_type_rule() -> Rule {
    Rule::scan(scan_promoted_type, TokenKind::KeywordType)
}

/// Rules of [`Mode::Module`].
pub(super) fn module_mode() -> Vec<Rule> {
    fn scan_module_name(cursor: &mut Cursor<'_>) -> bool {
        if !cursor.eat_if(is_lower_start) {
            return false;
        }
        cursor.eat_while(|c| is_word_char(c) || c == '.');
        true
    }

    vec![
        Rule::scan(scan_whitespace, Whitespace),
        Rule::scan(scan_module_name, Name).pop(),
        Rule::lookahead_pop(|_| true),
    ]
}
