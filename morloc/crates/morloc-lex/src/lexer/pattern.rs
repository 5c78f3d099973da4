//! Pattern access rules: `.name`, `.0`, `.0.name` and `.(.0 = x, .1 = y)`.
//!
//! A dot directly followed by a word character or `(` enters
//! [`Mode::Pattern`], which reads one selector and pops. Chains re-enter
//! through the dot rule of whatever mode is active afterwards.

use super::identifier::scan_whitespace;
use super::number::scan_index;
use super::rule::Rule;
use crate::cursor::Cursor;
use crate::mode::Mode;
use crate::token::{NumberKind, TokenKind};
use crate::unicode::{is_ident_continue, is_word_char};

/// Returns true at a `.` directly followed by a selector.
pub(super) fn at_pattern_dot(cursor: &Cursor<'_>) -> bool {
    cursor.peek() == Some('.')
        && matches!(cursor.peek_nth(1), Some(c) if is_word_char(c) || c == '(')
}

/// Scans a `.` that starts a pattern selector, without the selector.
fn scan_pattern_dot(cursor: &mut Cursor<'_>) -> bool {
    at_pattern_dot(cursor) && cursor.eat('.')
}

/// Scans a field selector: a letter or `_` followed by identifier chars.
fn scan_field(cursor: &mut Cursor<'_>) -> bool {
    if !cursor.eat_if(|c| c == '_' || c.is_alphabetic()) {
        return false;
    }
    cursor.eat_while(is_ident_continue);
    true
}

fn at_value_end(cursor: &Cursor<'_>) -> bool {
    matches!(cursor.peek(), Some(',' | ')'))
}

/// Dot rule entering [`Mode::Pattern`].
pub(super) fn pattern_entry_rule() -> Rule {
    Rule::scan(scan_pattern_dot, TokenKind::Operator).push(Mode::Pattern)
}

/// Rules of [`Mode::Pattern`].
pub(super) fn pattern_mode() -> Vec<Rule> {
    vec![
        Rule::literal("(", TokenKind::Punctuation).replace(Mode::PatternGroup),
        Rule::scan(scan_field, TokenKind::Name).pop(),
        Rule::scan(scan_index, TokenKind::Number(NumberKind::Integer)).pop(),
        Rule::lookahead_pop(|_| true),
    ]
}

/// Rules of [`Mode::PatternGroup`].
pub(super) fn pattern_group_mode() -> Vec<Rule> {
    vec![
        Rule::scan(scan_whitespace, TokenKind::Whitespace),
        Rule::literal(".", TokenKind::Operator).push(Mode::Pattern),
        Rule::literal("=", TokenKind::Operator).push(Mode::PatternValue),
        Rule::literal(",", TokenKind::Punctuation),
        Rule::literal(")", TokenKind::Punctuation).pop(),
    ]
}

/// Leading rules of [`Mode::PatternValue`]; the expression rules follow.
pub(super) fn pattern_value_prefix() -> Vec<Rule> {
    vec![
        Rule::literal("(", TokenKind::Punctuation).push(Mode::Parens),
        Rule::lookahead_pop(at_value_end),
    ]
}
