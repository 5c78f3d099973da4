//! String literal rules: plain and triple-quoted strings, escapes and
//! `#{ ... }` interpolation.

use super::rule::{Captures, Rule};
use crate::cursor::Cursor;
use crate::mode::Mode;
use crate::token::TokenKind;
use crate::unicode::is_upper_start;

use crate::token::TokenKind::{StringEscape, StringInterpol};

/// Scans string content up to the next `\`, `"` or `#`.
fn scan_string_text(cursor: &mut Cursor<'_>) -> bool {
    cursor.eat_while(|c| !matches!(c, '\\' | '"' | '#')) > 0
}

/// Rules shared by both string modes, after their closing delimiter rule.
fn string_body() -> Vec<Rule> {
    vec![
        Rule::scan(scan_string_text, TokenKind::String),
        interpolation_open_rule(),
        Rule::literal("#", TokenKind::String),
        Rule::literal("\\", StringEscape).push(Mode::Escape),
    ]
}

pub(super) fn interpolation_open_rule() -> Rule {
    Rule::literal("#{", StringInterpol).push(Mode::Interpolation)
}

/// String openers; the triple quote must come first.
pub(super) fn string_open_rules() -> Vec<Rule> {
    vec![
        Rule::literal("\"\"\"", TokenKind::String).push(Mode::MultilineString),
        Rule::literal("\"", TokenKind::String).push(Mode::String),
    ]
}

/// Rules of [`Mode::String`].
pub(super) fn string_mode() -> Vec<Rule> {
    let mut rules = string_body();
    rules.push(Rule::literal("\"", TokenKind::String).pop());
    rules
}

/// Rules of [`Mode::MultilineString`].
pub(super) fn multiline_string_mode() -> Vec<Rule> {
    let mut rules = vec![Rule::literal("\"\"\"", TokenKind::String).pop()];
    rules.extend(string_body());
    rules.push(Rule::literal("\"", TokenKind::String));
    rules
}

fn scan_named_escape(cursor: &mut Cursor<'_>) -> bool {
    cursor.eat_if(|c| {
        matches!(
            c,
            'a' | 'b' | 'f' | 'n' | 'r' | 't' | 'v' | '"' | '\'' | '&' | '\\' | '#'
        )
    })
}

/// `^A`, `^@`, `^[` and friends.
fn scan_control_escape(cursor: &mut Cursor<'_>) -> bool {
    cursor.eat('^')
        && cursor.eat_if(|c| is_upper_start(c) || matches!(c, '@' | '[' | ']' | '^' | '_'))
}

fn scan_octal_escape(cursor: &mut Cursor<'_>) -> bool {
    cursor.eat('o') && cursor.eat_while(|c| matches!(c, '0'..='7')) > 0
}

fn scan_hex_escape(cursor: &mut Cursor<'_>) -> bool {
    cursor.eat('x') && cursor.eat_while(|c| c.is_ascii_hexdigit()) > 0
}

fn scan_decimal_escape(cursor: &mut Cursor<'_>) -> bool {
    cursor.eat_while(|c| c.is_ascii_digit()) > 0
}

/// Line continuation: whitespace then the closing backslash of a gap.
fn scan_string_gap(cursor: &mut Cursor<'_>, caps: &mut Captures) -> bool {
    if cursor.eat_while(char::is_whitespace) == 0 {
        return false;
    }
    caps.mark(cursor);
    let closed = cursor.eat('\\');
    caps.mark(cursor);
    closed
}

/// Any single character other than a newline.
fn scan_invalid_escape(cursor: &mut Cursor<'_>) -> bool {
    cursor.eat_if(|c| c != '\n')
}

/// Rules of [`Mode::Escape`]. Every rule pops after one escape.
pub(super) fn escape_mode() -> Vec<Rule> {
    vec![
        Rule::scan(scan_named_escape, StringEscape).pop(),
        Rule::scan(scan_control_escape, StringEscape).pop(),
        Rule::scan(scan_octal_escape, StringEscape).pop(),
        Rule::scan(scan_hex_escape, StringEscape).pop(),
        Rule::scan(scan_decimal_escape, StringEscape).pop(),
        Rule::groups(scan_string_gap, &[TokenKind::Whitespace, StringEscape]).pop(),
        Rule::scan(scan_invalid_escape, TokenKind::Error).pop(),
    ]
}
