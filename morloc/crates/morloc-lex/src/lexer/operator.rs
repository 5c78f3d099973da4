//! Operator and punctuation rules.

use super::pattern::at_pattern_dot;
use super::rule::Rule;
use crate::cursor::Cursor;
use crate::mode::Mode;
use crate::token::TokenKind;
use crate::unicode::{is_operator_char, is_punctuation};

/// Scans a maximal run of operator symbols: `<-`, `::`, `=>`, `>>=`, ...
///
/// The run stops before a dot that starts a pattern selector, so `y=.name`
/// is `=` followed by a pattern access.
fn scan_operator(cursor: &mut Cursor<'_>) -> bool {
    let start = cursor.position();
    while cursor.peek().is_some_and(is_operator_char) && !at_pattern_dot(cursor) {
        cursor.advance();
    }
    cursor.position() > start
}

fn scan_punctuation(cursor: &mut Cursor<'_>) -> bool {
    cursor.eat_if(is_punctuation)
}

/// `[]` and `()` literals.
pub(super) fn unit_rules() -> Vec<Rule> {
    vec![
        Rule::literal("[]", TokenKind::KeywordType),
        Rule::literal("()", TokenKind::NameBuiltin),
    ]
}

pub(super) fn operator_rule() -> Rule {
    Rule::scan(scan_operator, TokenKind::Operator)
}

/// Any single punctuation mark.
pub(super) fn punctuation_rule() -> Rule {
    Rule::scan(scan_punctuation, TokenKind::Punctuation)
}

/// Brackets that open a nested expression run.
pub(super) fn bracket_open_rules() -> Vec<Rule> {
    vec![
        Rule::literal("(", TokenKind::Punctuation).push(Mode::Parens),
        Rule::literal("{", TokenKind::Punctuation).push(Mode::Braces),
        Rule::literal("[", TokenKind::Punctuation).push(Mode::Brackets),
    ]
}
