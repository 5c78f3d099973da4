//! Comment rules.
//!
//! Line comments run from `--` to the end of the line. Block comments
//! `{- ... -}` nest: each `{-` pushes a [`Mode::Comment`] frame and each
//! `-}` pops one.

use super::rule::Rule;
use crate::cursor::Cursor;
use crate::mode::Mode;
use crate::token::TokenKind;

/// Scans `--` up to, but not including, the next newline.
pub(super) fn scan_line_comment(cursor: &mut Cursor<'_>) -> bool {
    if !cursor.eat_str("--") {
        return false;
    }
    cursor.eat_while(|c| c != '\n');
    true
}

/// Scans a run of comment text that cannot start a delimiter.
fn scan_comment_text(cursor: &mut Cursor<'_>) -> bool {
    cursor.eat_while(|c| !matches!(c, '-' | '{' | '}')) > 0
}

/// Scans one delimiter character that did not form `{-` or `-}`.
fn scan_comment_delimiter(cursor: &mut Cursor<'_>) -> bool {
    cursor.eat_if(|c| matches!(c, '-' | '{' | '}'))
}

/// `--` comment rule.
pub(super) fn line_comment() -> Rule {
    Rule::scan(scan_line_comment, TokenKind::CommentSingle)
}

/// `{-` rule entering a block comment.
pub(super) fn block_comment_open() -> Rule {
    Rule::literal("{-", TokenKind::CommentMultiline).push(Mode::Comment)
}

/// Rules of [`Mode::Comment`].
pub(super) fn comment_mode() -> Vec<Rule> {
    vec![
        Rule::scan(scan_comment_text, TokenKind::CommentMultiline),
        block_comment_open(),
        Rule::literal("-}", TokenKind::CommentMultiline).pop(),
        Rule::scan(scan_comment_delimiter, TokenKind::CommentMultiline),
    ]
}
