//! Numeric literal rules.
//!
//! Each literal shape is its own rule, tried from most to least specific so
//! the longest reading wins: hexadecimal floats, decimal floats, then the
//! radix-prefixed integers, then plain decimal integers. Digit runs accept
//! `_` separators between digits (`1_000`, `0x_ff`), never at the end.

use super::rule::Rule;
use crate::cursor::Cursor;
use crate::token::{NumberKind, TokenKind};
use crate::unicode::is_digit_in_base;

/// Scans `d(_*d)*` for digits `d` of `base`.
///
/// Trailing underscores are left unconsumed.
fn digit_run(cursor: &mut Cursor<'_>, base: u32) -> bool {
    if !cursor.eat_if(|c| is_digit_in_base(c, base)) {
        return false;
    }
    loop {
        let snapshot = cursor.snapshot();
        cursor.eat_while(|c| c == '_');
        if !cursor.eat_if(|c| is_digit_in_base(c, base)) {
            cursor.restore(snapshot);
            return true;
        }
    }
}

/// Scans `0` followed by `marker` in either case and optional underscores.
fn radix_prefix(cursor: &mut Cursor<'_>, marker: char) -> bool {
    if !cursor.eat('0') || !cursor.eat_if(|c| c.eq_ignore_ascii_case(&marker)) {
        return false;
    }
    cursor.eat_while(|c| c == '_');
    true
}

/// Scans `_*[mM][+-]?d(_*d)*`, restoring the cursor when it does not match.
fn exponent(cursor: &mut Cursor<'_>, marker: char) -> bool {
    let snapshot = cursor.snapshot();
    cursor.eat_while(|c| c == '_');
    if cursor.eat_if(|c| c.eq_ignore_ascii_case(&marker)) {
        cursor.eat_if(|c| c == '+' || c == '-');
        if digit_run(cursor, 10) {
            return true;
        }
    }
    cursor.restore(snapshot);
    false
}

/// `0x1p4`, `0xA_Bp-2`
fn scan_hex_float_exponent(cursor: &mut Cursor<'_>) -> bool {
    radix_prefix(cursor, 'x') && digit_run(cursor, 16) && exponent(cursor, 'p')
}

/// `0x1.8`, `0x1.8p3`
fn scan_hex_float_fraction(cursor: &mut Cursor<'_>) -> bool {
    if !(radix_prefix(cursor, 'x') && digit_run(cursor, 16) && cursor.eat('.')) {
        return false;
    }
    if !digit_run(cursor, 16) {
        return false;
    }
    exponent(cursor, 'p');
    true
}

/// `1e10`, `2_5E-3`
fn scan_decimal_exponent(cursor: &mut Cursor<'_>) -> bool {
    digit_run(cursor, 10) && exponent(cursor, 'e')
}

/// `3.14`, `1.0e-3`
fn scan_decimal_fraction(cursor: &mut Cursor<'_>) -> bool {
    if !(digit_run(cursor, 10) && cursor.eat('.') && digit_run(cursor, 10)) {
        return false;
    }
    exponent(cursor, 'e');
    true
}

fn scan_binary(cursor: &mut Cursor<'_>) -> bool {
    radix_prefix(cursor, 'b') && digit_run(cursor, 2)
}

fn scan_octal(cursor: &mut Cursor<'_>) -> bool {
    radix_prefix(cursor, 'o') && digit_run(cursor, 8)
}

fn scan_hex(cursor: &mut Cursor<'_>) -> bool {
    radix_prefix(cursor, 'x') && digit_run(cursor, 16)
}

fn scan_integer(cursor: &mut Cursor<'_>) -> bool {
    digit_run(cursor, 10)
}

/// Scans a bare run of decimal digits, as used for tuple indices.
pub(super) fn scan_index(cursor: &mut Cursor<'_>) -> bool {
    cursor.eat_while(|c| c.is_ascii_digit()) > 0
}

/// Numeric literal rules in precedence order.
pub(super) fn number_rules() -> Vec<Rule> {
    use NumberKind::*;

    vec![
        Rule::scan(scan_hex_float_exponent, TokenKind::Number(Float)),
        Rule::scan(scan_hex_float_fraction, TokenKind::Number(Float)),
        Rule::scan(scan_decimal_exponent, TokenKind::Number(Float)),
        Rule::scan(scan_decimal_fraction, TokenKind::Number(Float)),
        Rule::scan(scan_binary, TokenKind::Number(Bin)),
        Rule::scan(scan_octal, TokenKind::Number(Oct)),
        Rule::scan(scan_hex, TokenKind::Number(Hex)),
        Rule::scan(scan_integer, TokenKind::Number(Integer)),
    ]
}
