//! Character classes used by the Morloc rule table.
//!
//! Identifier classes are Unicode-aware: the case of the first letter decides
//! between value names and type/constructor names, as in the language itself.

/// Checks if a character can start a value-level name.
///
/// ```
/// use morloc_lex::unicode::is_lower_start;
///
/// assert!(is_lower_start('f'));
/// assert!(is_lower_start('λ'));
/// assert!(!is_lower_start('F'));
/// assert!(!is_lower_start('_'));
/// ```
pub fn is_lower_start(c: char) -> bool {
    c.is_lowercase()
}

/// Checks if a character can start a type or constructor name.
pub fn is_upper_start(c: char) -> bool {
    c.is_uppercase()
}

/// Checks if a character is a word character (`\w`): a letter, digit or `_`.
pub fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Checks if a character may continue an identifier.
///
/// Morloc names may carry primes (`f'`, `go''`).
///
/// ```
/// use morloc_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('x'));
/// assert!(is_ident_continue('9'));
/// assert!(is_ident_continue('\''));
/// assert!(!is_ident_continue('.'));
/// ```
pub fn is_ident_continue(c: char) -> bool {
    c == '\'' || is_word_char(c)
}

/// Checks if a character belongs to an operator symbol run.
///
/// The same class follows `'` in promoted type operators such as `':`.
pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '!' | '#' | '$' | '%' | '&' | '*' | '+' | '.' | '/' | '<' | '=' | '>' | '?' | '@' | '\\'
            | '^' | '|' | '~' | ':' | '-'
    )
}

/// Checks if a character is a valid digit in the given numeric base.
///
/// ```
/// use morloc_lex::unicode::is_digit_in_base;
///
/// assert!(is_digit_in_base('1', 2));
/// assert!(!is_digit_in_base('2', 2));
/// assert!(is_digit_in_base('7', 8));
/// assert!(is_digit_in_base('F', 16));
/// ```
pub fn is_digit_in_base(c: char, base: u32) -> bool {
    match base {
        2 => matches!(c, '0' | '1'),
        8 => matches!(c, '0'..='7'),
        10 => c.is_ascii_digit(),
        16 => c.is_ascii_hexdigit(),
        _ => c.is_digit(base),
    }
}

/// Checks if a character is one of the punctuation marks of the root mode.
pub fn is_punctuation(c: char) -> bool {
    matches!(c, '[' | ']' | '(' | ')' | ',' | ';' | '`' | '{' | '}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_and_lower_are_disjoint_for_letters() {
        for c in ['a', 'Z', 'é', 'Σ', 'ж'] {
            assert_ne!(is_lower_start(c), is_upper_start(c), "{c}");
        }
    }

    #[test]
    fn test_word_char_excludes_prime() {
        assert!(!is_word_char('\''));
        assert!(is_word_char('_'));
        assert!(is_word_char('٣'));
    }

    #[test]
    fn test_operator_chars() {
        for c in "<-::->=>=\\@+*".chars() {
            assert!(is_operator_char(c), "{c}");
        }
        assert!(!is_operator_char('_'));
        assert!(!is_operator_char('('));
        assert!(!is_operator_char('"'));
    }

    #[test]
    fn test_punctuation() {
        for c in "[](),;`{}".chars() {
            assert!(is_punctuation(c));
        }
        assert!(!is_punctuation('.'));
    }
}
