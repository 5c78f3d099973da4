//! Character cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while iterating through source code characters. It handles UTF-8 encoding
//! correctly and tracks line/column information for spans.
//!
//! Rule matchers work on a copy of the lexer's cursor: they advance the copy
//! as far as their pattern reaches, and the scan loop reads the resulting
//! position back as the match length.

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use morloc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("module main");
/// assert!(cursor.eat_str("module"));
/// assert_eq!(cursor.peek(), Some(' '));
/// assert_eq!(cursor.prev_char(), Some('e'));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character at the cursor, or `None` at end of input.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        // Fast path for ASCII (most common case)
        match self.source.as_bytes().get(self.position) {
            Some(&b) if b < 128 => Some(b as char),
            Some(_) => self.remaining().chars().next(),
            None => None,
        }
    }

    /// Returns the character `n` characters ahead of the cursor.
    ///
    /// ```
    /// use morloc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("aβc");
    /// assert_eq!(cursor.peek_nth(0), Some('a'));
    /// assert_eq!(cursor.peek_nth(2), Some('c'));
    /// assert_eq!(cursor.peek_nth(3), None);
    /// ```
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Returns the character just before the cursor, or `None` at the start.
    #[inline]
    pub fn prev_char(&self) -> Option<char> {
        self.source[..self.position].chars().next_back()
    }

    /// Advances the cursor to the next character.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.peek() else {
            return;
        };
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances until the cursor reaches byte offset `target`.
    ///
    /// `target` must lie on a character boundary at or after the current
    /// position; the cursor stops at end of input otherwise.
    pub fn advance_to(&mut self, target: usize) {
        while self.position < target && !self.is_at_end() {
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// ```
    /// use morloc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.eat('='));
    /// assert!(!cursor.eat('='));
    /// assert_eq!(cursor.peek(), Some('>'));
    /// ```
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        self.eat_if(|c| c == expected)
    }

    /// Consumes the current character if it satisfies `pred`.
    #[inline]
    pub fn eat_if(&mut self, pred: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(c) if pred(c) => {
                self.advance();
                true
            },
            _ => false,
        }
    }

    /// Consumes characters while `pred` holds and returns how many were eaten.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.eat_if(&pred) {
            count += 1;
        }
        count
    }

    /// Consumes `expected` if the remaining input starts with it.
    ///
    /// On a mismatch nothing is consumed.
    pub fn eat_str(&mut self, expected: &str) -> bool {
        if self.remaining().starts_with(expected) {
            self.advance_to(self.position + expected.len());
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Creates a snapshot of the current cursor state.
    ///
    /// ```
    /// use morloc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("1_000");
    /// let snapshot = cursor.snapshot();
    /// cursor.eat_str("1_");
    /// cursor.restore(snapshot);
    /// assert_eq!(cursor.position(), 0);
    /// ```
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}
