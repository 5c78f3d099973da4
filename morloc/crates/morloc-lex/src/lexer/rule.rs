//! Rule model: what a rule matches, what it emits, and how it moves the
//! mode stack.
//!
//! Matchers are plain functions over a copy of the lexer's [`Cursor`]. A
//! matcher advances its copy as far as its pattern reaches and reports
//! success; the scan loop reads the copy's position back as the match end.
//! A failed matcher leaves the real cursor untouched.

use crate::cursor::Cursor;
use crate::mode::Mode;
use crate::token::TokenKind;
use crate::unicode::is_ident_continue;

/// Consuming scan function.
pub type ScanFn = fn(&mut Cursor<'_>) -> bool;

/// Scan function that records where each capture group ends.
pub type GroupFn = fn(&mut Cursor<'_>, &mut Captures) -> bool;

/// Non-consuming lookahead predicate.
pub type PeekFn = fn(&Cursor<'_>) -> bool;

/// End offsets of the capture groups of one match.
///
/// Group `i` spans from the end of group `i - 1` (or the match start) to
/// `ends()[i]`, so the groups partition the match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Captures {
    ends: [usize; Captures::MAX],
    len: usize,
}

impl Captures {
    /// Maximum number of groups a rule may capture.
    pub const MAX: usize = 9;

    /// Creates an empty capture set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes the current group at the cursor position.
    pub fn mark(&mut self, cursor: &Cursor<'_>) {
        debug_assert!(self.len < Self::MAX, "too many capture groups");
        if self.len < Self::MAX {
            self.ends[self.len] = cursor.position();
            self.len += 1;
        }
    }

    /// End offsets of the recorded groups.
    pub fn ends(&self) -> &[usize] {
        &self.ends[..self.len]
    }

    /// Forgets all recorded groups.
    pub fn clear(&mut self) {
        self.len = 0;
    }
}

/// How a rule recognizes text at the cursor.
#[derive(Clone, Copy)]
pub enum Matcher {
    /// Exact text.
    Literal(&'static str),
    /// A reserved word bounded by non-identifier characters on both sides.
    Word(&'static str),
    /// Any consuming pattern.
    Scan(ScanFn),
    /// A consuming pattern split into capture groups.
    Groups(GroupFn),
    /// Zero-width lookahead.
    Peek(PeekFn),
}

impl Matcher {
    /// Runs the matcher at `start` and returns the cursor at the match end.
    ///
    /// Consuming matchers that succeed without consuming anything count as
    /// no match; only [`Matcher::Peek`] may return an empty match.
    pub fn run<'a>(&self, start: Cursor<'a>, captures: &mut Captures) -> Option<Cursor<'a>> {
        let mut cursor = start;
        let matched = match *self {
            Matcher::Literal(text) => cursor.eat_str(text),
            Matcher::Word(word) => eat_word(&mut cursor, word),
            Matcher::Scan(scan) => scan(&mut cursor),
            Matcher::Groups(scan) => scan(&mut cursor, captures),
            Matcher::Peek(pred) => return pred(&cursor).then_some(cursor),
        };
        (matched && cursor.position() > start.position()).then_some(cursor)
    }

    /// Returns true for zero-width matchers.
    pub fn is_zero_width(&self) -> bool {
        matches!(self, Matcher::Peek(_))
    }
}

/// Consumes `word` if it stands as a whole word at the cursor.
///
/// ```
/// use morloc_lex::cursor::Cursor;
/// use morloc_lex::lexer::eat_word;
///
/// assert!(eat_word(&mut Cursor::new("module main"), "module"));
/// assert!(!eat_word(&mut Cursor::new("modulex"), "module"));
/// assert!(!eat_word(&mut Cursor::new("module'"), "module"));
/// ```
pub fn eat_word(cursor: &mut Cursor<'_>, word: &str) -> bool {
    if cursor.prev_char().is_some_and(is_ident_continue) {
        return false;
    }
    let snapshot = cursor.snapshot();
    if cursor.eat_str(word) && !cursor.peek().is_some_and(is_ident_continue) {
        true
    } else {
        cursor.restore(snapshot);
        false
    }
}

/// What a successful rule emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emit {
    /// One token covering the whole match.
    Token(TokenKind),
    /// One token per capture group; empty groups emit nothing.
    Groups(&'static [TokenKind]),
    /// No token (zero-width rules).
    Nothing,
}

/// Mode stack transition applied after a rule fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Keep the current mode.
    Stay,
    /// Enter a nested mode.
    Push(Mode),
    /// Return to the enclosing mode.
    Pop,
    /// Swap the current mode for another.
    Replace(Mode),
}

/// One entry of a mode's ordered rule list.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Recognizer anchored at the cursor
    pub matcher: Matcher,
    /// Tokens produced on a match
    pub emit: Emit,
    /// Stack transition applied after emitting
    pub action: Action,
}

impl Rule {
    /// Rule emitting `kind` for the whole match.
    pub const fn token(matcher: Matcher, kind: TokenKind) -> Self {
        Self {
            matcher,
            emit: Emit::Token(kind),
            action: Action::Stay,
        }
    }

    /// Rule emitting exact `text` as `kind`.
    pub const fn literal(text: &'static str, kind: TokenKind) -> Self {
        Self::token(Matcher::Literal(text), kind)
    }

    /// Rule emitting a consuming scan as `kind`.
    pub const fn scan(scan: ScanFn, kind: TokenKind) -> Self {
        Self::token(Matcher::Scan(scan), kind)
    }

    /// Rule emitting one token per capture group.
    pub const fn groups(scan: GroupFn, kinds: &'static [TokenKind]) -> Self {
        Self {
            matcher: Matcher::Groups(scan),
            emit: Emit::Groups(kinds),
            action: Action::Stay,
        }
    }

    /// Zero-width rule that pops the current mode when `pred` holds.
    ///
    /// This is the only way to build a zero-width rule, so an empty match
    /// always shrinks the stack.
    pub const fn lookahead_pop(pred: PeekFn) -> Self {
        Self {
            matcher: Matcher::Peek(pred),
            emit: Emit::Nothing,
            action: Action::Pop,
        }
    }

    /// Pushes `mode` after the rule fires.
    pub const fn push(mut self, mode: Mode) -> Self {
        self.action = Action::Push(mode);
        self
    }

    /// Pops the current mode after the rule fires.
    pub const fn pop(mut self) -> Self {
        self.action = Action::Pop;
        self
    }

    /// Replaces the current mode after the rule fires.
    pub const fn replace(mut self, mode: Mode) -> Self {
        self.action = Action::Replace(mode);
        self
    }

    /// Returns true if the rule can match without consuming input.
    pub fn is_zero_width(&self) -> bool {
        self.matcher.is_zero_width()
    }
}
