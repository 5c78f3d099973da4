//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and the scan loop that drives
//! the rule table.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use morloc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
use tracing::{debug, trace};

use super::rule::{Action, Captures, Emit, Rule};
use super::table::RuleTable;
use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::mode::{Mode, ModeStack};
use crate::token::{Token, TokenKind};

/// Lexer for the Morloc language.
///
/// Produces tokens lazily, one scan step at a time. Every byte of the input
/// ends up in exactly one token; text no rule recognizes becomes an
/// [`TokenKind::Error`] token and is reported to the handler.
///
/// # Example
///
/// ```
/// use morloc_lex::{Lexer, TokenKind};
/// use morloc_util::Handler;
///
/// let handler = Handler::new();
/// let kinds: Vec<_> = Lexer::new("module foo.bar", &handler)
///     .map(|t| t.kind)
///     .collect();
/// assert_eq!(kinds, [TokenKind::Keyword, TokenKind::Whitespace, TokenKind::Name]);
/// ```
pub struct Lexer<'a, 'h> {
    /// Character cursor for source traversal.
    cursor: Cursor<'a>,

    /// Collects unrecognized-input and unclosed-mode diagnostics.
    handler: &'h Handler,

    table: &'static RuleTable,

    /// Active modes; the top one selects the rules.
    modes: ModeStack,

    /// Tokens of a multi-group match not yet handed out.
    pending: VecDeque<Token<'a>>,

    config: LexerConfig,

    /// Set once end of input has been reached and checked.
    finished: bool,
}

impl<'a, 'h> Lexer<'a, 'h> {
    /// Creates a new lexer for the given source code.
    pub fn new(source: &'a str, handler: &'h Handler) -> Self {
        Self::with_config(source, handler, LexerConfig::default())
    }

    /// Creates a lexer with explicit settings.
    pub fn with_config(source: &'a str, handler: &'h Handler, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            handler,
            table: RuleTable::global(),
            modes: ModeStack::new(),
            pending: VecDeque::new(),
            config,
            finished: false,
        }
    }

    /// Returns the next token, or `None` at end of input.
    ///
    /// Zero-width rules may fire several times before a token comes out; each
    /// such step pops a mode, so the loop always terminates.
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.cursor.is_at_end() {
                self.finish();
                return None;
            }
            self.step();
        }
    }

    /// Modes still open at the cursor, from root to innermost.
    pub fn open_modes(&self) -> &[Mode] {
        self.modes.as_slice()
    }

    /// Returns the active mode.
    pub fn mode(&self) -> Mode {
        self.modes.top()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Applies the first matching rule of the active mode.
    fn step(&mut self) {
        let table = self.table;
        let mut captures = Captures::new();
        for rule in table.rules(self.modes.top()) {
            captures.clear();
            let Some(end) = rule.matcher.run(self.cursor, &mut captures) else {
                continue;
            };
            if rule.is_zero_width() {
                if self.modes.is_root() {
                    continue;
                }
            } else {
                self.emit(rule, end.position(), &captures);
            }
            self.apply(rule.action);
            return;
        }
        self.unrecognized();
    }

    fn emit(&mut self, rule: &Rule, end: usize, captures: &Captures) {
        match rule.emit {
            Emit::Token(kind) => self.push_token(kind, end),
            Emit::Groups(kinds) => {
                for (&group_end, &kind) in captures.ends().iter().zip(kinds) {
                    self.push_token(kind, group_end);
                }
                if let Some(&last) = kinds.last() {
                    self.push_token(last, end);
                }
            },
            Emit::Nothing => self.cursor.advance_to(end),
        }
    }

    /// Queues a token from the cursor up to `end` and moves the cursor there.
    /// Nothing is queued for an empty range.
    fn push_token(&mut self, kind: TokenKind, end: usize) {
        let start = self.cursor.position();
        if end <= start {
            return;
        }
        let (line, column) = (self.cursor.line(), self.cursor.column());
        self.cursor.advance_to(end);
        let token = Token::new(
            kind,
            self.cursor.slice_from(start),
            Span::new(start, end, line, column),
        );
        if kind == TokenKind::Error {
            self.report_unrecognized(&token);
        }
        self.pending.push_back(token);
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Stay => {},
            Action::Push(mode) => {
                self.modes.push(mode);
                trace!(mode = %mode, depth = self.modes.depth(), "push mode");
            },
            Action::Pop => {
                let left = self.modes.top();
                if self.modes.pop() {
                    trace!(mode = %left, depth = self.modes.depth(), "pop mode");
                }
            },
            Action::Replace(mode) => {
                self.modes.replace(mode);
                trace!(mode = %mode, depth = self.modes.depth(), "replace mode");
            },
        }
    }

    /// Handles a position no rule of the active mode matched.
    fn unrecognized(&mut self) {
        let Some(c) = self.cursor.peek() else {
            return;
        };
        let end = self.cursor.position() + c.len_utf8();
        if c == '\n' && self.config.newline_resync {
            if !self.modes.is_root() {
                debug!(
                    line = self.cursor.line(),
                    modes = ?self.modes.as_slice(),
                    "newline resync to root"
                );
                self.modes.reset();
            }
            self.push_token(TokenKind::Whitespace, end);
        } else {
            self.push_token(TokenKind::Error, end);
        }
    }

    fn report_unrecognized(&self, token: &Token<'a>) {
        debug!(
            text = token.text,
            line = token.span.line,
            column = token.span.column,
            mode = %self.modes.top(),
            "unrecognized input"
        );
        DiagnosticBuilder::error(format!(
            "unrecognized input '{}'",
            token.text.escape_debug()
        ))
        .code(DiagnosticCode::E_LEXER_UNRECOGNIZED_INPUT)
        .span(token.span)
        .note(format!("while lexing in mode `{}`", self.modes.top()))
        .emit(self.handler);
    }

    /// Runs once at end of input and reports modes left open.
    fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        if self.modes.is_root() {
            return;
        }
        let open = self
            .modes
            .as_slice()
            .iter()
            .skip(1)
            .map(|mode| mode.name())
            .collect::<Vec<_>>()
            .join(", ");
        debug!(open = %open, "mode stack not empty at EOF");
        let end = self.cursor.position();
        DiagnosticBuilder::warning("mode stack not empty at EOF")
            .code(DiagnosticCode::W_LEXER_UNCLOSED_MODE)
            .span(Span::point(end, self.cursor.line(), self.cursor.column()))
            .note(format!("open modes: {open}"))
            .emit(self.handler);
    }
}

impl<'a> Iterator for Lexer<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl FusedIterator for Lexer<'_, '_> {}
