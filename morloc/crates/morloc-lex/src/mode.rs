//! Lexer modes and the mode stack.
//!
//! The active mode decides which rules apply at the cursor. Nested
//! constructs (block comments, strings inside interpolations, pattern
//! groups) push a mode on entry and pop it on exit.

use std::fmt;

/// A lexing context. Pure data; the rules for each mode live in the
/// [`RuleTable`](crate::lexer::RuleTable).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Top-level declarations and expressions
    Root,
    /// Inside a `{- ... -}` block comment
    Comment,
    /// After the `module` keyword
    Module,
    /// Inside a `"..."` string
    String,
    /// Inside a `"""..."""` string
    MultilineString,
    /// Just after a backslash inside a string
    Escape,
    /// Inside a `#{ ... }` interpolation
    Interpolation,
    /// Inside the parenthesized list of a `source` declaration
    SourceList,
    /// Inside the parenthesized list of an `import` declaration
    ImportList,
    /// After a pattern-access dot
    Pattern,
    /// Inside `.( ... )`
    PatternGroup,
    /// After `=` inside a pattern group
    PatternValue,
    /// A `( ... )` run inside an expression
    Parens,
    /// A `{ ... }` run inside an expression
    Braces,
    /// A `[ ... ]` run inside an expression
    Brackets,
}

impl Mode {
    /// Number of modes.
    pub const COUNT: usize = 15;

    /// Every mode, in table order.
    pub const ALL: [Mode; Mode::COUNT] = [
        Mode::Root,
        Mode::Comment,
        Mode::Module,
        Mode::String,
        Mode::MultilineString,
        Mode::Escape,
        Mode::Interpolation,
        Mode::SourceList,
        Mode::ImportList,
        Mode::Pattern,
        Mode::PatternGroup,
        Mode::PatternValue,
        Mode::Parens,
        Mode::Braces,
        Mode::Brackets,
    ];

    /// Index of this mode into per-mode tables.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Snake-case name, as shown in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Mode::Root => "root",
            Mode::Comment => "comment",
            Mode::Module => "module",
            Mode::String => "string",
            Mode::MultilineString => "multiline_string",
            Mode::Escape => "escape",
            Mode::Interpolation => "interpolation",
            Mode::SourceList => "sourcelist",
            Mode::ImportList => "import_list",
            Mode::Pattern => "pattern",
            Mode::PatternGroup => "pattern_group",
            Mode::PatternValue => "pattern_value",
            Mode::Parens => "parens",
            Mode::Braces => "braces",
            Mode::Brackets => "brackets",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stack of active modes. Never empty: the bottom frame is always
/// [`Mode::Root`].
///
/// ```
/// use morloc_lex::{Mode, ModeStack};
///
/// let mut stack = ModeStack::new();
/// stack.push(Mode::Comment);
/// stack.push(Mode::Comment);
/// assert_eq!(stack.depth(), 3);
/// assert!(stack.pop());
/// assert!(stack.pop());
/// assert!(!stack.pop());
/// assert_eq!(stack.top(), Mode::Root);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeStack {
    frames: Vec<Mode>,
}

impl ModeStack {
    /// Creates a stack holding only the root mode.
    pub fn new() -> Self {
        Self {
            frames: vec![Mode::Root],
        }
    }

    /// Returns the active mode.
    #[inline]
    pub fn top(&self) -> Mode {
        self.frames.last().copied().unwrap_or(Mode::Root)
    }

    /// Pushes a mode.
    pub fn push(&mut self, mode: Mode) {
        self.frames.push(mode);
    }

    /// Pops the active mode. Returns false, leaving the stack unchanged,
    /// when only the root frame is left.
    pub fn pop(&mut self) -> bool {
        if self.frames.len() > 1 {
            self.frames.pop();
            true
        } else {
            false
        }
    }

    /// Replaces the active mode. Replacing the root frame pushes instead.
    pub fn replace(&mut self, mode: Mode) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
        self.frames.push(mode);
    }

    /// Number of frames, root included.
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if only the root frame is left.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.frames.len() == 1
    }

    /// Drops every frame above root.
    pub fn reset(&mut self) {
        self.frames.truncate(1);
    }

    /// Frames from bottom (root) to top.
    pub fn as_slice(&self) -> &[Mode] {
        &self.frames
    }
}

impl Default for ModeStack {
    fn default() -> Self {
        Self::new()
    }
}
