//! Token definitions for the Morloc lexer.
//!
//! A [`Token`] is a classified slice of the source. Kinds follow the naming
//! used by syntax highlighters (`Keyword`, `Literal.Number.Float`, ...) so a
//! consumer can map them onto a colour scheme without a translation table.

use std::fmt;

use morloc_util::Span;

/// Flavour of a numeric literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NumberKind {
    /// Decimal integer: `42`, `1_000`
    Integer,
    /// Decimal or hexadecimal float: `3.14`, `1e-3`, `0x1.8p3`
    Float,
    /// Hexadecimal integer: `0xFF`
    Hex,
    /// Octal integer: `0o17`
    Oct,
    /// Binary integer: `0b1010`
    Bin,
}

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Unclassified text, used for the parentheses of source and import lists
    Text,
    /// Spaces, tabs and newlines
    Whitespace,
    /// Input no rule of the active mode recognized
    Error,
    /// Reserved word such as `module` or `where`
    Keyword,
    /// Type-level literal: `[]`, `'[a]`, `':`
    KeywordType,
    /// Lower-case initial name or a dotted module name
    Name,
    /// Upper-case initial name: types and constructors
    NameType,
    /// The unit value `()`
    NameBuiltin,
    /// Operator symbols and the pattern-access dot
    Operator,
    /// Brackets, commas and semicolons
    Punctuation,
    /// Numeric literal
    Number(NumberKind),
    /// String delimiters and plain string content
    String,
    /// Backslash escapes inside strings
    StringEscape,
    /// `#{` and `}` around an interpolated expression
    StringInterpol,
    /// `--` line comment
    CommentSingle,
    /// `{- ... -}` block comment text
    CommentMultiline,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 20] = [
        TokenKind::Text,
        TokenKind::Whitespace,
        TokenKind::Error,
        TokenKind::Keyword,
        TokenKind::KeywordType,
        TokenKind::Name,
        TokenKind::NameType,
        TokenKind::NameBuiltin,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::Number(NumberKind::Integer),
        TokenKind::Number(NumberKind::Float),
        TokenKind::Number(NumberKind::Hex),
        TokenKind::Number(NumberKind::Oct),
        TokenKind::Number(NumberKind::Bin),
        TokenKind::String,
        TokenKind::StringEscape,
        TokenKind::StringInterpol,
        TokenKind::CommentSingle,
        TokenKind::CommentMultiline,
    ];

    /// Dotted highlighter path of this kind.
    ///
    /// ```
    /// use morloc_lex::{NumberKind, TokenKind};
    ///
    /// assert_eq!(TokenKind::Number(NumberKind::Hex).path(), "Literal.Number.Hex");
    /// assert_eq!(TokenKind::CommentMultiline.path(), "Comment.Multiline");
    /// ```
    pub fn path(self) -> &'static str {
        match self {
            TokenKind::Text => "Text",
            TokenKind::Whitespace => "Text.Whitespace",
            TokenKind::Error => "Error",
            TokenKind::Keyword => "Keyword.Reserved",
            TokenKind::KeywordType => "Keyword.Type",
            TokenKind::Name => "Name",
            TokenKind::NameType => "Name.Class",
            TokenKind::NameBuiltin => "Name.Builtin",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::Number(NumberKind::Integer) => "Literal.Number.Integer",
            TokenKind::Number(NumberKind::Float) => "Literal.Number.Float",
            TokenKind::Number(NumberKind::Hex) => "Literal.Number.Hex",
            TokenKind::Number(NumberKind::Oct) => "Literal.Number.Oct",
            TokenKind::Number(NumberKind::Bin) => "Literal.Number.Bin",
            TokenKind::String => "Literal.String",
            TokenKind::StringEscape => "Literal.String.Escape",
            TokenKind::StringInterpol => "Literal.String.Interpol",
            TokenKind::CommentSingle => "Comment.Single",
            TokenKind::CommentMultiline => "Comment.Multiline",
        }
    }

    /// Returns true for both comment kinds.
    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::CommentSingle | TokenKind::CommentMultiline)
    }

    /// Returns true for string content, escapes and interpolation markers.
    pub fn is_string(self) -> bool {
        matches!(
            self,
            TokenKind::String | TokenKind::StringEscape | TokenKind::StringInterpol
        )
    }

    /// Returns true for any numeric literal.
    pub fn is_number(self) -> bool {
        matches!(self, TokenKind::Number(_))
    }

    /// Returns true for kinds a parser would skip.
    pub fn is_trivia(self) -> bool {
        self == TokenKind::Whitespace || self.is_comment()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A classified, located fragment of source text.
///
/// Tokens borrow their text from the source; `span` records the byte range
/// and the line/column the token starts at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Classification of the token
    pub kind: TokenKind,
    /// Source text covered by the token, never empty
    pub text: &'a str,
    /// Location of the token
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Byte offset of the first character.
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    /// Byte offset one past the last character.
    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
