//! morloc-lex - Lexical Analyzer for the Morloc language
//!
//! This crate turns Morloc source text into a lazy stream of classified
//! tokens for highlighters and parsers. It never rejects input: text that no
//! rule recognizes comes out as an [`TokenKind::Error`] token and is
//! reported to the [`Handler`](morloc_util::Handler).
//!
//! # Example Usage
//!
//! ```
//! use morloc_lex::{Lexer, TokenKind};
//! use morloc_util::Handler;
//!
//! let source = "x = \"a#{1+1}b\"";
//! let handler = Handler::new();
//! let mut lexer = Lexer::new(source, &handler);
//!
//! let first = lexer.next_token().unwrap();
//! assert_eq!(first.kind, TokenKind::Name);
//! assert_eq!(first.text, "x");
//!
//! let rest: String = lexer.map(|t| t.text).collect();
//! assert_eq!(rest, " = \"a#{1+1}b\"");
//! assert!(!handler.has_errors());
//! ```
//!
//! # How it works
//!
//! The lexer keeps a stack of [`Mode`]s. Each mode has an ordered list of
//! rules in the [`RuleTable`]; at each step the first rule of the active mode
//! that matches at the cursor emits its tokens and may push, pop or replace
//! a mode. Nested block comments, strings inside interpolations and pattern
//! groups are all handled by that stack, so nesting depth is bounded only by
//! memory.
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`mode`] - Lexer modes and the mode stack
//! - [`lexer`] - Rules, rule table and the scan loop
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classes
//! - [`metadata`] - Name, aliases and file globs for highlighting hosts
//!
//! # Diagnostics
//!
//! - `E1001` (`lexer_unrecognized_input`): one per `Error` token
//! - `W1001` (`lexer_unclosed_mode`): modes still open at end of input

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod lexer;
pub mod metadata;
pub mod mode;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use lexer::{Lexer, RuleTable};
pub use mode::{Mode, ModeStack};
pub use token::{NumberKind, Token, TokenKind};

use morloc_util::Handler;

/// Lexes `source` to the end and returns every token.
///
/// Diagnostics are discarded; use [`Lexer`] with a [`Handler`] to keep them.
///
/// ```
/// use morloc_lex::{tokenize, NumberKind, TokenKind};
///
/// let tokens = tokenize("3.0");
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].kind, TokenKind::Number(NumberKind::Float));
/// ```
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let handler = Handler::new();
    Lexer::new(source, &handler).collect()
}
