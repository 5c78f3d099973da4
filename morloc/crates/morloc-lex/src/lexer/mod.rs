//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct and the scan loop
//! - `rule` - Matchers, emits and stack actions
//! - `table` - Per-mode rule lists, built once per process
//! - `identifier` - Keywords, declaration headers and identifiers
//! - `number` - Numeric literals
//! - `string` - Strings, escapes and interpolation
//! - `operator` - Operators and punctuation
//! - `comment` - Line and nested block comments
//! - `pattern` - Pattern access selectors

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod pattern;
mod rule;
mod string;
mod table;

pub use self::core::Lexer;
pub use identifier::KEYWORDS;
pub use rule::{eat_word, Action, Captures, Emit, GroupFn, Matcher, PeekFn, Rule, ScanFn};
pub use table::RuleTable;
