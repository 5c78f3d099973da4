//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! Diagnostics are built with [`DiagnosticBuilder`] and collected by a
//! [`Handler`]. Nothing in the lexer ever fails outright; it records what it
//! could not make sense of here and keeps going.
//!
//! # Examples
//!
//! ```
//! use morloc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use morloc_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("mode stack not empty at EOF")
//!     .code(DiagnosticCode::W_LEXER_UNCLOSED_MODE)
//!     .span(Span::point(12, 2, 1))
//!     .emit(&handler);
//!
//! assert!(!handler.has_errors());
//! assert_eq!(handler.warning_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::span::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Additional information about a diagnostic
    Note,
    /// A suspicious construct that does not stop processing
    Warning,
    /// Input that could not be recognized
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions
    pub helps: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Render the diagnostic for terminal output
    ///
    /// `origin` names the file; it is printed ahead of the line and column.
    pub fn render(&self, origin: &str) -> String {
        let mut out = match self.code {
            Some(code) => format!("{}[{}]: {}\n", self.level, code, self.message),
            None => format!("{}: {}\n", self.level, self.message),
        };
        out.push_str(&format!(
            "  --> {}:{}:{}\n",
            origin, self.span.line, self.span.column
        ));
        for snippet in &self.snippets {
            out.push_str(&snippet.format());
            out.push('\n');
        }
        for note in &self.notes {
            out.push_str(&format!("  = note: {}\n", note));
        }
        for help in &self.helps {
            out.push_str(&format!("  = help: {}\n", help));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message),
            None => write!(f, "{}: {}", self.level, self.message),
        }
    }
}

/// Collects diagnostics for one session
///
/// The handler uses interior mutability so it can be shared by reference
/// with the lexer while the caller still holds it.
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Get a copy of all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Take all diagnostics, leaving the handler empty
    pub fn take(&self) -> Vec<Diagnostic> {
        self.diagnostics.take()
    }
}
