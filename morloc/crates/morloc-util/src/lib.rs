//! morloc-util - Shared foundation types for the Morloc toolchain
//!
//! This crate holds the pieces every other Morloc crate leans on:
//!
//! - [`span`] - byte/line/column locations and source files
//! - [`diagnostic`] - diagnostics, severity levels, codes and the
//!   [`Handler`] that collects them
//! - [`error`] - error types for the fallible utilities in this crate
//!
//! # Example
//!
//! ```
//! use morloc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unrecognized input '$'")
//!     .code(DiagnosticCode::E_LEXER_UNRECOGNIZED_INPUT)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};
