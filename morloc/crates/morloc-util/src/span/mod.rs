//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! byte offsets plus the line/column where a range begins.
//!
//! # Examples
//!
//! ```
//! use morloc_util::span::Span;
//!
//! let span = Span::new(10, 20, 1, 11);
//! assert_eq!(span.end - span.start, 10);
//! ```

mod source_map;

pub use source_map::SourceFile;

/// Source location span
///
/// A `Span` covers the half-open byte range `start..end` and records the
/// 1-based line and column where that range begins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number of `start` (1-based)
    pub line: u32,
    /// Column number of `start` (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Placeholder span for diagnostics that have no location
    ///
    /// # Examples
    ///
    /// ```
    /// use morloc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use morloc_util::span::Span;
    ///
    /// let point = Span::point(7, 2, 3);
    /// assert_eq!(point.start, 7);
    /// assert_eq!(point.end, 7);
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }
}
