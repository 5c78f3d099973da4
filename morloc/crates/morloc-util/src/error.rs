//! Core error types for morloc-util.

use thiserror::Error;

/// Error type for source map operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// Invalid span range
    #[error("Invalid span: start {start} > end {end}")]
    InvalidSpan {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },

    /// Span out of bounds for file
    #[error("Span out of bounds: file has {file_len} bytes, span is {span_start}..{span_end}")]
    SpanOutOfBounds {
        /// Length of the file in bytes
        file_len: usize,
        /// Requested start offset
        span_start: usize,
        /// Requested end offset
        span_end: usize,
    },

    /// Range does not fall on UTF-8 character boundaries
    #[error("Span {start}..{end} is not on character boundaries")]
    NotCharBoundary {
        /// Start byte offset
        start: usize,
        /// End byte offset
        end: usize,
    },
}

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
