//! Source files.
//!
//! [`SourceFile`] precomputes line starts so diagnostics can be rendered with
//! the offending source line underneath them.

use std::sync::Arc;

use super::Span;
use crate::diagnostic::SourceSnippet;
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use morloc_util::span::SourceFile;
///
/// let file = SourceFile::new("main.mlc", "module main\n");
/// assert_eq!(file.name(), "main.mlc");
/// assert_eq!(file.line_at(1), Some("module main"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    name: String,
    content: Arc<str>,
    /// Byte offset where each line starts
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .char_indices()
                .filter(|&(_, ch)| ch == '\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Get a specific source line (1-indexed) without its line terminator
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Extract a substring from the file content with bounds checking
    ///
    /// # Examples
    ///
    /// ```
    /// use morloc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.mlc", "import math");
    /// assert_eq!(file.extract_range(0, 6).unwrap(), "import");
    /// assert!(file.extract_range(6, 0).is_err());
    /// ```
    pub fn extract_range(&self, start: usize, end: usize) -> SourceMapResult<&str> {
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        if !self.content.is_char_boundary(start) || !self.content.is_char_boundary(end) {
            return Err(SourceMapError::NotCharBoundary { start, end });
        }

        Ok(&self.content[start..end])
    }

    /// Build a display snippet underlining `span`
    ///
    /// Spans that run past the end of their first line are underlined up to
    /// the end of that line. Returns `None` if the span's line is not part of
    /// this file.
    pub fn snippet(&self, span: Span) -> Option<SourceSnippet> {
        let line_number = span.line as usize;
        let line = self.line_at(line_number)?;
        let start_column = span.column as usize;

        let line_end = self
            .line_start(line_number)
            .unwrap_or(self.content.len())
            .min(span.end);
        let width = self
            .extract_range(span.start.min(line_end), line_end)
            .map(|text| text.trim_end_matches(['\n', '\r']).chars().count())
            .unwrap_or(0);

        Some(SourceSnippet::new(
            line,
            line_number,
            start_column,
            start_column + width,
            None::<String>,
        ))
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("line_count", &self.line_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_count() {
        let file = SourceFile::new("a.mlc", "one\ntwo\nthree");
        assert_eq!(file.line_count(), 3);
        assert_eq!(file.line_start(2), Some(8));
        assert_eq!(file.line_start(3), None);
    }

    #[test]
    fn test_line_at_strips_crlf() {
        let file = SourceFile::new("a.mlc", "one\r\ntwo");
        assert_eq!(file.line_at(1), Some("one"));
        assert_eq!(file.line_at(2), Some("two"));
        assert_eq!(file.line_at(0), None);
        assert_eq!(file.line_at(3), None);
    }

    #[test]
    fn test_extract_range_char_boundary() {
        let file = SourceFile::new("a.mlc", "λx");
        assert_eq!(
            file.extract_range(1, 2),
            Err(SourceMapError::NotCharBoundary { start: 1, end: 2 })
        );
        assert_eq!(file.extract_range(0, 2), Ok("λ"));
    }

    #[test]
    fn test_snippet_underlines_span() {
        let file = SourceFile::new("a.mlc", "x = $ 1\n");
        let snippet = file.snippet(Span::new(4, 5, 1, 5)).unwrap();
        assert_eq!(snippet.line, "x = $ 1");
        assert_eq!(snippet.start_column, 5);
        assert_eq!(snippet.end_column, 6);
    }

    #[test]
    fn test_snippet_clamps_to_first_line() {
        let file = SourceFile::new("a.mlc", "{- open\ncomment");
        let snippet = file.snippet(Span::new(0, 15, 1, 1)).unwrap();
        assert_eq!(snippet.end_column, 8);
    }
}
