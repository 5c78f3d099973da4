//! Common types and utilities for morlex commands.

use std::path::Path;

use morloc_util::{Diagnostic, SourceFile};

use crate::error::{MorlexError, Result};

// ============================================================================
// Token Output Format
// ============================================================================

/// Output formats of the `tokens` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFormat {
    /// One token per line: position, kind path, quoted text.
    Text,
    /// A JSON array of token records.
    Json,
}

impl TokenFormat {
    /// Parse a format name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

// ============================================================================
// Input
// ============================================================================

/// Read a source file, rejecting missing paths and directories up front.
pub fn read_source(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(MorlexError::Validation(format!(
            "Input path does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(MorlexError::Validation(format!(
            "Input path is not a file: {}",
            path.display()
        )));
    }
    std::fs::read_to_string(path)
        .map_err(|e| MorlexError::FileOperation(format!("{}: {}", path.display(), e)))
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Render diagnostics against their source file, with the offending line
/// underlined.
pub fn render_diagnostics(file: &SourceFile, diagnostics: Vec<Diagnostic>) -> Vec<String> {
    diagnostics
        .into_iter()
        .map(|mut diagnostic| {
            if let Some(snippet) = file.snippet(diagnostic.span) {
                diagnostic.snippets.push(snippet);
            }
            diagnostic.render(file.name())
        })
        .collect()
}
