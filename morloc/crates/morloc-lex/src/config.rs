//! Lexer settings.

/// Settings for one lexing session.
///
/// ```
/// use morloc_lex::LexerConfig;
///
/// let config = LexerConfig::default();
/// assert!(config.newline_resync);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// On a newline no rule of the active mode matches, drop back to the
    /// root mode and emit the newline as whitespace instead of an error.
    pub newline_resync: bool,
}

impl LexerConfig {
    /// Sets [`LexerConfig::newline_resync`].
    pub fn newline_resync(mut self, enabled: bool) -> Self {
        self.newline_resync = enabled;
        self
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            newline_resync: true,
        }
    }
}
