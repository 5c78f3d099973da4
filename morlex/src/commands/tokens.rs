//! Tokens command implementation.
//!
//! Dumps the token stream of one file as text or JSON, or a per-kind
//! summary with `--stats`.

use std::path::PathBuf;

use indexmap::IndexMap;
use morloc_lex::{Lexer, Token, TokenKind};
use morloc_util::{Handler, SourceFile};
use serde::Serialize;
use tracing::debug;

use crate::commands::common::{read_source, render_diagnostics, TokenFormat};
use crate::config::{Config, TokensConfig};
use crate::error::{MorlexError, Result};

/// Arguments for the tokens command.
#[derive(Debug, Clone, Default)]
pub struct TokensArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// File to tokenize.
    pub file: PathBuf,
    /// Output format override.
    pub format: Option<String>,
    /// Leave whitespace tokens out.
    pub skip_whitespace: bool,
    /// Print token counts per kind instead of the tokens.
    pub stats: bool,
}

/// One token as written by `--format json`.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    text: &'a str,
    start: usize,
    end: usize,
    line: u32,
    column: u32,
}

impl<'a> From<&Token<'a>> for TokenRecord<'a> {
    fn from(token: &Token<'a>) -> Self {
        Self {
            kind: token.kind.path(),
            text: token.text,
            start: token.start(),
            end: token.end(),
            line: token.span.line,
            column: token.span.column,
        }
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
    config: Config,
}

impl TokensCommand {
    /// Create a new TokensCommand.
    pub fn new(args: TokensArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let source = read_source(&self.args.file)?;
        let handler = Handler::new();
        let output = self.render(&source, &handler)?;
        print!("{}", output);

        let file = SourceFile::new(self.args.file.display().to_string(), source.as_str());
        let diagnostics = render_diagnostics(&file, handler.take());
        for diagnostic in &diagnostics {
            eprint!("{}", diagnostic);
        }
        if self.args.verbose {
            eprintln!(
                "{}: {} diagnostic(s)",
                self.args.file.display(),
                diagnostics.len()
            );
        }
        Ok(())
    }

    /// Get the effective tokens configuration.
    pub fn get_tokens_config(&self) -> TokensConfig {
        let mut config = self.config.tokens.clone();
        if let Some(ref format) = self.args.format {
            config.format = format.clone();
        }
        config.skip_whitespace |= self.args.skip_whitespace;
        config
    }

    /// Lex `source` and format the result.
    pub fn render(&self, source: &str, handler: &Handler) -> Result<String> {
        let config = self.get_tokens_config();
        let format = TokenFormat::parse(&config.format)
            .ok_or_else(|| MorlexError::Validation(format!("Unknown format: {}", config.format)))?;

        let tokens: Vec<Token<'_>> =
            Lexer::with_config(source, handler, self.config.lexer_config())
                .filter(|token| !(config.skip_whitespace && token.kind == TokenKind::Whitespace))
                .collect();
        debug!(
            file = %self.args.file.display(),
            tokens = tokens.len(),
            "tokenized"
        );

        if self.args.stats {
            return Ok(format_stats(&tokens));
        }
        match format {
            TokenFormat::Text => Ok(tokens.iter().map(|t| format_token(t) + "\n").collect()),
            TokenFormat::Json => {
                let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
                Ok(serde_json::to_string_pretty(&records)? + "\n")
            },
        }
    }
}

/// `line:column  Kind.Path  "text"`
fn format_token(token: &Token<'_>) -> String {
    format!(
        "{}:{}\t{}\t{:?}",
        token.span.line,
        token.span.column,
        token.kind.path(),
        token.text
    )
}

/// Counts per kind path, in order of first appearance.
fn format_stats(tokens: &[Token<'_>]) -> String {
    let mut counts: IndexMap<&'static str, usize> = IndexMap::new();
    for token in tokens {
        *counts.entry(token.kind.path()).or_insert(0) += 1;
    }
    let width = counts.keys().map(|k| k.len()).max().unwrap_or(0);
    let mut out: String = counts
        .iter()
        .map(|(kind, count)| format!("{:<width$}  {}\n", kind, count))
        .collect();
    out.push_str(&format!("{:<width$}  {}\n", "total", tokens.len()));
    out
}

/// Run the tokens command.
pub fn run_tokens(args: TokensArgs, config: Config) -> Result<()> {
    TokensCommand::new(args, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(args: TokensArgs, source: &str) -> String {
        let handler = Handler::new();
        TokensCommand::new(args, Config::default())
            .render(source, &handler)
            .unwrap()
    }

    #[test]
    fn test_tokens_args_default() {
        let args = TokensArgs::default();
        assert!(!args.verbose);
        assert!(args.format.is_none());
        assert!(!args.skip_whitespace);
        assert!(!args.stats);
    }

    #[test]
    fn test_text_output() {
        let out = render(TokensArgs::default(), "module foo.bar");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "1:1\tKeyword.Reserved\t\"module\"",
                "1:7\tText.Whitespace\t\" \"",
                "1:8\tName\t\"foo.bar\"",
            ]
        );
    }

    #[test]
    fn test_text_output_escapes_newlines() {
        let out = render(TokensArgs::default(), "x\n");
        assert!(out.contains("Text.Whitespace\t\"\\n\""));
    }

    #[test]
    fn test_skip_whitespace() {
        let args = TokensArgs {
            skip_whitespace: true,
            ..TokensArgs::default()
        };
        let out = render(args, "x = 1 -- one");
        assert!(!out.contains("Whitespace"));
        assert!(out.contains("Comment.Single"));
    }

    #[test]
    fn test_json_output() {
        let args = TokensArgs {
            format: Some("json".to_string()),
            ..TokensArgs::default()
        };
        let out = render(args, "3.0");
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["kind"], "Literal.Number.Float");
        assert_eq!(value[0]["text"], "3.0");
        assert_eq!(value[0]["end"], 3);
        assert_eq!(value[0]["line"], 1);
    }

    #[test]
    fn test_unknown_format() {
        let args = TokensArgs {
            format: Some("xml".to_string()),
            ..TokensArgs::default()
        };
        let handler = Handler::new();
        let result = TokensCommand::new(args, Config::default()).render("x", &handler);
        assert!(matches!(result, Err(MorlexError::Validation(_))));
    }

    #[test]
    fn test_stats_keep_first_seen_order() {
        let args = TokensArgs {
            stats: true,
            ..TokensArgs::default()
        };
        let out = render(args, "f x y");
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Name "));
        assert!(lines[0].ends_with(" 3"));
        assert!(lines[1].starts_with("Text.Whitespace"));
        assert!(lines[1].ends_with(" 2"));
        assert!(lines[2].starts_with("total"));
        assert!(lines[2].ends_with(" 5"));
    }

    #[test]
    fn test_config_supplies_defaults() {
        let mut config = Config::default();
        config.tokens.format = "json".to_string();
        config.tokens.skip_whitespace = true;
        let command = TokensCommand::new(TokensArgs::default(), config);

        let effective = command.get_tokens_config();
        assert_eq!(effective.format, "json");
        assert!(effective.skip_whitespace);
    }

    #[test]
    fn test_args_override_config() {
        let mut config = Config::default();
        config.tokens.format = "json".to_string();
        let args = TokensArgs {
            format: Some("text".to_string()),
            ..TokensArgs::default()
        };
        let command = TokensCommand::new(args, config);
        assert_eq!(command.get_tokens_config().format, "text");
    }
}
