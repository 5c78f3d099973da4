//! Configuration module for the morlex CLI.
//!
//! This module handles loading and saving `morlex.toml` and turning it into
//! the settings each command runs with.

use dirs::{config_dir, home_dir};
use morloc_lex::LexerConfig;
use num_cpus::get as get_num_cpus;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{MorlexError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "morlex.toml";

/// Fallback worker count when the CPU count does not fit.
const DEFAULT_THREAD_COUNT: u32 = 4;

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Lexer behaviour shared by all commands.
    #[serde(default)]
    pub lexer: LexerSection,

    /// Token dump configuration.
    #[serde(default)]
    pub tokens: TokensConfig,

    /// Check configuration.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Lexer options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexerSection {
    /// Reset to the root mode on an unmatched newline.
    #[serde(default = "default_true")]
    pub newline_resync: bool,
}

/// Token dump options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokensConfig {
    /// Default output format (`text` or `json`).
    #[serde(default = "default_format")]
    pub format: String,

    /// Leave whitespace tokens out of the dump.
    #[serde(default)]
    pub skip_whitespace: bool,
}

/// Check options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Number of parallel jobs.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: u32,

    /// Treat modes left open at end of file as a failure.
    #[serde(default = "default_true")]
    pub fail_on_unclosed: bool,
}

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    "text".to_string()
}

fn default_parallel_jobs() -> u32 {
    get_num_cpus().try_into().unwrap_or(DEFAULT_THREAD_COUNT)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            lexer: LexerSection::default(),
            tokens: TokensConfig::default(),
            check: CheckConfig::default(),
        }
    }
}

impl Default for LexerSection {
    fn default() -> Self {
        Self {
            newline_resync: true,
        }
    }
}

impl Default for TokensConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            skip_whitespace: false,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
            fail_on_unclosed: true,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/morlex/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MorlexError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| MorlexError::Config(format!("Failed to parse configuration: {}", e)))
    }

    /// Save configuration to a specific path.
    #[allow(dead_code)]
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            MorlexError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Lexer settings derived from the `[lexer]` table.
    pub fn lexer_config(&self) -> LexerConfig {
        LexerConfig::default().newline_resync(self.lexer.newline_resync)
    }

    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("morlex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("morlex").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert!(config.lexer.newline_resync);
        assert_eq!(config.tokens.format, "text");
        assert!(!config.tokens.skip_whitespace);
        assert!(config.check.jobs >= 1);
        assert!(config.check.fail_on_unclosed);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE_NAME);

        let mut original = Config::default();
        original.verbose = true;
        original.lexer.newline_resync = false;
        original.tokens.format = "json".to_string();
        original.check.jobs = 2;
        original.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[tokens]\nskip_whitespace = true\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(config.tokens.skip_whitespace);
        assert_eq!(config.tokens.format, "text");
        assert!(config.check.fail_on_unclosed);
        assert!(config.lexer_config().newline_resync);
    }

    #[test]
    fn test_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[check]\njobs = \"many\"\n").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(MorlexError::Config(_))));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/morlex.toml"));
        assert!(result.is_err());
    }
}
