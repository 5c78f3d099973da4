//! Check command implementation.
//!
//! Lexes every input file on a rayon pool and reports diagnostics. A file
//! fails when it contains unrecognized input, or when it leaves modes open
//! and `fail_on_unclosed` is set.

use std::path::{Path, PathBuf};
use std::time::Instant;

use morloc_lex::metadata::matches_filename;
use morloc_lex::{Lexer, LexerConfig};
use morloc_util::{Handler, SourceFile};
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, warn};

use crate::commands::common::{read_source, render_diagnostics};
use crate::config::{CheckConfig, Config};
use crate::error::{MorlexError, Result};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Enable verbose output.
    pub verbose: bool,
    /// Files to check.
    pub files: Vec<PathBuf>,
    /// Number of parallel jobs.
    pub jobs: Option<u32>,
}

/// Outcome of lexing one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    /// The checked file.
    pub path: PathBuf,
    /// Number of tokens produced.
    pub tokens: usize,
    /// Unrecognized-input errors.
    pub errors: usize,
    /// Unclosed-mode warnings.
    pub warnings: usize,
    /// Rendered diagnostics, in source order.
    pub rendered: Vec<String>,
}

impl FileReport {
    /// Whether this file counts as a failure.
    pub fn failed(&self, fail_on_unclosed: bool) -> bool {
        self.errors > 0 || (fail_on_unclosed && self.warnings > 0)
    }
}

/// Check command handler.
pub struct CheckCommand {
    args: CheckArgs,
    config: Config,
}

impl CheckCommand {
    /// Create a new CheckCommand.
    pub fn new(args: CheckArgs, config: Config) -> Self {
        Self { args, config }
    }

    /// Execute the command.
    pub fn run(&self) -> Result<()> {
        let start_time = Instant::now();
        let check_config = self.get_check_config();
        let reports = self.check_files(&check_config)?;

        let mut failed = 0;
        for report in &reports {
            for diagnostic in &report.rendered {
                eprint!("{}", diagnostic);
            }
            if report.failed(check_config.fail_on_unclosed) {
                failed += 1;
            } else if self.args.verbose {
                eprintln!("ok: {} ({} tokens)", report.path.display(), report.tokens);
            }
        }

        if self.args.verbose {
            eprintln!(
                "Checked {} file(s) in {:.2}s",
                reports.len(),
                start_time.elapsed().as_secs_f64()
            );
        }

        if failed > 0 {
            return Err(MorlexError::LexFailed(failed));
        }
        Ok(())
    }

    /// Get the effective check configuration.
    pub fn get_check_config(&self) -> CheckConfig {
        let mut config = self.config.check.clone();
        if let Some(jobs) = self.args.jobs {
            config.jobs = jobs;
        }
        config
    }

    /// Lex all files in parallel; reports come back in argument order.
    pub fn check_files(&self, config: &CheckConfig) -> Result<Vec<FileReport>> {
        if self.args.files.is_empty() {
            return Err(MorlexError::Validation("No input files specified".to_string()));
        }
        if config.jobs == 0 {
            return Err(MorlexError::Validation(
                "Number of jobs must be at least 1".to_string(),
            ));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(config.jobs as usize)
            .build()
            .map_err(|e| MorlexError::Config(format!("Failed to start worker pool: {}", e)))?;
        debug!(jobs = config.jobs, files = self.args.files.len(), "checking");

        let lexer_config = self.config.lexer_config();
        pool.install(|| {
            self.args
                .files
                .par_iter()
                .map(|path| check_file(path, lexer_config))
                .collect()
        })
    }
}

/// Lex one file and collect its diagnostics.
pub fn check_file(path: &Path, config: LexerConfig) -> Result<FileReport> {
    if !matches_filename(path) {
        warn!(file = %path.display(), "file name does not look like Morloc source");
    }
    let source = read_source(path)?;
    let handler = Handler::new();
    let tokens = Lexer::with_config(&source, &handler, config).count();

    let errors = handler.error_count();
    let warnings = handler.warning_count();
    let file = SourceFile::new(path.display().to_string(), source.as_str());
    let rendered = render_diagnostics(&file, handler.take());
    debug!(file = %path.display(), tokens, errors, warnings, "checked");

    Ok(FileReport {
        path: path.to_path_buf(),
        tokens,
        errors,
        warnings,
        rendered,
    })
}

/// Run the check command.
pub fn run_check(args: CheckArgs, config: Config) -> Result<()> {
    CheckCommand::new(args, config).run()
}
