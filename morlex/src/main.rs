//! Morlex CLI - a command-line front end for the Morloc lexer.
//!
//! Parses arguments with clap, installs a tracing subscriber, loads
//! `morlex.toml` and dispatches to the command handlers.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_info, run_tokens, CheckArgs, InfoArgs, TokensArgs};
use config::Config;
use error::{MorlexError, Result};

/// Morlex - tokenize and check Morloc source files
#[derive(Parser, Debug)]
#[command(name = "morlex")]
#[command(author = "Morloc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and check Morloc source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MORLEX_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MORLEX_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MORLEX_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the morlex CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of a file
    ///
    /// Writes one token per line (position, kind, quoted text) or a JSON
    /// array with byte offsets.
    Tokens(TokensCommand),

    /// Lex files and report diagnostics
    ///
    /// Exits non-zero if any file contains unrecognized input or, unless
    /// disabled in the configuration, leaves modes open at end of file.
    Check(CheckCommand),

    /// Print lexer metadata
    Info(InfoCommand),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// File to tokenize
    file: PathBuf,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Leave whitespace tokens out
    #[arg(short, long)]
    skip_whitespace: bool,

    /// Print token counts per kind instead of the tokens
    #[arg(long)]
    stats: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<u32>,
}

/// Arguments for the info subcommand.
#[derive(Parser, Debug)]
struct InfoCommand {
    /// Also list every token kind
    #[arg(short, long)]
    kinds: bool,

    /// Paths to test against the filename globs
    paths: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, verbose, config)
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence; otherwise `debug` when verbose, else `info`.
/// Logs go to stderr so token dumps on stdout stay clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "info" }));

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MorlexError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => {
            let tokens_args = TokensArgs {
                verbose,
                file: args.file,
                format: args.format,
                skip_whitespace: args.skip_whitespace,
                stats: args.stats,
            };
            run_tokens(tokens_args, config)
        },
        Commands::Check(args) => {
            let check_args = CheckArgs {
                verbose,
                files: args.files,
                jobs: args.jobs,
            };
            run_check(check_args, config)
        },
        Commands::Info(args) => run_info(InfoArgs {
            kinds: args.kinds,
            paths: args.paths,
        }),
    }
}
