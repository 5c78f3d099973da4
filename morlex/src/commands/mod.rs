//! Command modules for the morlex CLI.
//!
//! Each subcommand lives in its own file and exposes an `Args` struct plus
//! a `run_*` entry point.

pub mod common;

pub mod check;
pub mod info;
pub mod tokens;

pub use check::{run_check, CheckArgs};
pub use info::{run_info, InfoArgs};
pub use tokens::{run_tokens, TokensArgs};
