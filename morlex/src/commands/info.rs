//! Info command implementation.
//!
//! Prints the lexer's registration metadata and, for any paths given,
//! whether the lexer would claim them.

use std::path::PathBuf;

use morloc_lex::metadata::{matches_filename, ALIASES, FILENAMES, NAME};
use morloc_lex::{Mode, TokenKind};

use crate::error::Result;

/// Arguments for the info command.
#[derive(Debug, Clone, Default)]
pub struct InfoArgs {
    /// Also list every token kind path.
    pub kinds: bool,
    /// Paths to test against the filename globs.
    pub paths: Vec<PathBuf>,
}

/// Build the info text.
pub fn render_info(args: &InfoArgs) -> String {
    let modes: Vec<_> = Mode::ALL.iter().map(|mode| mode.name()).collect();
    let mut out = format!(
        "name: {}\naliases: {}\nfilenames: {}\nmodes: {}\n",
        NAME,
        ALIASES.join(", "),
        FILENAMES.join(", "),
        modes.join(", ")
    );

    if args.kinds {
        out.push_str("kinds:\n");
        for kind in TokenKind::ALL {
            out.push_str(&format!("  {}\n", kind.path()));
        }
    }

    for path in &args.paths {
        let verdict = if matches_filename(path) {
            "matches"
        } else {
            "does not match"
        };
        out.push_str(&format!("{}: {}\n", path.display(), verdict));
    }
    out
}

/// Run the info command.
pub fn run_info(args: InfoArgs) -> Result<()> {
    print!("{}", render_info(&args));
    Ok(())
}
