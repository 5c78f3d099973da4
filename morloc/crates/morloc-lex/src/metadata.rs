//! Registration metadata for syntax highlighting hosts.
//!
//! Hosts pick a lexer by name, by alias, or by matching a file name against
//! the lexer's globs.

use std::path::Path;

/// Display name of the lexer.
pub const NAME: &str = "Morloc";

/// Short names a host may use to select the lexer.
pub const ALIASES: &[&str] = &["morloc"];

/// File name globs the lexer applies to.
pub const FILENAMES: &[&str] = &["*.mlc"];

/// Returns true if the file name of `path` matches one of [`FILENAMES`].
///
/// ```
/// use morloc_lex::metadata::matches_filename;
///
/// assert!(matches_filename("src/main.mlc"));
/// assert!(!matches_filename("main.mlc.bak"));
/// ```
pub fn matches_filename(path: impl AsRef<Path>) -> bool {
    let Some(name) = path.as_ref().file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    FILENAMES.iter().any(|glob| glob_match(glob, name))
}

/// Matches `name` against a glob supporting `*` and `?`.
fn glob_match(glob: &str, name: &str) -> bool {
    let glob: Vec<char> = glob.chars().collect();
    let name: Vec<char> = name.chars().collect();
    let (mut g, mut n) = (0, 0);
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
        match glob.get(g) {
            Some('*') => {
                backtrack = Some((g, n));
                g += 1;
            },
            Some(&c) if c == '?' || c == name[n] => {
                g += 1;
                n += 1;
            },
            _ => match backtrack {
                Some((star, matched)) => {
                    g = star + 1;
                    n = matched + 1;
                    backtrack = Some((star, matched + 1));
                },
                None => return false,
            },
        }
    }
    glob[g..].iter().all(|&c| c == '*')
}
