//! Shell word splitting for pass-through arguments
//!
//! Raw extra arguments for `axiom-scan` arrive as one string and are split
//! with POSIX shell quoting rules. No expansion is performed: `$HOME` stays
//! `$HOME`, globs stay globs.

use crate::error::{AxiomError, Result};

/// Split a raw argument string into words, honoring single and double quotes
/// and backslash escapes.
pub fn split_raw(raw: &str) -> Result<Vec<String>> {
    shlex::split(raw).ok_or_else(|| AxiomError::invalid_raw_args(raw))
}

/// Render an argument vector as a copy-pasteable shell command line.
pub fn join_quoted(argv: &[String]) -> String {
    argv.iter()
        .map(|word| {
            shlex::try_quote(word)
                .map(|quoted| quoted.into_owned())
                .unwrap_or_else(|_| word.clone())
        })
        .collect::<Vec<_>>()
        .join(" ")
}
