//! Host capability probe for the Axiom toolkit
//!
//! Provides a trait for locating executables, with:
//! - `PathResolver` searching `PATH` (or a fixed directory) via `which`
//! - `StaticResolver` for tests

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Printed when `axiom-ls` cannot be found.
pub const INSTALL_HINT: &str = "\
Axiom is either incorrectly installed or not installed on this machine.
(You need to be running Zsh as your shell to run Axiom.)
You can build it manually by pasting the following into your terminal:

bash <(curl -s https://raw.githubusercontent.com/pry0cc/axiom/master/interact/axiom-configure)
";

/// Trait for locating executables (testable)
pub trait ToolResolver: Send + Sync {
    /// Full path of `program`, if it can be found
    fn resolve(&self, program: &str) -> Option<PathBuf>;

    fn is_available(&self, program: &str) -> bool {
        self.resolve(program).is_some()
    }
}

/// Resolves programs the way a shell would
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    bin_dir: Option<PathBuf>,
}

impl PathResolver {
    /// Search the process `PATH`
    pub fn new() -> Self {
        Self::default()
    }

    /// Search only `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            bin_dir: Some(dir.into()),
        }
    }

    pub fn bin_dir(&self) -> Option<&Path> {
        self.bin_dir.as_deref()
    }
}

impl ToolResolver for PathResolver {
    fn resolve(&self, program: &str) -> Option<PathBuf> {
        match &self.bin_dir {
            Some(dir) => {
                let cwd = std::env::current_dir().ok()?;
                which::which_in(program, Some(dir), cwd).ok()
            }
            None => which::which(program).ok(),
        }
    }
}

/// Fake resolver backed by a fixed program table
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    programs: HashMap<String, PathBuf>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolver that finds nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register `program` as installed under `/usr/local/bin`
    pub fn with(mut self, program: &str) -> Self {
        self.programs.insert(
            program.to_string(),
            PathBuf::from("/usr/local/bin").join(program),
        );
        self
    }
}

impl ToolResolver for StaticResolver {
    fn resolve(&self, program: &str) -> Option<PathBuf> {
        self.programs.get(program).cloned()
    }
}
