//! Argument vector builders for the Axiom entry commands
//!
//! Every builder is pure: it maps typed inputs to the exact tokens handed to
//! the invoker, with the program name first. Nothing here touches the host.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::words::split_raw;

/// Suffix appended to a selection name when selecting by wildcard.
pub const SELECT_WILDCARD_SUFFIX: &str = "\\*";

/// Suffix appended to a name when removing by wildcard.
///
/// Differs from [`SELECT_WILDCARD_SUFFIX`]: `foo` expands to `foo0\*`, so only
/// instances numbered from zero (`foo01`, `foo02`, ...) match, never `foobar`.
/// Kept as Axiom users have always invoked it; see DESIGN.md.
pub const DELETE_WILDCARD_SUFFIX: &str = "0\\*";

/// Program names for the five Axiom entry commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Programs {
    pub list: String,
    pub fleet: String,
    pub select: String,
    pub scan: String,
    pub remove: String,
}

impl Default for Programs {
    fn default() -> Self {
        Self {
            list: "axiom-ls".to_string(),
            fleet: "axiom-fleet".to_string(),
            select: "axiom-select".to_string(),
            scan: "axiom-scan".to_string(),
            remove: "axiom-rm".to_string(),
        }
    }
}

/// Parameters for `axiom-scan`
///
/// Optional fields left as `None` (or empty) never produce a flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanRequest {
    pub input: PathBuf,
    pub module: String,
    pub wordlist: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    /// Passed to `--max-runtime`; zero is treated as unset
    pub max_runtime: Option<u64>,
    /// Extra arguments, shell-word-split and appended last
    pub raw: Option<String>,
}

impl ScanRequest {
    pub fn new(input: impl Into<PathBuf>, module: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            module: module.into(),
            ..Default::default()
        }
    }

    pub fn wordlist(mut self, wordlist: impl Into<PathBuf>) -> Self {
        self.wordlist = Some(wordlist.into());
        self
    }

    pub fn output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    pub fn max_runtime(mut self, seconds: u64) -> Self {
        self.max_runtime = Some(seconds);
        self
    }

    pub fn raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }
}

/// Builds argument vectors against a set of program names
#[derive(Debug, Clone, Default)]
pub struct CommandBuilder {
    programs: Programs,
}

impl CommandBuilder {
    pub fn new(programs: Programs) -> Self {
        Self { programs }
    }

    pub fn programs(&self) -> &Programs {
        &self.programs
    }

    /// `axiom-ls`
    pub fn list(&self) -> Vec<String> {
        vec![self.programs.list.clone()]
    }

    /// `axiom-fleet <name> -i <instances>`
    pub fn create(&self, name: &str, instances: u32) -> Vec<String> {
        vec![
            self.programs.fleet.clone(),
            name.to_string(),
            "-i".to_string(),
            instances.to_string(),
        ]
    }

    /// `axiom-select <name>` or `axiom-select <name>\*`
    pub fn select(&self, name: &str, wildcard: bool) -> Vec<String> {
        vec![
            self.programs.select.clone(),
            with_suffix(name, wildcard, SELECT_WILDCARD_SUFFIX),
        ]
    }

    /// `axiom-scan <input> -m <module> [-wL <wordlist>] [-o <output>] [--max-runtime <n>] [raw...]`
    pub fn scan(&self, request: &ScanRequest) -> Result<Vec<String>> {
        let mut args = vec![
            self.programs.scan.clone(),
            request.input.display().to_string(),
            "-m".to_string(),
            request.module.clone(),
        ];

        if let Some(wordlist) = non_empty_path(&request.wordlist) {
            args.extend(["-wL".to_string(), wordlist]);
        }
        if let Some(output) = non_empty_path(&request.output_path) {
            args.extend(["-o".to_string(), output]);
        }
        if let Some(runtime) = request.max_runtime.filter(|&secs| secs > 0) {
            args.extend(["--max-runtime".to_string(), runtime.to_string()]);
        }
        if let Some(raw) = request.raw.as_deref().filter(|raw| !raw.is_empty()) {
            args.extend(split_raw(raw)?);
        }

        Ok(args)
    }

    /// `axiom-rm <name>` or `axiom-rm <name>0\*`
    pub fn delete(&self, name: &str, wildcard: bool) -> Vec<String> {
        vec![
            self.programs.remove.clone(),
            with_suffix(name, wildcard, DELETE_WILDCARD_SUFFIX),
        ]
    }
}

fn with_suffix(name: &str, wildcard: bool, suffix: &str) -> String {
    if wildcard {
        format!("{name}{suffix}")
    } else {
        name.to_string()
    }
}

fn non_empty_path(path: &Option<PathBuf>) -> Option<String> {
    path.as_ref()
        .map(|p| p.display().to_string())
        .filter(|p| !p.is_empty())
}
