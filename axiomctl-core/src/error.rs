/// Structured error types for axiomctl-core.
///
/// Uses `thiserror` so library consumers can match on failure kinds.
/// The `axiomctl` binary wraps these in `anyhow` for reporting.

use thiserror::Error;

use crate::invoker::InvokeError;

/// Main error type for axiomctl-core operations
#[derive(Error, Debug)]
pub enum AxiomError {
    /// The Axiom entry command could not be resolved on this host
    #[error("{remediation}")]
    ToolNotInstalled {
        program: String,
        remediation: String,
    },

    /// A child process reported failure. Displays the captured stderr verbatim,
    /// or the exit status when nothing was captured.
    #[error("{}", describe_failure(.stderr, *.exit_code))]
    ChildProcessFailure {
        stderr: String,
        exit_code: i32,
    },

    /// The raw argument string could not be split into shell words
    #[error("Invalid raw arguments (unbalanced quotes?): {raw}")]
    InvalidRawArgs { raw: String },

    /// The child process could not be started
    #[error(transparent)]
    Invoke(#[from] InvokeError),

    /// Configuration error
    #[error("Configuration error: {reason}")]
    Config { reason: String },
}

fn describe_failure(stderr: &str, exit_code: i32) -> String {
    if stderr.is_empty() {
        format!("exited with status {exit_code}")
    } else {
        stderr.to_string()
    }
}

/// Result type alias for axiomctl-core operations
pub type Result<T> = std::result::Result<T, AxiomError>;

impl AxiomError {
    /// Create a tool-not-installed error with the standard install instructions
    pub fn tool_not_installed(program: impl Into<String>) -> Self {
        Self::ToolNotInstalled {
            program: program.into(),
            remediation: crate::resolver::INSTALL_HINT.to_string(),
        }
    }

    /// Create a child process failure
    pub fn child_process_failure(stderr: impl Into<String>, exit_code: i32) -> Self {
        Self::ChildProcessFailure {
            stderr: stderr.into(),
            exit_code,
        }
    }

    /// Create an invalid raw arguments error
    pub fn invalid_raw_args(raw: impl Into<String>) -> Self {
        Self::InvalidRawArgs { raw: raw.into() }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Captured stderr for child process failures
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::ChildProcessFailure { stderr, .. } => Some(stderr),
            _ => None,
        }
    }
}
