//! Process invoker trait and implementations
//!
//! Provides a trait for executing Axiom commands, with:
//! - Real implementation using std::process
//! - Mock implementation for testing
//!
//! Calls block until the child exits. There is no timeout here; `axiom-scan`
//! bounds itself through `--max-runtime`.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use tracing::debug;

/// How the child's standard streams are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Inherit the caller's terminal
    Passthrough,
    /// Capture stdout and stderr into buffers
    Capture,
}

impl OutputMode {
    pub fn from_silent(silent: bool) -> Self {
        if silent {
            Self::Capture
        } else {
            Self::Passthrough
        }
    }
}

/// Result of one completed child process
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub argv: Vec<String>,
    /// Exit status; -1 when the child was killed by a signal
    pub exit_code: i32,
    /// Present only in capture mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    /// Present only in capture mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
}

impl Invocation {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Error during process invocation
#[derive(Debug, thiserror::Error)]
pub enum InvokeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("command not found: {0}")]
    NotFound(String),

    #[error("empty command")]
    EmptyCommand,
}

/// Trait for process execution (testable)
pub trait Invoker: Send + Sync {
    fn invoke(&self, argv: &[String], mode: OutputMode) -> Result<Invocation, InvokeError>;
}

/// Real invoker using std::process
#[derive(Debug, Clone, Default)]
pub struct ProcessInvoker {
    bin_dir: Option<PathBuf>,
}

impl ProcessInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run programs from `dir` instead of searching `PATH`
    pub fn with_bin_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            bin_dir: Some(dir.into()),
        }
    }

    fn program_path(&self, program: &str) -> PathBuf {
        match &self.bin_dir {
            Some(dir) => dir.join(program),
            None => PathBuf::from(program),
        }
    }
}

impl Invoker for ProcessInvoker {
    fn invoke(&self, argv: &[String], mode: OutputMode) -> Result<Invocation, InvokeError> {
        let (program, args) = argv.split_first().ok_or(InvokeError::EmptyCommand)?;

        let mut cmd = Command::new(self.program_path(program));
        cmd.args(args);
        debug!(?argv, ?mode, "spawning");

        let spawn_error = |err: io::Error| match err.kind() {
            io::ErrorKind::NotFound => InvokeError::NotFound(program.clone()),
            _ => InvokeError::Io(err),
        };

        match mode {
            OutputMode::Passthrough => {
                let status = cmd.status().map_err(spawn_error)?;
                Ok(Invocation {
                    argv: argv.to_vec(),
                    exit_code: status.code().unwrap_or(-1),
                    stdout: None,
                    stderr: None,
                })
            }
            OutputMode::Capture => {
                let output = cmd
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped())
                    .output()
                    .map_err(spawn_error)?;

                Ok(Invocation {
                    argv: argv.to_vec(),
                    exit_code: output.status.code().unwrap_or(-1),
                    stdout: Some(String::from_utf8_lossy(&output.stdout).into_owned()),
                    stderr: Some(String::from_utf8_lossy(&output.stderr).into_owned()),
                })
            }
        }
    }
}

/// A call recorded by [`MockInvoker`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub argv: Vec<String>,
    pub mode: OutputMode,
}

/// Canned response for [`MockInvoker`]
#[derive(Debug, Clone, Default)]
pub struct MockResponse {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Mock invoker for testing
///
/// Replays queued responses in order, then succeeds with empty output.
/// Streams are only reported in capture mode, as with a real child.
#[derive(Default)]
pub struct MockInvoker {
    responses: Mutex<Vec<MockResponse>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a response to return on the next invocation
    pub fn add_response(&self, response: MockResponse) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(response);
    }

    /// Every call seen so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Invoker for MockInvoker {
    fn invoke(&self, argv: &[String], mode: OutputMode) -> Result<Invocation, InvokeError> {
        if argv.is_empty() {
            return Err(InvokeError::EmptyCommand);
        }

        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedCall {
                argv: argv.to_vec(),
                mode,
            });

        let response = {
            let mut responses = self.responses.lock().unwrap_or_else(PoisonError::into_inner);
            if responses.is_empty() {
                MockResponse::default()
            } else {
                responses.remove(0)
            }
        };

        let (stdout, stderr) = match mode {
            OutputMode::Capture => (Some(response.stdout), Some(response.stderr)),
            OutputMode::Passthrough => (None, None),
        };

        Ok(Invocation {
            argv: argv.to_vec(),
            exit_code: response.exit_code,
            stdout,
            stderr,
        })
    }
}
