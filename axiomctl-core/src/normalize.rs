//! Turns completed invocations into success or `ChildProcessFailure`
//!
//! Axiom scripts report most problems on stderr while still exiting 0, so the
//! default policy treats any captured stderr as failure. That also catches
//! harmless warnings; callers who need to tolerate them pick another policy.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AxiomError, Result};
use crate::invoker::Invocation;

/// What counts as a failed invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Any captured stderr output
    #[default]
    Stderr,
    /// A non-zero exit code
    ExitStatus,
    /// Either of the above
    Either,
}

impl FailurePolicy {
    fn is_failure(self, invocation: &Invocation) -> bool {
        let wrote_stderr = invocation
            .stderr
            .as_deref()
            .is_some_and(|stderr| !stderr.is_empty());

        match self {
            Self::Stderr => wrote_stderr,
            Self::ExitStatus => !invocation.success(),
            Self::Either => wrote_stderr || !invocation.success(),
        }
    }
}

/// Return the invocation unchanged, or the failure it represents under `policy`
pub fn normalize(invocation: Invocation, policy: FailurePolicy) -> Result<Invocation> {
    if !policy.is_failure(&invocation) {
        return Ok(invocation);
    }

    warn!(
        argv = ?invocation.argv,
        exit_code = invocation.exit_code,
        "axiom command failed"
    );

    Err(AxiomError::child_process_failure(
        invocation.stderr.unwrap_or_default(),
        invocation.exit_code,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(exit_code: i32, stderr: &str) -> Invocation {
        Invocation {
            argv: vec!["axiom-ls".to_string()],
            exit_code,
            stdout: Some("instance table".to_string()),
            stderr: Some(stderr.to_string()),
        }
    }

    fn passthrough(exit_code: i32) -> Invocation {
        Invocation {
            argv: vec!["axiom-ls".to_string()],
            exit_code,
            stdout: None,
            stderr: None,
        }
    }

    #[test]
    fn stderr_policy_raises_with_exact_text() {
        let err = normalize(captured(1, "error: quota exceeded"), FailurePolicy::Stderr).unwrap_err();
        assert_eq!(err.to_string(), "error: quota exceeded");
        assert!(matches!(
            err,
            AxiomError::ChildProcessFailure { exit_code: 1, .. }
        ));
    }

    #[test]
    fn stderr_policy_raises_even_on_zero_exit() {
        let err = normalize(captured(0, "warning: low credit\n"), FailurePolicy::Stderr).unwrap_err();
        assert_eq!(err.stderr(), Some("warning: low credit\n"));
    }

    #[test]
    fn stderr_policy_ignores_exit_code_when_stderr_empty() {
        let invocation = captured(2, "");
        let result = normalize(invocation.clone(), FailurePolicy::Stderr).unwrap();
        assert_eq!(result, invocation);
    }

    #[test]
    fn passthrough_never_fails_under_stderr_policy() {
        assert!(normalize(passthrough(1), FailurePolicy::Stderr).is_ok());
    }

    #[test]
    fn exit_status_policy_tolerates_warnings() {
        assert!(normalize(captured(0, "warning"), FailurePolicy::ExitStatus).is_ok());

        let err = normalize(passthrough(4), FailurePolicy::ExitStatus).unwrap_err();
        assert!(matches!(
            err,
            AxiomError::ChildProcessFailure { exit_code: 4, ref stderr } if stderr.is_empty()
        ));
        assert_eq!(err.to_string(), "exited with status 4");
    }

    #[test]
    fn either_policy_combines_both_checks() {
        assert!(normalize(captured(0, "warning"), FailurePolicy::Either).is_err());
        assert!(normalize(passthrough(1), FailurePolicy::Either).is_err());
        assert!(normalize(captured(0, ""), FailurePolicy::Either).is_ok());
    }

    #[test]
    fn policy_parses_from_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            policy: FailurePolicy,
        }

        let parsed: Wrapper = toml::from_str("policy = \"exit-status\"").unwrap();
        assert_eq!(parsed.policy, FailurePolicy::ExitStatus);
    }
}
