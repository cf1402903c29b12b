//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// axiomctl with an isolated config path and an empty bin dir
fn axiomctl(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("axiomctl").unwrap();
    cmd.env("AXIOMCTL_CONFIG", home.path().join("config.toml"))
        .env("AXIOMCTL_BIN_DIR", home.path().join("bin"))
        .env_remove("RUST_LOG");
    cmd
}

// === Help Tests ===

#[test]
fn test_scan_help() {
    let home = TempDir::new().unwrap();
    axiomctl(&home)
        .arg("scan")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Maximum scan runtime"));
}

#[test]
fn test_rm_help() {
    let home = TempDir::new().unwrap();
    axiomctl(&home)
        .arg("rm")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--wildcard"));
}

// === Dry Run Tests ===

#[test]
fn test_fleet_dry_run_prints_command() {
    let home = TempDir::new().unwrap();
    axiomctl(&home)
        .args(["--dry-run", "fleet", "foo", "3"])
        .assert()
        .success()
        .stdout("axiom-fleet foo -i 3\n");
}

#[test]
fn test_scan_dry_run_omits_unset_flags() {
    let home = TempDir::new().unwrap();
    axiomctl(&home)
        .args(["--dry-run", "scan", "targets.txt", "amass", "--max-runtime", "60"])
        .assert()
        .success()
        .stdout("axiom-scan targets.txt -m amass --max-runtime 60\n");
}

#[test]
fn test_scan_dry_run_rejects_unbalanced_raw() {
    let home = TempDir::new().unwrap();
    axiomctl(&home)
        .args(["--dry-run", "scan", "targets.txt", "amass", "--raw", "'oops"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid raw arguments"));
}

// === Availability Tests ===

#[test]
fn test_missing_axiom_prints_install_instructions() {
    let home = TempDir::new().unwrap();
    axiomctl(&home)
        .arg("ls")
        .assert()
        .failure()
        .stderr(predicate::str::contains("axiom-configure"));
}

// === Stub Toolkit Tests ===

#[cfg(unix)]
mod stubbed {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fn install_stub(home: &TempDir, name: &str, body: &str) {
        let bin = home.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        let path = bin.join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn test_json_output_reports_captured_streams() {
        let home = TempDir::new().unwrap();
        install_stub(&home, "axiom-ls", "echo foo01");

        axiomctl(&home)
            .args(["--json", "ls"])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"exit_code\": 0"))
            .stdout(predicate::str::contains("\"stdout\": \"foo01\\n\""));
    }

    #[test]
    fn test_stderr_output_fails_command() {
        let home = TempDir::new().unwrap();
        install_stub(&home, "axiom-ls", "exit 0");
        install_stub(&home, "axiom-fleet", "printf 'error: quota exceeded' >&2\nexit 1");

        axiomctl(&home)
            .args(["--silent", "fleet", "foo", "3"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("axiom-fleet failed"))
            .stderr(predicate::str::contains("error: quota exceeded"));
    }

    #[test]
    fn test_passthrough_exit_code_is_propagated() {
        let home = TempDir::new().unwrap();
        install_stub(&home, "axiom-ls", "exit 0");
        install_stub(&home, "axiom-rm", "exit 3");

        axiomctl(&home).args(["rm", "foo01"]).assert().code(3);
    }

    #[test]
    fn test_no_silent_overrides_silent_config() {
        let home = TempDir::new().unwrap();
        install_stub(&home, "axiom-ls", "echo foo01");
        fs::write(home.path().join("config.toml"), "silent = true\n").unwrap();

        axiomctl(&home).arg("ls").assert().success().stdout("");

        axiomctl(&home)
            .args(["--no-silent", "ls"])
            .assert()
            .success()
            .stdout("foo01\n");
    }

    #[test]
    fn test_exit_status_failure_without_stderr_reports_status() {
        let home = TempDir::new().unwrap();
        install_stub(&home, "axiom-ls", "exit 0");
        install_stub(&home, "axiom-rm", "exit 2");
        fs::write(
            home.path().join("config.toml"),
            "failure_policy = \"exit-status\"\n",
        )
        .unwrap();

        axiomctl(&home)
            .args(["rm", "foo01"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("axiom-rm failed"))
            .stderr(predicate::str::contains("exited with status 2"));
    }

    #[test]
    fn test_config_policy_tolerates_warnings() {
        let home = TempDir::new().unwrap();
        install_stub(&home, "axiom-ls", "echo 'warning: stale cache' >&2\necho foo01");
        fs::write(
            home.path().join("config.toml"),
            "failure_policy = \"exit-status\"\n",
        )
        .unwrap();

        axiomctl(&home).args(["--silent", "ls"]).assert().success();
    }
}

// === Config Tests ===

#[test]
fn test_config_init_then_show() {
    let home = TempDir::new().unwrap();

    axiomctl(&home).args(["config", "init"]).assert().success();
    assert!(home.path().join("config.toml").exists());

    axiomctl(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("failure_policy = \"stderr\""))
        .stdout(predicate::str::contains("[programs]"))
        .stdout(predicate::str::contains("bin_dir = "));

    axiomctl(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_completions_generate() {
    let home = TempDir::new().unwrap();
    axiomctl(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("axiomctl"));
}
