//! Integration tests for the preflight binary.
//!
//! Stub `python3`, `cmake` and `git` executables are placed in a temporary
//! directory that becomes the whole `PATH`, so each test decides which tools
//! exist. Every stub appends its arguments to a log file.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("bootstrap-preflight"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bootstrap third-party dependencies"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("bootstrap-preflight"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_prints_completions_without_probing() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("bootstrap-preflight"));
    cmd.env("PATH", "").args(["--completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("bootstrap-preflight"));
    Ok(())
}

#[test]
fn cli_missing_project_exits_255() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempfile::TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("bootstrap-preflight"));
    cmd.arg("--project").arg(temp.path().join("missing"));
    cmd.assert()
        .code(255)
        .stdout(predicate::str::contains("Project directory not found"));
    Ok(())
}

#[cfg(unix)]
mod with_stub_tools {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const PYTHON_STUB: &str = r#"#!/bin/sh
echo "${0##*/} $*" >> "$PREFLIGHT_TEST_LOG"
if [ "$1" = "--version" ]; then
  echo "Python 3.12.0"
  echo "python version on stderr" >&2
  exit 0
fi
echo "bootstrap output: $*"
exit ${BOOTSTRAP_EXIT:-0}
"#;

    const CMAKE_STUB: &str = r#"#!/bin/sh
echo "cmake $*" >> "$PREFLIGHT_TEST_LOG"
echo "cmake version 3.28.1"
exit 0
"#;

    const GIT_STUB: &str = r#"#!/bin/sh
echo "git $*" >> "$PREFLIGHT_TEST_LOG"
echo "git version 2.43.0"
exit 0
"#;

    struct Sandbox {
        _temp: TempDir,
        bin: PathBuf,
        project: PathBuf,
        log: PathBuf,
    }

    impl Sandbox {
        fn new(tools: &[(&str, &str)]) -> Self {
            let temp = TempDir::new().unwrap();
            let bin = temp.path().join("bin");
            let project = temp.path().join("project");
            fs::create_dir_all(&bin).unwrap();
            fs::create_dir_all(&project).unwrap();
            for (name, body) in tools {
                write_executable(&bin.join(name), body);
            }
            let log = temp.path().join("invocations.log");
            fs::write(&log, "").unwrap();
            Self {
                _temp: temp,
                bin,
                project,
                log,
            }
        }

        fn all_tools() -> Self {
            Self::new(&[
                ("python3", PYTHON_STUB),
                ("cmake", CMAKE_STUB),
                ("git", GIT_STUB),
            ])
        }

        fn command(&self) -> Command {
            let mut cmd = Command::new(cargo_bin("bootstrap-preflight"));
            cmd.current_dir(&self.project)
                .env_clear()
                .env("PATH", &self.bin)
                .env("PREFLIGHT_TEST_LOG", &self.log);
            cmd
        }

        fn log_lines(&self) -> Vec<String> {
            fs::read_to_string(&self.log)
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    fn write_executable(path: &Path, body: &str) {
        fs::write(path, body).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[test]
    fn all_tools_present_runs_bootstrap_and_exits_0() {
        let sandbox = Sandbox::all_tools();

        sandbox
            .command()
            .assert()
            .success()
            .stdout("bootstrap output: ThirdParty/bootstrap.py -b ThirdParty\n");

        assert_eq!(
            sandbox.log_lines(),
            vec![
                "python3 --version",
                "cmake --version",
                "git --version",
                "python3 ThirdParty/bootstrap.py -b ThirdParty",
            ]
        );
    }

    #[test]
    fn probes_never_reach_visible_output() {
        let sandbox = Sandbox::all_tools();

        sandbox
            .command()
            .assert()
            .success()
            .stdout(predicate::str::contains("Python 3.12.0").not())
            .stdout(predicate::str::contains("cmake version").not())
            .stdout(predicate::str::contains("git version").not())
            .stderr(predicate::str::contains("python version on stderr").not());
    }

    #[test]
    fn missing_interpreter_stops_before_other_probes() {
        let sandbox = Sandbox::new(&[("cmake", CMAKE_STUB), ("git", GIT_STUB)]);

        sandbox
            .command()
            .assert()
            .code(255)
            .stdout("Make sure you can run Python scripts from the command line.\n");

        assert!(sandbox.log_lines().is_empty());
    }

    #[test]
    fn missing_cmake_reports_cmake() {
        let sandbox = Sandbox::new(&[("python3", PYTHON_STUB), ("git", GIT_STUB)]);

        sandbox
            .command()
            .assert()
            .code(255)
            .stdout("CMake not installed.\n");

        assert_eq!(sandbox.log_lines(), vec!["python3 --version"]);
    }

    #[test]
    fn missing_git_reports_git_and_skips_bootstrap() {
        let sandbox = Sandbox::new(&[("python3", PYTHON_STUB), ("cmake", CMAKE_STUB)]);

        sandbox
            .command()
            .assert()
            .code(255)
            .stdout("Git not installed.\n");

        assert_eq!(
            sandbox.log_lines(),
            vec!["python3 --version", "cmake --version"]
        );
    }

    #[test]
    fn failing_bootstrap_exits_255_and_names_script() {
        let sandbox = Sandbox::all_tools();

        sandbox
            .command()
            .env("BOOTSTRAP_EXIT", "1")
            .assert()
            .code(255)
            .stdout(predicate::str::contains("bootstrap output:"))
            .stdout(predicate::str::contains(
                "Unable to run ThirdParty/bootstrap.py",
            ));
    }

    #[test]
    fn bootstrap_exit_code_is_not_passed_through() {
        let sandbox = Sandbox::all_tools();

        sandbox
            .command()
            .env("BOOTSTRAP_EXIT", "3")
            .assert()
            .code(255);
    }

    #[test]
    fn dry_run_prints_command_without_running_it() {
        let sandbox = Sandbox::all_tools();

        sandbox
            .command()
            .arg("--dry-run")
            .assert()
            .success()
            .stdout("Would run: python3 ThirdParty/bootstrap.py -b ThirdParty\n");

        assert_eq!(sandbox.log_lines().len(), 3);
    }

    #[test]
    fn project_flag_sets_working_directory() {
        let sandbox = Sandbox::all_tools();
        let elsewhere = TempDir::new().unwrap();

        let mut cmd = sandbox.command();
        cmd.current_dir(elsewhere.path()).arg("--project").arg(&sandbox.project);
        cmd.assert().success();

        assert_eq!(sandbox.log_lines().len(), 4);
    }

    #[test]
    fn interpreter_env_override() {
        let sandbox = Sandbox::new(&[
            ("python3.12", PYTHON_STUB),
            ("cmake", CMAKE_STUB),
            ("git", GIT_STUB),
        ]);

        sandbox
            .command()
            .env("PREFLIGHT_INTERPRETER", "python3.12")
            .assert()
            .success();

        assert_eq!(sandbox.log_lines()[0], "python3.12 --version");
        assert_eq!(sandbox.log_lines().len(), 4);
    }

    #[test]
    fn debug_logs_go_to_stderr_only() {
        let sandbox = Sandbox::all_tools();

        sandbox
            .command()
            .arg("--debug")
            .assert()
            .success()
            .stdout("bootstrap output: ThirdParty/bootstrap.py -b ThirdParty\n")
            .stderr(predicate::str::contains("probe passed"));
    }
}
