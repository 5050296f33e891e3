//! External command execution
//!
//! Staging stages invoke the package manager and compiler through the
//! [`CommandRunner`] trait so tests can record invocations instead of
//! spawning real processes.

use std::path::Path;
use std::process::Command;

use crate::error::CommandError;

/// Executes external programs on behalf of staging stages
///
/// Implementations must preserve the working directory, environment
/// additions, and argument vector exactly as given. Environment entries are
/// merged onto the inherited process environment, overriding on key clash.
pub trait CommandRunner {
    /// Run a program, streaming its output to the caller's stdio
    fn run(&self, dir: &Path, env: &[(String, String)], argv: &[String])
        -> Result<(), CommandError>;

    /// Run a program and capture its combined stdout and stderr
    fn output(&self, dir: &Path, program: &str, args: &[&str]) -> Result<String, CommandError>;
}

/// Runner backed by `std::process::Command`
pub struct SystemCommand;

impl CommandRunner for SystemCommand {
    fn run(
        &self,
        dir: &Path,
        env: &[(String, String)],
        argv: &[String],
    ) -> Result<(), CommandError> {
        let program = argv.first().ok_or_else(|| CommandError::Spawn {
            program: String::new(),
            error: "empty argument vector".to_string(),
        })?;

        let status = Command::new(program)
            .args(&argv[1..])
            .current_dir(dir)
            .envs(env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .status()
            .map_err(|e| CommandError::Spawn {
                program: program.clone(),
                error: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::Failed {
                program: program.clone(),
                status: status.to_string(),
                output: String::new(),
            })
        }
    }

    fn output(&self, dir: &Path, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let out = Command::new(program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| CommandError::Spawn {
                program: program.to_string(),
                error: e.to_string(),
            })?;

        let mut combined = String::from_utf8_lossy(&out.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&out.stderr));

        if out.status.success() {
            Ok(combined)
        } else {
            Err(CommandError::Failed {
                program: program.to_string(),
                status: out.status.to_string(),
                output: combined,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_uses_working_directory_and_env() {
        let dir = TempDir::new().unwrap();
        let runner = SystemCommand;

        let argv = vec![
            "sh".to_string(),
            "-c".to_string(),
            "test \"$(pwd)\" = \"$EXPECTED_DIR\" && test \"$MARKER\" = on".to_string(),
        ];
        let env = vec![
            (
                "EXPECTED_DIR".to_string(),
                dir.path().display().to_string(),
            ),
            ("MARKER".to_string(), "on".to_string()),
        ];

        runner.run(dir.path(), &env, &argv).unwrap();
    }

    #[test]
    fn test_run_reports_nonzero_exit() {
        let dir = TempDir::new().unwrap();
        let runner = SystemCommand;

        let argv = vec!["sh".to_string(), "-c".to_string(), "exit 3".to_string()];
        let result = runner.run(dir.path(), &[], &argv);

        match result {
            Err(CommandError::Failed { program, .. }) => assert_eq!(program, "sh"),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_run_rejects_empty_argv() {
        let dir = TempDir::new().unwrap();
        let runner = SystemCommand;

        let result = runner.run(dir.path(), &[], &[]);
        assert!(matches!(result, Err(CommandError::Spawn { .. })));
    }

    #[test]
    fn test_output_runs_in_working_directory() {
        let dir = TempDir::new().unwrap();
        let runner = SystemCommand;

        let printed = runner.output(dir.path(), "sh", &["-c", "pwd"]).unwrap();

        // Canonicalize both sides; the tempdir may sit behind a symlink.
        let reported = std::fs::canonicalize(printed.trim()).unwrap();
        assert_eq!(reported, std::fs::canonicalize(dir.path()).unwrap());
    }

    #[test]
    fn test_output_captures_stdout_and_stderr() {
        let dir = TempDir::new().unwrap();
        let runner = SystemCommand;

        let combined = runner
            .output(dir.path(), "sh", &["-c", "echo out; echo err >&2"])
            .unwrap();

        assert!(combined.contains("out"));
        assert!(combined.contains("err"));
    }

    #[test]
    fn test_output_includes_capture_on_failure() {
        let dir = TempDir::new().unwrap();
        let runner = SystemCommand;

        let result = runner.output(dir.path(), "sh", &["-c", "echo boom; exit 1"]);

        match result {
            Err(CommandError::Failed { output, .. }) => assert!(output.contains("boom")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_spawn_error_for_missing_program() {
        let dir = TempDir::new().unwrap();
        let runner = SystemCommand;

        let result = runner.output(dir.path(), "definitely-not-a-real-binary", &[]);
        assert!(matches!(result, Err(CommandError::Spawn { .. })));
    }
}
