//! External program execution.
//!
//! Programs are spawned directly with an argument vector, never through a
//! shell, so paths with spaces and editor `+Command` arguments pass through
//! untouched.

use crate::error::{MgrError, Result};
use std::ffi::OsStr;
use std::process::{Command, Stdio};

/// Result of running an external program.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output (empty unless captured).
    pub stdout: String,

    /// Standard error (empty unless captured).
    pub stderr: String,

    /// Whether the program exited with status 0.
    pub success: bool,
}

/// Options for program execution.
#[derive(Debug, Clone, Default)]
pub struct CommandOptions {
    /// Capture stdout and stderr (if false, both inherit from the parent).
    pub capture_output: bool,
}

/// Render a program and its arguments for messages.
pub fn display_command<S: AsRef<OsStr>>(program: &str, args: &[S]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(
        args.iter()
            .map(|a| a.as_ref().to_string_lossy().into_owned()),
    );
    parts.join(" ")
}

/// Run `program` with `args` and wait for it to exit.
///
/// A program that cannot be spawned is an error; a non-zero exit is not,
/// it is reported through [`CommandResult::success`].
pub fn execute<S: AsRef<OsStr>>(
    program: &str,
    args: &[S],
    options: &CommandOptions,
) -> Result<CommandResult> {
    let rendered = display_command(program, args);
    tracing::debug!("Running: {}", rendered);

    let mut cmd = Command::new(program);
    cmd.args(args);

    if options.capture_output {
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
    } else {
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
    }

    let output = cmd.output().map_err(|e| {
        tracing::debug!("Failed to spawn {}: {}", program, e);
        MgrError::CommandFailed {
            command: rendered.clone(),
            code: None,
        }
    })?;

    let (stdout, stderr) = if options.capture_output {
        (
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
        )
    } else {
        (String::new(), String::new())
    };

    Ok(CommandResult {
        exit_code: output.status.code(),
        stdout,
        stderr,
        success: output.status.success(),
    })
}

/// Run a program with captured output, failing on non-zero exit.
pub fn execute_checked<S: AsRef<OsStr>>(
    program: &str,
    args: &[S],
) -> Result<CommandResult> {
    let options = CommandOptions {
        capture_output: true,
    };
    let result = execute(program, args, &options)?;
    if !result.success {
        tracing::debug!("{} stderr: {}", program, result.stderr.trim());
        return Err(MgrError::CommandFailed {
            command: display_command(program, args),
            code: result.exit_code,
        });
    }
    Ok(result)
}
