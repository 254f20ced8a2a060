//! Shell command execution.
//!
//! Runs a command string through the platform shell (`sh -c` on Unix,
//! `cmd /C` on Windows), blocks until it finishes, and captures exit code,
//! stdout, and stderr. A non-zero exit is data, not an error: callers get
//! the full [`CommandOutput`] and decide what a failure means. There is no
//! timeout — a command that never exits blocks its caller indefinitely.

use crate::error::{Error, Result};
use crate::utils::io::Decode;
use serde::Serialize;
use std::process::Command;

/// Captured result of a completed shell command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub exit_code: i32,
}

/// Execute a shell command and capture its output.
///
/// `decode` controls how the child's output bytes become text: strict
/// decoding fails with `internal.decode_error` on invalid UTF-8.
pub fn run(command: &str, decode: Decode) -> Result<CommandOutput> {
    run_in_dir(command, None, None, decode)
}

/// Execute a shell command with an optional working directory and extra
/// environment variables.
pub fn run_in_dir(
    command: &str,
    current_dir: Option<&str>,
    env: Option<&[(&str, &str)]>,
    decode: Decode,
) -> Result<CommandOutput> {
    let mut cmd = shell_command(command);

    if let Some(dir) = current_dir {
        cmd.current_dir(dir);
    }

    if let Some(env_pairs) = env {
        cmd.envs(env_pairs.iter().copied());
    }

    let out = cmd
        .output()
        .map_err(|e| Error::command_spawn_failed(command, e.to_string()))?;

    Ok(CommandOutput {
        stdout: decode.decode(out.stdout, "command stdout")?,
        stderr: decode.decode(out.stderr, "command stderr")?,
        success: out.status.success(),
        // Signal-terminated children have no code
        exit_code: out.status.code().unwrap_or(-1),
    })
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}
