use clap::Args;
use serde::Serialize;

use oddjob::error::CommandFailedDetails;
use oddjob::{guard, runner, shell, Decode, Error};

use super::CmdResult;

#[derive(Args)]
pub struct RunArgs {
    /// Shell command to execute. A single argument is passed to the shell
    /// as-is; multiple words are quoted and joined first.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    command: Vec<String>,

    /// Working directory for the command
    #[arg(long, value_name = "DIR")]
    dir: Option<String>,

    /// Extra environment variable for the command (repeatable)
    #[arg(long, value_name = "KEY=VALUE")]
    env: Vec<String>,

    /// Replace invalid UTF-8 in captured output instead of failing
    #[arg(long)]
    lossy: bool,

    /// Treat a non-zero exit from the command as an error
    #[arg(long)]
    check: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunOutput {
    command: String,
    stdout: String,
    stderr: String,
    exit_code: i32,
    success: bool,
}

pub fn run(args: RunArgs, _global: &super::GlobalArgs) -> CmdResult<RunOutput> {
    let command = if args.command.len() == 1 {
        args.command[0].clone()
    } else {
        shell::quote_args(&args.command)
    };
    let command = guard::require_non_empty(&command, "command", "Command cannot be empty")?
        .to_string();

    let env_pairs = parse_env(&args.env)?;
    let env_refs: Vec<(&str, &str)> = env_pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();

    let dir = args
        .dir
        .as_deref()
        .map(|d| shellexpand::tilde(d).to_string());

    let decode = if args.lossy {
        Decode::Lossy
    } else {
        Decode::Strict
    };

    oddjob::log_status!("run", "Executing: {}", command);

    let env = if env_refs.is_empty() {
        None
    } else {
        Some(env_refs.as_slice())
    };
    let output = runner::run_in_dir(&command, dir.as_deref(), env, decode)?;

    if args.check && !output.success {
        return Err(Error::command_failed(CommandFailedDetails {
            command,
            exit_code: output.exit_code,
            stdout: output.stdout,
            stderr: output.stderr,
        }));
    }

    // The child's exit code becomes ours
    let code = output.exit_code;
    Ok((
        RunOutput {
            command,
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code: output.exit_code,
            success: output.success,
        },
        code,
    ))
}

/// Parse repeated KEY=VALUE flags into environment pairs.
fn parse_env(pairs: &[String]) -> oddjob::Result<Vec<(String, String)>> {
    pairs
        .iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(Error::validation_invalid_argument(
                "env",
                format!("Expected KEY=VALUE, got '{}'", pair),
            )),
        })
        .collect()
}
