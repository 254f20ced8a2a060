use clap::Parser;

mod commands;

use commands::{file, run, GlobalArgs};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "oddjob")]
#[command(version = VERSION)]
#[command(about = "Shell-out command execution and whole-file text chores")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Execute a shell command and report exit code, stdout, and stderr
    Run(run::RunArgs),
    /// Whole-file text operations
    File(file::FileArgs),
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let (json_result, exit_code) = commands::run_json(cli.command, &GlobalArgs {});

    if oddjob::output::print_json_result(json_result).is_err() {
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
