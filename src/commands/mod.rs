pub mod file;
pub mod run;

pub type CmdResult<T> = oddjob::Result<(T, i32)>;

pub(crate) struct GlobalArgs {}

/// Dispatch a command to its handler and map result to JSON.
macro_rules! dispatch {
    ($args:expr, $global:expr, $module:ident) => {
        oddjob::output::map_cmd_result_to_json($module::run($args, $global))
    };
}

pub(crate) fn run_json(
    command: crate::Commands,
    global: &GlobalArgs,
) -> (oddjob::Result<serde_json::Value>, i32) {
    match command {
        crate::Commands::Run(args) => dispatch!(args, global, run),
        crate::Commands::File(args) => dispatch!(args, global, file),
    }
}
