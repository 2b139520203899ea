use std::env;
use std::process::ExitCode;

use log::debug;
use pipet_cli::cli_args;
use pipet_core::error::Result;
use pipet_core::execution;

fn execute(args: &[String]) -> Result<()> {
    let config = cli_args::parse_options(args)?;
    debug!("Running {:?} (hide: {})", config.command(), config.hide());

    let report = execution::run_command(&config)?;
    debug!("Run finished with {} captured bytes", report.captured_stdout().len());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match cli_args::collect_args(env::args_os().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(request) = cli_args::informational_request(&args) {
        if let Err(e) = request.print() {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
