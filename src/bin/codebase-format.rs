#![allow(clippy::cargo_common_metadata)]
use codebase_tools::{cli, setup_logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let args = cli::parse_format_args();

    if let Err(e) = setup_logging(args.common.debug) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match cli::execute_format(&args, std::io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => cli::exit_code_for(&e),
    }
}
