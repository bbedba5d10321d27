//! Command implementations for the CLI

use crate::{
    cli::{FormatArgs, ReplaceArgs},
    config::{Config, RunMode},
    core::{report::INTERRUPTED_NOTICE, run, Formatter, Replacer, RunSummary},
    error::ToolError,
    utils::process::ProcessRunner,
};
use anyhow::Context;
use std::io::Write;
use std::process::ExitCode;
use tracing::{info, instrument};

/// Run the formatter over the configured files and directories
#[instrument(skip_all)]
pub fn execute_format(args: &FormatArgs, out: impl Write) -> anyhow::Result<RunSummary> {
    let config = Config::from_common(&args.common).context("Invalid arguments")?;

    info!("Formatting with {} ({:?})", args.formatter, config.mode);

    let formatter = Formatter::new(
        args.formatter.clone(),
        args.style_file.clone(),
        ProcessRunner::new(config.debug),
    );

    run(&config, &formatter, out).context("Formatting stopped")
}

/// Run the literal replacement over the configured files and directories
#[instrument(skip_all)]
pub fn execute_replace(args: &ReplaceArgs, out: impl Write) -> anyhow::Result<RunSummary> {
    let config = Config::from_common(&args.common).context("Invalid arguments")?;
    let (old, new) = replacement_strings(args, config.mode).context("Invalid arguments")?;

    info!("Replacing {:?} with {:?} ({:?})", old, new, config.mode);

    let replacer = Replacer::new(old, new);
    run(&config, &replacer, out).context("Replacement stopped")
}

/// Both strings are needed to edit files; a dry run only counts them.
fn replacement_strings(args: &ReplaceArgs, mode: RunMode) -> Result<(String, String), ToolError> {
    match (&args.old_str, &args.new_str) {
        (Some(old), Some(new)) => Ok((old.clone(), new.clone())),
        (old, new) if mode.is_dry_run() => Ok((
            old.clone().unwrap_or_default(),
            new.clone().unwrap_or_default(),
        )),
        _ => Err(ToolError::validation(
            "--old-str and --new-str are both required with -run",
        )),
    }
}

/// Report a failed run and pick the process exit code.
///
/// A failing external formatter ends the program with the formatter's own
/// exit status (128 + signal when it was killed); every other failure exits
/// with 1.
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    eprintln!("Error: {err:#}");

    match err.downcast_ref::<ToolError>() {
        Some(tool_error) if tool_error.is_external_failure() => {
            println!("{INTERRUPTED_NOTICE}");
            let code = tool_error.external_exit_code().unwrap_or(1);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
        _ => ExitCode::FAILURE,
    }
}
