//! Whole-run orchestration shared by both tools

use crate::{
    config::{Config, RunMode},
    core::{action::FileAction, walker::TreeWalker},
    error::{Result, ToolError},
};
use std::io::Write;
use tracing::{info, instrument};

/// Outcome of a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of file actions that returned 1
    pub files_processed: usize,
    /// Mode the run was executed in
    pub mode: RunMode,
}

/// Process the explicit files, then every root directory with every filter,
/// and print the summary to `out`.
///
/// Errors from the action abort the run immediately; nothing else is printed.
#[instrument(skip_all, fields(mode = ?config.mode))]
pub fn run<A: FileAction, W: Write>(config: &Config, action: &A, out: W) -> Result<RunSummary> {
    let mut walker = TreeWalker::new(action, config.mode, config.verbose, out);

    if config.verbose {
        walker.reporter().header(
            &action.description(),
            config.files.len(),
            &config.file_filters,
            &config.dir_names(),
        )?;
    }

    let mut files_processed = config.files.iter().try_fold(0, |count, file| {
        Ok::<_, ToolError>(count + walker.process_file(file)?)
    })?;

    for dir in &config.dirs {
        for filter in &config.file_filters {
            files_processed += walker.walk(dir, filter)?;
        }
    }

    info!("Processed {} files", files_processed);

    let reporter = walker.reporter();
    reporter.summary(action.summary_label(), files_processed)?;
    if config.mode.is_dry_run() {
        reporter.dry_run_banner()?;
    }

    Ok(RunSummary {
        files_processed,
        mode: config.mode,
    })
}
