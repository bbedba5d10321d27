//! In-place formatting through an external formatter

use crate::{core::action::FileAction, error::Result, utils::process::ProcessRunner};
use std::ffi::OsString;
use std::path::Path;
use tracing::instrument;

/// Runs `<program> <file> -style=file -assume-filename=<style file> -i`
#[derive(Debug, Clone)]
pub struct Formatter {
    program: String,
    style_file: String,
    process_runner: ProcessRunner,
}

impl Formatter {
    #[must_use]
    pub const fn new(program: String, style_file: String, process_runner: ProcessRunner) -> Self {
        Self {
            program,
            style_file,
            process_runner,
        }
    }

    /// Formatter arguments for one file
    pub fn arguments(&self, path: &Path) -> Vec<OsString> {
        vec![
            path.as_os_str().to_os_string(),
            OsString::from("-style=file"),
            OsString::from(format!("-assume-filename={}", self.style_file)),
            OsString::from("-i"),
        ]
    }
}

impl FileAction for Formatter {
    fn description(&self) -> String {
        format!("Formatting with {}", self.program)
    }

    fn summary_label(&self) -> &'static str {
        "-- Conversion done. File count"
    }

    #[instrument(skip(self))]
    fn apply(&self, path: &Path) -> Result<()> {
        self.process_runner
            .run_command(&self.program, &self.arguments(path))
    }
}
