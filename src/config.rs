//! Configuration management for the codebase tools
//!
//! Normalizes parsed arguments into the settings shared by both tools and
//! validates them before any file is touched.

use crate::{cli::CommonArgs, error::ToolError};
use std::path::PathBuf;

/// Whether file actions only count matches or really edit files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Count the files that would be processed, leave them untouched
    #[default]
    DryRun,
    /// Edit files in place
    Apply,
}

impl RunMode {
    /// Map the `-run` switch to a mode
    #[must_use]
    pub const fn from_run_flag(run: bool) -> Self {
        if run { Self::Apply } else { Self::DryRun }
    }

    #[must_use]
    pub const fn is_dry_run(self) -> bool {
        matches!(self, Self::DryRun)
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Enable debug logging
    pub debug: bool,
    /// Print progress trace lines
    pub verbose: bool,
    /// Dry-run or apply
    pub mode: RunMode,
    /// Root directories to scan (zero or one entry)
    pub dirs: Vec<PathBuf>,
    /// Individual files to process
    pub files: Vec<PathBuf>,
    /// Filename glob filters applied inside every root directory
    pub file_filters: Vec<String>,
}

/// Filter used when none is given on the command line
pub const DEFAULT_FILE_FILTER: &str = "*";

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            verbose: false,
            mode: RunMode::default(),
            dirs: Vec::new(),
            files: Vec::new(),
            file_filters: vec![DEFAULT_FILE_FILTER.to_string()],
        }
    }
}

impl Config {
    /// Create configuration from the arguments shared by both tools
    pub fn from_common(args: &CommonArgs) -> Result<Self, ToolError> {
        let config = Self {
            debug: args.debug,
            verbose: args.verbose,
            mode: RunMode::from_run_flag(args.run),
            dirs: args.dirs.iter().cloned().collect(),
            files: args.files.clone(),
            file_filters: args.file_filters.clone(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ToolError> {
        if self.file_filters.is_empty() {
            return Err(ToolError::validation("At least one file filter is required"));
        }

        for filter in &self.file_filters {
            // Subdirectories are already walked one by one; a recursive
            // filter would count nested files again at every level.
            if filter.contains("**") {
                return Err(ToolError::validation(format!(
                    "File filter '{filter}' must not contain '**'"
                )));
            }
            glob::Pattern::new(filter).map_err(|e| ToolError::pattern(filter.clone(), e))?;
        }

        Ok(())
    }

    /// Directories rendered for the verbose header
    pub fn dir_names(&self) -> Vec<String> {
        self.dirs
            .iter()
            .map(|dir| dir.display().to_string())
            .collect()
    }
}
