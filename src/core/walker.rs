//! Recursive directory traversal
//!
//! Visits files matching a filename filter in a directory and in every
//! directory nested below it, handing each regular file to a [`FileAction`]
//! and folding the processed-file count back up to the caller.

use crate::{
    config::RunMode,
    core::{action::FileAction, report::Reporter},
    error::{Result, ToolError},
    utils::fs::{with_trailing_separator, FileSystemUtils},
};
use glob::MatchOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Shell-like matching: `*` stays inside one path component and never picks
/// up hidden entries.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Walks directory trees and applies a [`FileAction`] to matching files
pub struct TreeWalker<'a, A, W> {
    action: &'a A,
    mode: RunMode,
    verbose: bool,
    reporter: Reporter<W>,
    fs_utils: FileSystemUtils,
}

impl<'a, A: FileAction, W: Write> TreeWalker<'a, A, W> {
    /// Create a walker that reports progress to `out`
    pub const fn new(action: &'a A, mode: RunMode, verbose: bool, out: W) -> Self {
        Self {
            action,
            mode,
            verbose,
            reporter: Reporter::new(out),
            fs_utils: FileSystemUtils::new(),
        }
    }

    pub fn reporter(&mut self) -> &mut Reporter<W> {
        &mut self.reporter
    }

    /// Process one file. Returns 1 when the file was (or in a dry run would
    /// be) processed and 0 when `path` is not a regular file.
    #[instrument(skip(self))]
    pub fn process_file(&mut self, path: &Path) -> Result<usize> {
        if !self.fs_utils.is_file(path) {
            debug!("Skipping missing file: {}", path.display());
            if self.verbose {
                self.reporter.missing_file(path)?;
            }
            return Ok(0);
        }

        if self.verbose {
            self.reporter.processing_file(path)?;
        }

        if self.mode.is_dry_run() {
            return Ok(1);
        }

        self.action.apply(path)?;
        Ok(1)
    }

    /// Process every file in `dir` matching `pattern`, then recurse into all
    /// directories below it.
    ///
    /// Each nested walk enumerates its own descendants again, so a file `k`
    /// levels below `dir` is visited `2^(k-1)` times. Symlink loops are not
    /// detected.
    pub fn walk(&mut self, dir: &Path, pattern: &str) -> Result<usize> {
        self.walk_at_depth(dir, pattern, 0)
    }

    #[instrument(skip(self))]
    fn walk_at_depth(&mut self, dir: &Path, pattern: &str, depth: usize) -> Result<usize> {
        let dir = with_trailing_separator(dir);

        if !self.fs_utils.is_dir(&dir) {
            self.reporter.missing_dir(&dir)?;
            return Ok(0);
        }

        if self.verbose {
            self.reporter.processing_dir(depth, &dir, pattern)?;
        }

        let mut file_count = 0;
        for path in self.matching_files(&dir, pattern)? {
            if self.fs_utils.is_file(&path) {
                file_count += self.process_file(&path)?;
            }
        }

        for subdir in self.nested_dirs(&dir)? {
            file_count += self.walk_at_depth(&subdir, pattern, depth + 1)?;
        }

        debug!("Processed {} files under {}", file_count, dir.display());
        Ok(file_count)
    }

    /// Direct children of `dir` whose name matches `pattern`
    fn matching_files(&self, dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        self.glob_in(dir, pattern)
    }

    /// Every directory below `dir`, at any depth, excluding `dir` itself
    fn nested_dirs(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let entries = self.glob_in(dir, "**/*")?;
        Ok(entries
            .into_iter()
            .filter(|path| self.fs_utils.is_dir(path))
            .collect())
    }

    /// Expand `pattern` relative to `dir`, matching the directory part literally
    fn glob_in(&self, dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
        let full_pattern = format!(
            "{}{}",
            glob::Pattern::escape(&dir.to_string_lossy()),
            pattern
        );
        debug!("Expanding glob: {}", full_pattern);

        let paths = glob::glob_with(&full_pattern, MATCH_OPTIONS)
            .map_err(|e| ToolError::pattern(pattern, e))?;

        let mut matches = Vec::new();
        for path_result in paths {
            match path_result {
                Ok(path) => matches.push(path),
                Err(e) => warn!("Error reading path for pattern {}: {}", full_pattern, e),
            }
        }
        Ok(matches)
    }
}
