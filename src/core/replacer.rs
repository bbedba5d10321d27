//! Literal, line-oriented string replacement

use crate::{core::action::FileAction, error::Result, utils::fs::FileSystemUtils};
use std::path::Path;
use tracing::{debug, instrument};

/// Replaces every occurrence of one literal string with another
#[derive(Debug, Clone)]
pub struct Replacer {
    old: String,
    new: String,
    fs_utils: FileSystemUtils,
}

impl Replacer {
    #[must_use]
    pub const fn new(old: String, new: String) -> Self {
        Self {
            old,
            new,
            fs_utils: FileSystemUtils::new(),
        }
    }
}

/// Replace `old` with `new` in each line of `content` separately.
///
/// Line terminators are kept, so an occurrence broken across a newline is
/// never matched.
pub fn replace_per_line(content: &str, old: &str, new: &str) -> String {
    content
        .split_inclusive('\n')
        .map(|line| line.replace(old, new))
        .collect()
}

impl FileAction for Replacer {
    fn description(&self) -> String {
        format!("Replacing {:?} with {:?}", self.old, self.new)
    }

    fn summary_label(&self) -> &'static str {
        "-- File count"
    }

    /// Rewrites the file in place. Truncate-then-write: no backup is kept and
    /// an interrupted write can lose data.
    #[instrument(skip(self))]
    fn apply(&self, path: &Path) -> Result<()> {
        let content = self.fs_utils.read_file_to_string(path)?;
        let replaced = replace_per_line(&content, &self.old, &self.new);
        debug!(
            "Rewriting {} ({} -> {} bytes)",
            path.display(),
            content.len(),
            replaced.len()
        );
        self.fs_utils.overwrite_file(path, replaced)
    }
}
