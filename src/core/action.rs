//! Per-file operation shared by the tree walker

use crate::error::Result;
use std::path::Path;

/// Tool-specific edit applied to one existing regular file.
///
/// Existence checks, progress output and dry-run handling live in
/// [`TreeWalker`](crate::core::TreeWalker); implementations only perform the
/// edit itself and are called in apply mode exclusively.
pub trait FileAction {
    /// Short description used in the verbose run header
    fn description(&self) -> String;

    /// Leading text of the summary line, followed by `: <count>.`
    fn summary_label(&self) -> &'static str;

    /// Edit `path` in place
    fn apply(&self, path: &Path) -> Result<()>;
}
