//! Core functionality shared by both tools
//!
//! Contains the recursive tree walker, the per-file action trait with its
//! formatter and replacer implementations, and run reporting.

pub mod action;
pub mod formatter;
pub mod replacer;
pub mod report;
pub mod runner;
pub mod walker;

pub use action::FileAction;
pub use formatter::Formatter;
pub use replacer::Replacer;
pub use report::Reporter;
pub use runner::{run, RunSummary};
pub use walker::TreeWalker;
