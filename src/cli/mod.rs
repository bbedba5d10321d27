//! Command-line interface module
//!
//! Provides argument parsing and command execution for both binaries.

pub mod args;
pub mod commands;

pub use args::{parse_format_args, parse_replace_args, CommonArgs, FormatArgs, ReplaceArgs};
pub use commands::{execute_format, execute_replace, exit_code_for};
