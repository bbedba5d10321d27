//! Command-line argument parsing for both tools

use clap::{Args, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

/// Options shared by the formatter and the replacer
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Root directory of the codebase
    #[arg(value_name = "DIR")]
    pub dirs: Option<PathBuf>,

    /// Individual files to process
    #[arg(long = "files", visible_alias = "file", num_args = 1.., value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Filename filters selecting source files inside DIR
    #[arg(
        long = "file-filters",
        visible_alias = "file-filter",
        num_args = 1..,
        default_value = "*",
        value_name = "PATTERN"
    )]
    pub file_filters: Vec<String>,

    /// Apply the changes (default is a dry run that only counts files)
    #[arg(short = 'r', long = "run", visible_alias = "inplace")]
    pub run: bool,

    /// Print every directory and file as it is processed
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

/// Run an external formatter in place over all source files in a codebase
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "codebase-format")]
pub struct FormatArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Formatter executable
    #[arg(long, default_value = "clang-format", value_name = "PROGRAM")]
    pub formatter: String,

    /// Style file name the formatter should look up from each file's location
    #[arg(long = "style-file", default_value = ".clang-format", value_name = "NAME")]
    pub style_file: String,
}

/// Apply a literal string replacement to all source files in a codebase
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "codebase-replace")]
pub struct ReplaceArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// String to be replaced
    #[arg(long = "old-str", allow_hyphen_values = true, value_name = "TEXT")]
    pub old_str: Option<String>,

    /// String to put in place of the old one
    #[arg(long = "new-str", allow_hyphen_values = true, value_name = "TEXT")]
    pub new_str: Option<String>,
}

/// Options whose value is taken verbatim, even if it looks like a flag
const VERBATIM_VALUE_OPTIONS: [&str; 2] = ["--old-str", "--new-str"];

/// Rewrite the single-dash long switches `-run` and `-verbose` into the
/// `--run` / `--verbose` spelling understood by the parser.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized: Vec<OsString> = Vec::new();
    let mut after_separator = false;

    for arg in args {
        let arg = arg.into();
        let takes_verbatim = normalized
            .last()
            .and_then(|prev| prev.to_str())
            .is_some_and(|prev| VERBATIM_VALUE_OPTIONS.contains(&prev));

        let rewritten = if after_separator || takes_verbatim {
            arg
        } else {
            match arg.to_str() {
                Some("--") => {
                    after_separator = true;
                    arg
                }
                Some("-run") => OsString::from("--run"),
                Some("-verbose") => OsString::from("--verbose"),
                _ => arg,
            }
        };
        normalized.push(rewritten);
    }

    normalized
}

/// Parse formatter arguments from the process command line
pub fn parse_format_args() -> FormatArgs {
    FormatArgs::parse_from(normalize_legacy_flags(std::env::args_os()))
}

/// Parse replacer arguments from the process command line
pub fn parse_replace_args() -> ReplaceArgs {
    ReplaceArgs::parse_from(normalize_legacy_flags(std::env::args_os()))
}
