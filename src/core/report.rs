//! Human-readable progress and summary output
//!
//! Everything the tools promise to print on stdout goes through [`Reporter`],
//! which writes to any [`Write`] sink so runs can be captured in tests.

use crate::error::Result;
use std::io::Write;
use std::path::Path;

/// Notice printed before exiting when the external formatter fails
pub const INTERRUPTED_NOTICE: &str = "Script interrupted due to external error.";

const DRY_RUN_BANNER: [&str; 4] = [
    ">>> !!! ATTENTION !!! <<<",
    ">>> Running in test mode, no file editing is conducted.",
    ">>> Run with \"-run\" to apply after confirming the test output",
    ">>> !!! ATTENTION !!! <<<",
];

/// Line-oriented writer for progress, warnings and the final summary
#[derive(Debug)]
pub struct Reporter<W> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Verbose run header describing what is about to be processed
    pub fn header(
        &mut self,
        description: &str,
        file_count: usize,
        filters: &[String],
        dirs: &[String],
    ) -> Result<()> {
        writeln!(
            self.out,
            "-- {description}, for {file_count} files, and files matching {filters:?} under {dirs:?}"
        )?;
        Ok(())
    }

    pub fn processing_dir(&mut self, depth: usize, dir: &Path, pattern: &str) -> Result<()> {
        writeln!(
            self.out,
            "{} - processing dir: {}{}",
            "\t".repeat(depth),
            dir.display(),
            pattern
        )?;
        Ok(())
    }

    pub fn missing_dir(&mut self, dir: &Path) -> Result<()> {
        writeln!(self.out, "WARNING: directory \"{}\" does not exist", dir.display())?;
        Ok(())
    }

    pub fn processing_file(&mut self, path: &Path) -> Result<()> {
        writeln!(self.out, "\tprocessing file: {}", path.display())?;
        Ok(())
    }

    pub fn missing_file(&mut self, path: &Path) -> Result<()> {
        writeln!(self.out, "\tWARNING: file \"{}\" does not exist.", path.display())?;
        Ok(())
    }

    /// Final count, e.g. `-- File count: 3.`
    pub fn summary(&mut self, label: &str, files_processed: usize) -> Result<()> {
        writeln!(self.out, "{label}: {files_processed}.")?;
        Ok(())
    }

    pub fn dry_run_banner(&mut self) -> Result<()> {
        for line in DRY_RUN_BANNER {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(f: impl FnOnce(&mut Reporter<&mut Vec<u8>>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        let mut reporter = Reporter::new(&mut buf);
        f(&mut reporter).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_header() {
        let out = captured(|r| {
            r.header(
                "Formatting with clang-format",
                2,
                &["*.cpp".to_string()],
                &["src".to_string()],
            )
        });
        assert_eq!(
            out,
            "-- Formatting with clang-format, for 2 files, and files matching [\"*.cpp\"] under [\"src\"]\n"
        );
    }

    #[test]
    fn test_processing_dir_is_indented_by_depth() {
        let out = captured(|r| r.processing_dir(2, Path::new("src/a/"), "*.h"));
        assert_eq!(out, "\t\t - processing dir: src/a/*.h\n");
    }

    #[test]
    fn test_warnings() {
        let out = captured(|r| {
            r.missing_dir(Path::new("nowhere/"))?;
            r.missing_file(Path::new("gone.cpp"))
        });
        assert_eq!(
            out,
            "WARNING: directory \"nowhere/\" does not exist\n\tWARNING: file \"gone.cpp\" does not exist.\n"
        );
    }

    #[test]
    fn test_summary_and_banner() {
        let out = captured(|r| {
            r.summary("-- File count", 7)?;
            r.dry_run_banner()
        });
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "-- File count: 7.");
        assert_eq!(lines[1], ">>> !!! ATTENTION !!! <<<");
        assert!(lines[3].contains("-run"));
        assert_eq!(lines[4], ">>> !!! ATTENTION !!! <<<");
    }
}
