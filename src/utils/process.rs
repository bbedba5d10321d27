//! Process execution utilities
//!
//! Runs external tools synchronously with inherited output streams.

use crate::error::{Result, ToolError};
use std::ffi::OsStr;
use std::fmt::Debug;
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, info, instrument};

/// Utility for running external processes
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    debug: bool,
}

impl ProcessRunner {
    /// Create a new process runner
    #[must_use]
    pub const fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// Run a command with arguments, inheriting stdout/stderr, and wait for it.
    ///
    /// A non-zero exit becomes [`ToolError::Process`] carrying the exit code.
    #[instrument(skip(self))]
    pub fn run_command<S>(&self, command: &str, args: &[S]) -> Result<()>
    where
        S: AsRef<OsStr> + Debug,
    {
        let cmd_str = command_line(command, args);

        if self.debug {
            debug!("Running command: {}", cmd_str);
        } else {
            info!("+ {}", cmd_str);
        }

        let status = Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ToolError::spawn(cmd_str.clone(), e))?;

        if !status.success() {
            return Err(ToolError::process(
                cmd_str,
                exit_code(status),
                format!("Command failed: {status}"),
            ));
        }

        debug!("Command completed successfully");
        Ok(())
    }
}

impl Default for ProcessRunner {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Exit code of a finished process. A process killed by a signal reports
/// `128 + signal`, as shells do.
fn exit_code(status: ExitStatus) -> Option<i32> {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return Some(128 + signal);
        }
    }
    status.code()
}

fn command_line<S: AsRef<OsStr>>(command: &str, args: &[S]) -> String {
    let mut line = command.to_string();
    for arg in args {
        line.push(' ');
        line.push_str(&arg.as_ref().to_string_lossy());
    }
    line
}
