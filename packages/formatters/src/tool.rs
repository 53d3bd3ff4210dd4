//! Subprocess plumbing shared by all formatter bindings.
//!
//! Every formatter is driven the same way: spawn the tool with a rendered
//! argument list, feed the buffer through stdin, collect stdout/stderr and
//! the exit status. [`ToolRunner`] is the seam tests use to substitute
//! canned tool behavior for real subprocesses.

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::StepError;

/// A fully rendered tool invocation: program name plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: &'static str,
    pub args: Vec<String>,
}

/// Captured result of one tool run.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit code, `None` when the process was killed by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// Successful output carrying `stdout`. Mostly useful for test doubles.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed output carrying `stderr`. Mostly useful for test doubles.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            status: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }
}

/// Executes tool invocations.
///
/// [`SystemRunner`] is the real implementation; tests provide their own to
/// simulate formatters without spawning processes.
pub trait ToolRunner {
    fn run(&self, invocation: &ToolInvocation, input: &str) -> Result<ToolOutput, StepError>;
}

/// Runs tools as real subprocesses with piped stdio.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, invocation: &ToolInvocation, input: &str) -> Result<ToolOutput, StepError> {
        let tool = invocation.program;
        let mut child = Command::new(tool)
            .args(&invocation.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| match source.kind() {
                std::io::ErrorKind::NotFound => StepError::MissingTool { tool },
                _ => StepError::Io { tool, source },
            })?;

        // Feed stdin from a separate thread: the tool may fill its stdout
        // pipe before draining stdin, and a write-then-read sequence on one
        // thread would deadlock on large buffers.
        let mut stdin = child.stdin.take().expect("child stdin was piped");
        let buffer = input.to_owned();
        let writer = std::thread::spawn(move || {
            // A tool that exits before draining stdin closes the pipe; the
            // interesting failure is its exit status, not the EPIPE.
            let _ = stdin.write_all(buffer.as_bytes());
        });

        let output = child
            .wait_with_output()
            .map_err(|source| StepError::Io { tool, source })?;
        let _ = writer.join();

        tracing::debug!(
            "{tool} exited with {:?} ({} bytes of output)",
            output.status.code(),
            output.stdout.len()
        );

        Ok(ToolOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Last non-empty line of a tool's stderr, used to surface a parse failure
/// to the user as a single-line excerpt.
pub fn stderr_excerpt(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("no error output")
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_takes_last_nonempty_line() {
        let stderr = "Traceback (most recent call last):\n  ...\nerror: cannot format -: Cannot parse: 3:0\n\n";
        assert_eq!(stderr_excerpt(stderr), "error: cannot format -: Cannot parse: 3:0");
    }

    #[test]
    fn test_excerpt_of_empty_stderr() {
        assert_eq!(stderr_excerpt(""), "no error output");
        assert_eq!(stderr_excerpt("\n  \n"), "no error output");
    }
}
