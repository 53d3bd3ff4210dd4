//! Error types for formatter execution

use thiserror::Error;

/// Fatal failure while executing a formatter step.
///
/// A `StepError` aborts the whole invocation: nothing is written back to
/// the buffer. Recoverable tool-reported conditions (unparseable input,
/// "nothing changed") are not errors; they are modeled by
/// [`StepOutput`](crate::StepOutput).
#[derive(Debug, Error)]
pub enum StepError {
    /// The formatter executable could not be found on `PATH`.
    #[error("{tool} is not installed in the formatting environment, install it with `pip install {tool}` and try again")]
    MissingTool { tool: &'static str },

    /// Spawning or talking to the formatter process failed.
    #[error("failed to run {tool}: {source}")]
    Io {
        tool: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The formatter exited with a status this integration cannot interpret.
    #[error("{tool} exited with status {code}: {message}")]
    Tool {
        tool: &'static str,
        code: i32,
        message: String,
    },

    /// The formatter was killed before producing an exit status.
    #[error("{tool} was terminated by a signal")]
    Terminated { tool: &'static str },
}
