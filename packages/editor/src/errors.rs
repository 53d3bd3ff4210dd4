//! Error types for the formatting commands

use pyformat_formatters::{FormatterKind, StepError};
use thiserror::Error;

use crate::host::HostError;

/// Everything that aborts a formatting invocation.
///
/// Each variant's display form is the one-line message written to the
/// host's error channel. None of these leave the buffer partially
/// written: the buffer is only touched after a pipeline completes.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Not in a python file.")]
    WrongFiletype,

    #[error("Pass one or more formatter names. Valid formatters are 'black', 'isort', and 'autoflake'.")]
    NoStepsRequested,

    #[error("Unknown formatter {name}. Known formatters are 'black', 'isort', and 'autoflake'.")]
    UnknownFormatter { name: String },

    #[error(transparent)]
    Step(#[from] StepError),

    #[error("buffer update failed: {0}")]
    Host(#[from] HostError),
}

impl FormatError {
    /// Parse an ordered list of user-supplied step names, failing on the
    /// first unknown one.
    pub fn parse_steps(names: &[String]) -> Result<Vec<FormatterKind>, FormatError> {
        names
            .iter()
            .map(|name| {
                FormatterKind::from_name(name).ok_or_else(|| FormatError::UnknownFormatter {
                    name: name.clone(),
                })
            })
            .collect()
    }
}
