//! The closed set of supported formatter steps.

use std::fmt;

use crate::error::StepError;
use crate::options::{AutoflakeOptions, BlackOptions, IsortOptions};
use crate::tool::ToolRunner;
use crate::{autoflake, black, isort};

/// The formatters this integration knows how to drive.
///
/// Step names supplied by the user are parsed into this enumeration up
/// front; the pipeline itself never branches on strings, so an unknown
/// name can only fail request parsing, never a half-run pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatterKind {
    Black,
    Isort,
    Autoflake,
}

impl FormatterKind {
    pub const ALL: [FormatterKind; 3] = [
        FormatterKind::Black,
        FormatterKind::Isort,
        FormatterKind::Autoflake,
    ];

    /// Parse a user-supplied step name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "black" => Some(FormatterKind::Black),
            "isort" => Some(FormatterKind::Isort),
            "autoflake" => Some(FormatterKind::Autoflake),
            _ => None,
        }
    }

    /// The step name, which is also the executable the step runs.
    pub fn name(self) -> &'static str {
        match self {
            FormatterKind::Black => "black",
            FormatterKind::Isort => "isort",
            FormatterKind::Autoflake => "autoflake",
        }
    }
}

impl fmt::Display for FormatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved options for one pipeline step, binding the step to the
/// argument set its tool will run with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOptions {
    Black(BlackOptions),
    Isort(IsortOptions),
    Autoflake(AutoflakeOptions),
}

impl ToolOptions {
    pub fn kind(&self) -> FormatterKind {
        match self {
            ToolOptions::Black(_) => FormatterKind::Black,
            ToolOptions::Isort(_) => FormatterKind::Isort,
            ToolOptions::Autoflake(_) => FormatterKind::Autoflake,
        }
    }

    /// Run this step over `text`, returning the recoverable outcome or a
    /// fatal [`StepError`].
    pub fn run(&self, text: &str, runner: &dyn ToolRunner) -> Result<StepOutput, StepError> {
        match self {
            ToolOptions::Black(options) => black::run(text, options, runner),
            ToolOptions::Isort(options) => isort::run(text, options, runner),
            ToolOptions::Autoflake(options) => autoflake::run(text, options, runner),
        }
    }
}

/// Recoverable outcome of one formatter step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutput {
    /// The tool accepted the input. The carried text may be identical to
    /// the input — that is the tool's "nothing changed" signal, not an
    /// error.
    Formatted(String),
    /// The tool rejected the input as unparseable. The step's input passes
    /// through unchanged and `message` is surfaced to the user.
    Rejected { message: String },
}
