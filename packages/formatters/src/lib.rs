//! # PyFormat Formatters
//!
//! Subprocess bindings for the three Python formatters the plugin drives:
//!
//! - **black** — style formatter (whitespace/layout normalization)
//! - **isort** — import sorter
//! - **autoflake** — unused-import remover
//!
//! All formatting decisions live inside the tools; this crate only knows
//! how to talk to them. Each binding renders a typed option structure into
//! the tool's command-line arguments, pipes the buffer text through the
//! tool's stdin, and maps the exit status onto a small outcome space:
//!
//! - [`StepOutput::Formatted`] — accepted input, stdout feeds the next step
//! - [`StepOutput::Rejected`] — tool-reported parse failure, recoverable
//! - [`StepError`] — missing tool or broken process, fatal for the run
//!
//! The set of supported steps is the closed [`FormatterKind`] enumeration;
//! an unknown step name is an error value at parse time, never a runtime
//! branch inside the pipeline.

mod autoflake;
mod black;
mod error;
mod isort;
mod kind;
mod options;
mod tool;

pub use error::StepError;
pub use kind::{FormatterKind, StepOutput, ToolOptions};
pub use options::{AutoflakeOptions, BlackOptions, IsortOptions};
pub use tool::{stderr_excerpt, SystemRunner, ToolInvocation, ToolOutput, ToolRunner};
