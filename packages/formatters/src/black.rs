//! Binding for black, the style formatter.
//!
//! black reads the buffer from stdin (`-`) and writes the canonical form
//! to stdout. It distinguishes "cannot parse this source" from real
//! failures with a dedicated exit status, which maps onto the recoverable
//! [`StepOutput::Rejected`] outcome: the step's input passes through and a
//! one-line excerpt reaches the user.

use crate::error::StepError;
use crate::kind::StepOutput;
use crate::options::BlackOptions;
use crate::tool::{stderr_excerpt, ToolInvocation, ToolRunner};

/// Exit status black uses for source it cannot parse.
const EXIT_INVALID_INPUT: i32 = 123;

pub(crate) fn run(
    text: &str,
    options: &BlackOptions,
    runner: &dyn ToolRunner,
) -> Result<StepOutput, StepError> {
    let invocation = ToolInvocation {
        program: "black",
        args: options.to_args(),
    };
    let output = runner.run(&invocation, text)?;
    match output.status {
        Some(0) => Ok(StepOutput::Formatted(output.stdout)),
        Some(EXIT_INVALID_INPUT) => Ok(StepOutput::Rejected {
            message: stderr_excerpt(&output.stderr),
        }),
        Some(code) => Err(StepError::Tool {
            tool: "black",
            code,
            message: stderr_excerpt(&output.stderr),
        }),
        None => Err(StepError::Terminated { tool: "black" }),
    }
}
