//! Binding for isort, the import sorter.
//!
//! isort reads the buffer from stdin (`-`) and writes the sorted result to
//! stdout. It only needs the import statements to parse, not the whole
//! file; when it does give up on the input it exits nonzero, and that
//! status — isort's own signal, not another tool's — maps onto the
//! recoverable [`StepOutput::Rejected`] outcome.

use crate::error::StepError;
use crate::kind::StepOutput;
use crate::options::IsortOptions;
use crate::tool::{stderr_excerpt, ToolInvocation, ToolRunner};

pub(crate) fn run(
    text: &str,
    options: &IsortOptions,
    runner: &dyn ToolRunner,
) -> Result<StepOutput, StepError> {
    let invocation = ToolInvocation {
        program: "isort",
        args: options.to_args(),
    };
    let output = runner.run(&invocation, text)?;
    match output.status {
        Some(0) => Ok(StepOutput::Formatted(output.stdout)),
        Some(_) => Ok(StepOutput::Rejected {
            message: stderr_excerpt(&output.stderr),
        }),
        None => Err(StepError::Terminated { tool: "isort" }),
    }
}
