//! Binding for autoflake, the unused-import remover.
//!
//! autoflake reads the buffer from stdin (`-`) and writes the cleaned
//! result to stdout. A nonzero exit is treated like the other tools'
//! parse rejections: recoverable, with the input passing through.

use crate::error::StepError;
use crate::kind::StepOutput;
use crate::options::AutoflakeOptions;
use crate::tool::{stderr_excerpt, ToolInvocation, ToolRunner};

pub(crate) fn run(
    text: &str,
    options: &AutoflakeOptions,
    runner: &dyn ToolRunner,
) -> Result<StepOutput, StepError> {
    let invocation = ToolInvocation {
        program: "autoflake",
        args: options.to_args(),
    };
    let output = runner.run(&invocation, text)?;
    match output.status {
        Some(0) => Ok(StepOutput::Formatted(output.stdout)),
        Some(_) => Ok(StepOutput::Rejected {
            message: stderr_excerpt(&output.stderr),
        }),
        None => Err(StepError::Terminated { tool: "autoflake" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::ToolOutput;

    struct CannedRunner(ToolOutput);

    impl ToolRunner for CannedRunner {
        fn run(&self, _: &ToolInvocation, _: &str) -> Result<ToolOutput, StepError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_success_carries_stdout() {
        let runner = CannedRunner(ToolOutput::ok("import a\n\na\n"));
        let output = run(
            "import a\nimport b\n\na\n",
            &AutoflakeOptions::default(),
            &runner,
        )
        .unwrap();
        assert_eq!(output, StepOutput::Formatted("import a\n\na\n".to_owned()));
    }

    #[test]
    fn test_nonzero_status_is_recoverable() {
        let runner = CannedRunner(ToolOutput::failed(1, "SyntaxError: invalid syntax\n"));
        let output = run("def f(:\n", &AutoflakeOptions::default(), &runner).unwrap();
        assert_eq!(
            output,
            StepOutput::Rejected {
                message: "SyntaxError: invalid syntax".to_owned()
            }
        );
    }
}
