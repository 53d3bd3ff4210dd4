//! # Formatting Pipeline
//!
//! Applies the requested formatter steps in order, feeding each step's
//! output into the next step's input, and measures per-step wall time.
//!
//! The pipeline itself never touches the editor: it is a pure
//! text-in/text-out transform over resolved step options. Recoverable
//! step rejections (unparseable input) pass the step's input through and
//! are collected as diagnostics; fatal step errors abort the run with
//! nothing written anywhere.

use std::time::{Duration, Instant};

use pyformat_formatters::{FormatterKind, StepError, StepOutput, ToolOptions, ToolRunner};

/// Wall time spent in one step, in request order.
#[derive(Debug, Clone)]
pub struct StepTiming {
    pub kind: FormatterKind,
    pub elapsed: Duration,
}

/// A recoverable failure one step reported while the pipeline continued.
#[derive(Debug, Clone)]
pub struct StepDiagnostic {
    pub kind: FormatterKind,
    pub message: String,
}

/// Result of a full pipeline run.
#[derive(Debug, Clone)]
pub struct FormatOutcome {
    /// Final text, with the trailing-newline invariant preserved.
    pub text: String,
    /// Per-step timing, one entry per requested step in request order.
    pub timings: Vec<StepTiming>,
    /// Recoverable per-step failures to surface on the error channel.
    pub diagnostics: Vec<StepDiagnostic>,
    /// Whether the final text differs from the input.
    pub changed: bool,
}

/// Runs an ordered sequence of formatter steps over buffer text.
pub struct Pipeline<'a> {
    steps: Vec<ToolOptions>,
    runner: &'a dyn ToolRunner,
}

impl<'a> Pipeline<'a> {
    /// Create a pipeline from resolved step options.
    pub fn new(steps: Vec<ToolOptions>, runner: &'a dyn ToolRunner) -> Self {
        Self { steps, runner }
    }

    /// Run every step in order. An empty pipeline returns the input
    /// unchanged with no timing entries.
    pub fn run(&self, original: &str) -> Result<FormatOutcome, StepError> {
        let mut text = original.to_owned();
        let mut timings = Vec::with_capacity(self.steps.len());
        let mut diagnostics = Vec::new();

        for step in &self.steps {
            let kind = step.kind();
            let started = Instant::now();
            match step.run(&text, self.runner)? {
                StepOutput::Formatted(formatted) => text = formatted,
                StepOutput::Rejected { message } => {
                    tracing::debug!("{kind} rejected its input: {message}");
                    diagnostics.push(StepDiagnostic { kind, message });
                }
            }
            timings.push(StepTiming {
                kind,
                elapsed: started.elapsed(),
            });
        }

        let changed = text != original;
        Ok(FormatOutcome {
            text,
            timings,
            diagnostics,
            changed,
        })
    }
}
