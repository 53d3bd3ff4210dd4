//! # Command Entry Points
//!
//! The two editor-facing commands. Each is a stateless request/response
//! cycle: check preconditions, resolve options, run the pipeline, sync the
//! buffer, report. Every failure becomes a one-line message on the host
//! error channel; nothing unwinds across the host boundary, so a broken
//! formatter can never take the editor down with it.
//!
//! The host may expose fire-and-forget and blocking ("sync") variants of
//! each command; both dispatch to the same function here and execute the
//! identical linear sequence.

use std::time::Instant;

use pyformat_formatters::{FormatterKind, ToolRunner};

use crate::errors::FormatError;
use crate::host::Host;
use crate::pipeline::Pipeline;
use crate::report::render_report;
use crate::{options, sync};

/// The general pipeline command: apply the named steps in order.
pub fn pyformat(host: &mut dyn Host, runner: &dyn ToolRunner, step_names: &[String]) {
    if let Err(error) = run_pyformat(&mut *host, runner, step_names) {
        host.write_err(&format!("{error}\n"));
    }
}

/// The fixed-chain command: black followed by isort.
pub fn black_isort(host: &mut dyn Host, runner: &dyn ToolRunner) {
    if let Err(error) = run_black_isort(&mut *host, runner) {
        host.write_err(&format!("{error}\n"));
    }
}

fn run_pyformat(
    host: &mut dyn Host,
    runner: &dyn ToolRunner,
    step_names: &[String],
) -> Result<(), FormatError> {
    ensure_python(&mut *host)?;
    if step_names.is_empty() {
        return Err(FormatError::NoStepsRequested);
    }
    let steps = FormatError::parse_steps(step_names)?;
    run_steps(host, runner, "PyFormat", &steps)
}

fn run_black_isort(host: &mut dyn Host, runner: &dyn ToolRunner) -> Result<(), FormatError> {
    ensure_python(&mut *host)?;
    run_steps(
        host,
        runner,
        "BlackIsort",
        &[FormatterKind::Black, FormatterKind::Isort],
    )
}

fn run_steps(
    host: &mut dyn Host,
    runner: &dyn ToolRunner,
    label: &str,
    steps: &[FormatterKind],
) -> Result<(), FormatError> {
    let started = Instant::now();

    let mut resolved = Vec::with_capacity(steps.len());
    for kind in steps {
        resolved.push(options::resolve(*kind, &mut *host));
    }

    let original = host.buffer_text();
    let outcome = Pipeline::new(resolved, runner).run(&original)?;

    for diagnostic in &outcome.diagnostics {
        host.write_err(&format!("{}: {}\n", diagnostic.kind, diagnostic.message));
    }

    let status = sync::sync_buffer(&mut *host, &outcome)?;
    let report = render_report(label, status, started.elapsed(), &outcome.timings);
    host.write_out(&format!("{report}\n"));
    Ok(())
}

fn ensure_python(host: &mut dyn Host) -> Result<(), FormatError> {
    if host.filetype() == "python" {
        Ok(())
    } else {
        Err(FormatError::WrongFiletype)
    }
}
