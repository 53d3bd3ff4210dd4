//! Human-readable result line: overall status, total elapsed time, and a
//! per-step breakdown in request order.

use std::fmt;
use std::time::Duration;

use crate::pipeline::StepTiming;

/// Whether the invocation changed the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatStatus {
    Formatted,
    Unchanged,
}

impl fmt::Display for FormatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatStatus::Formatted => f.write_str("Formatted"),
            FormatStatus::Unchanged => f.write_str("Unchanged"),
        }
    }
}

/// Render the one-line timing summary, e.g.
/// `PyFormat: Formatted in 92ms (black 80ms, isort 12ms).`
pub fn render_report(
    label: &str,
    status: FormatStatus,
    total: Duration,
    timings: &[StepTiming],
) -> String {
    if timings.is_empty() {
        return format!("{label}: {status} in {}ms.", millis(total));
    }
    let breakdown = timings
        .iter()
        .map(|timing| format!("{} {}ms", timing.kind, millis(timing.elapsed)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{label}: {status} in {}ms ({breakdown}).", millis(total))
}

/// Milliseconds rounded to the nearest integer.
fn millis(duration: Duration) -> u64 {
    (duration.as_secs_f64() * 1000.0).round() as u64
}
