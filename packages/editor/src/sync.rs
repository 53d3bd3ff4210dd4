//! # Buffer Synchronizer
//!
//! Writes the pipeline result back into the editor, preserving the cursor.
//!
//! The comparison is exact string equality. An unchanged result makes no
//! host calls beyond the comparison — the buffer is not replaced and the
//! cursor is neither read nor written. A changed result replaces the whole
//! buffer and then restores the captured cursor position, clamping to
//! (last line, column 0) when the editor rejects it because the buffer
//! shrank. The clamp is deterministic and never propagates a host error.

use crate::host::{CursorPosition, Host, HostError};
use crate::pipeline::FormatOutcome;
use crate::report::FormatStatus;

/// Split pipeline text back into buffer lines, dropping the single empty
/// segment produced by the trailing newline.
pub fn split_buffer_lines(text: &str) -> Vec<String> {
    let mut lines: Vec<String> = text.split('\n').map(str::to_owned).collect();
    if lines.last().map(String::is_empty).unwrap_or(false) {
        lines.pop();
    }
    lines
}

/// Write `outcome` back into the host buffer if it changed anything.
pub fn sync_buffer(host: &mut dyn Host, outcome: &FormatOutcome) -> Result<FormatStatus, HostError> {
    if !outcome.changed {
        return Ok(FormatStatus::Unchanged);
    }

    let cursor = host.cursor();
    let lines = split_buffer_lines(&outcome.text);
    let line_count = lines.len();
    host.replace_buffer(lines)?;

    if host.set_cursor(cursor).is_err() {
        // The buffer shrank past the cursor; park it on the last line.
        let clamped = CursorPosition {
            line: line_count.max(1),
            column: 0,
        };
        if let Err(error) = host.set_cursor(clamped) {
            tracing::warn!("host rejected clamped cursor {clamped:?}: {error}");
        }
    }

    Ok(FormatStatus::Formatted)
}
