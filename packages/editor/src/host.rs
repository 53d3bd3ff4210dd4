//! # Host Capabilities
//!
//! The minimal capability set the plugin needs from the editor, modeled as
//! an explicit trait value passed into every command instead of a shared
//! editor handle. The plugin host itself (buffer model, option storage,
//! command dispatch) is an external collaborator; implementations of this
//! trait adapt it.
//!
//! Getters are infallible: a broken transport is the embedding's problem
//! to surface (see the stdio bridge), not something the formatting logic
//! branches on. The two buffer mutators are fallible because the editor
//! can legitimately refuse them — a rejected cursor position is the signal
//! the synchronizer uses to clamp.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Cursor position as the host editor reports it: 1-based line,
/// 0-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Failure reported by the host for a buffer mutation.
#[derive(Debug, Error)]
pub enum HostError {
    /// The editor rejected the cursor position (e.g. past the last line).
    #[error("cursor position is outside the buffer")]
    InvalidCursor,

    /// The host request itself failed.
    #[error("host request failed: {0}")]
    Request(String),
}

/// Capabilities the plugin needs from the host editor.
pub trait Host {
    /// Filetype of the current buffer (e.g. `"python"`).
    fn filetype(&mut self) -> String;

    /// Name (path) of the current buffer, if it has one.
    fn buffer_name(&mut self) -> Option<String>;

    /// The buffer content as an ordered sequence of lines, without
    /// trailing newlines.
    fn buffer_lines(&mut self) -> Vec<String>;

    /// The buffer's text-width setting; zero or negative means unset.
    fn text_width(&mut self) -> i64;

    /// User-configured option overrides for one tool, as a JSON value,
    /// or `None` when the user configured nothing.
    fn user_options(&mut self, tool: &str) -> Option<serde_json::Value>;

    /// Current cursor position.
    fn cursor(&mut self) -> CursorPosition;

    /// Move the cursor; the host rejects positions outside the buffer.
    fn set_cursor(&mut self, position: CursorPosition) -> Result<(), HostError>;

    /// Replace the entire buffer content.
    fn replace_buffer(&mut self, lines: Vec<String>) -> Result<(), HostError>;

    /// Write to the user-facing informational channel.
    fn write_out(&mut self, message: &str);

    /// Write to the user-facing error channel.
    fn write_err(&mut self, message: &str);

    /// Buffer content as a single string: lines joined with `\n` plus one
    /// trailing `\n`. This is the form the pipeline works on.
    fn buffer_text(&mut self) -> String {
        let mut text = self.buffer_lines().join("\n");
        text.push('\n');
        text
    }
}
