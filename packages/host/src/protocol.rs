//! Line-delimited JSON protocol between the editor and the plugin.
//!
//! Each message is one JSON object per line. The editor drives the plugin
//! with `invoke` messages; while an invocation runs, the plugin asks for
//! host capabilities with `request` messages and the editor answers each
//! with a `response` carrying the same `id`. Informational and error
//! output travel as `write_out`/`write_err` requests so their ordering
//! relative to buffer mutations is preserved. A `done` message closes each
//! invocation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Messages the editor sends to the plugin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EditorMessage {
    /// Invoke a plugin command, e.g. `pyformat` with step names.
    Invoke {
        command: String,
        #[serde(default)]
        args: Vec<String>,
    },
    /// Answer to a pending plugin request.
    Response {
        id: u64,
        #[serde(default)]
        result: Value,
        /// Set when the editor refused the request (e.g. an out-of-range
        /// cursor position).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<String>,
    },
}

/// Messages the plugin sends to the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PluginMessage {
    /// Ask the editor for a host capability.
    Request {
        id: u64,
        method: String,
        #[serde(default, skip_serializing_if = "Value::is_null")]
        params: Value,
    },
    /// An invocation finished; any failure was already reported through
    /// `write_err`.
    Done { command: String },
}

/// Transport-level failure. Formatter failures never surface here — they
/// are reported through the host's error channel; this is for a broken or
/// misbehaving editor connection.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("transport error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed message {line:?}: {source}")]
    Decode {
        line: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("editor connection failed: {0}")]
    Transport(String),
}
