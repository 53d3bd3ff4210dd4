//! # Stdio Bridge
//!
//! Runs the plugin as a child process of the editor: a synchronous loop
//! reads `invoke` messages from stdin and answers plugin-side host
//! requests over stdout. One invocation runs at a time — the editor
//! serializes commands — and both the fire-and-forget and the `_sync`
//! command variants execute the same sequence; the suffix only changes
//! how the editor waits on its side.
//!
//! Host getters are infallible in the [`Host`] trait, so a transport
//! failure mid-request cannot unwind through the formatting logic.
//! Instead it poisons the bridge: the current invocation finishes against
//! null values (aborting on a precondition), and the loop then exits with
//! a [`ProtocolError`] for the editor to restart the bridge.

use std::io::{BufRead, Write};

use pyformat_editor::{black_isort, pyformat, CursorPosition, Host, HostError};
use pyformat_formatters::ToolRunner;
use serde_json::{json, Value};

use crate::protocol::{EditorMessage, PluginMessage, ProtocolError};

pub struct StdioHost<R, W> {
    reader: R,
    writer: W,
    next_id: u64,
    poisoned: Option<String>,
}

impl<R: BufRead, W: Write> StdioHost<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            next_id: 0,
            poisoned: None,
        }
    }

    /// Read the next message, skipping blank lines. `None` on EOF.
    fn read_message(&mut self) -> Result<Option<EditorMessage>, ProtocolError> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            return serde_json::from_str(trimmed)
                .map(Some)
                .map_err(|source| ProtocolError::Decode {
                    line: trimmed.to_owned(),
                    source,
                });
        }
    }

    fn send(&mut self, message: &PluginMessage) -> Result<(), ProtocolError> {
        let encoded = serde_json::to_string(message)
            .expect("plugin messages always serialize");
        writeln!(self.writer, "{encoded}")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Issue one host request and block for its response.
    ///
    /// An `error` response is an application-level refusal (e.g. invalid
    /// cursor) and leaves the bridge healthy; transport failures poison it.
    fn call(&mut self, method: &str, params: Value) -> Result<Value, HostError> {
        if let Some(reason) = &self.poisoned {
            return Err(HostError::Request(reason.clone()));
        }

        let id = self.next_id;
        self.next_id += 1;
        if let Err(error) = self.send(&PluginMessage::Request {
            id,
            method: method.to_owned(),
            params,
        }) {
            return Err(self.poison(error.to_string()));
        }

        match self.read_message() {
            Ok(Some(EditorMessage::Response {
                id: response_id,
                result,
                error,
            })) if response_id == id => match error {
                Some(message) => Err(HostError::Request(message)),
                None => Ok(result),
            },
            Ok(Some(other)) => Err(self.poison(format!(
                "expected response to request {id}, got {other:?}"
            ))),
            Ok(None) => Err(self.poison("editor closed the connection".to_owned())),
            Err(error) => Err(self.poison(error.to_string())),
        }
    }

    fn poison(&mut self, reason: String) -> HostError {
        tracing::error!("bridge poisoned: {reason}");
        self.poisoned = Some(reason.clone());
        HostError::Request(reason)
    }

    /// For getters: a failed call degrades to null, which the formatting
    /// logic treats as "unset" and aborts on a precondition.
    fn call_or_null(&mut self, method: &str, params: Value) -> Value {
        self.call(method, params).unwrap_or(Value::Null)
    }
}

impl<R: BufRead, W: Write> Host for StdioHost<R, W> {
    fn filetype(&mut self) -> String {
        self.call_or_null("filetype", Value::Null)
            .as_str()
            .unwrap_or_default()
            .to_owned()
    }

    fn buffer_name(&mut self) -> Option<String> {
        match self.call_or_null("buffer_name", Value::Null) {
            Value::String(name) => Some(name),
            _ => None,
        }
    }

    fn buffer_lines(&mut self) -> Vec<String> {
        let value = self.call_or_null("buffer_lines", Value::Null);
        serde_json::from_value(value).unwrap_or_default()
    }

    fn text_width(&mut self) -> i64 {
        self.call_or_null("text_width", Value::Null)
            .as_i64()
            .unwrap_or(0)
    }

    fn user_options(&mut self, tool: &str) -> Option<Value> {
        match self.call_or_null("user_options", json!([tool])) {
            Value::Null => None,
            value => Some(value),
        }
    }

    fn cursor(&mut self) -> CursorPosition {
        let value = self.call_or_null("cursor", Value::Null);
        serde_json::from_value(value).unwrap_or(CursorPosition { line: 1, column: 0 })
    }

    fn set_cursor(&mut self, position: CursorPosition) -> Result<(), HostError> {
        let params = serde_json::to_value(position).expect("cursor serializes");
        self.call("set_cursor", params).map(|_| ())
    }

    fn replace_buffer(&mut self, lines: Vec<String>) -> Result<(), HostError> {
        self.call("replace_buffer", json!(lines)).map(|_| ())
    }

    fn write_out(&mut self, message: &str) {
        let _ = self.call("write_out", json!(message));
    }

    fn write_err(&mut self, message: &str) {
        let _ = self.call("write_err", json!(message));
    }
}

/// Serve invocations until the editor closes stdin.
pub fn run<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    runner: &dyn ToolRunner,
) -> Result<(), ProtocolError> {
    let mut host = StdioHost::new(reader, writer);

    while let Some(message) = host.read_message()? {
        match message {
            EditorMessage::Invoke { command, args } => {
                tracing::info!("invoking {command} {args:?}");
                match command.as_str() {
                    "pyformat" | "pyformat_sync" => pyformat(&mut host, runner, &args),
                    "black_isort" | "black_isort_sync" => black_isort(&mut host, runner),
                    other => {
                        host.write_err(&format!("Unknown command {other}.\n"));
                    }
                }
                if let Some(reason) = host.poisoned.take() {
                    return Err(ProtocolError::Transport(reason));
                }
                host.send(&PluginMessage::Done { command })?;
            }
            EditorMessage::Response { id, .. } => {
                tracing::warn!("dropping response {id} with no pending request");
            }
        }
    }
    Ok(())
}
