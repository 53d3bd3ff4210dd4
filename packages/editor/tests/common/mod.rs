//! Shared test doubles: an in-memory host and a canned-tool runner.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use pyformat_editor::{CursorPosition, Host, HostError};
use pyformat_formatters::{StepError, ToolInvocation, ToolOutput, ToolRunner};
use serde_json::Value;

/// In-memory stand-in for the editor plugin host.
pub struct MemoryHost {
    pub filetype: String,
    pub name: Option<String>,
    pub lines: Vec<String>,
    pub text_width: i64,
    pub settings: HashMap<String, Value>,
    pub cursor: CursorPosition,
    pub out: Vec<String>,
    pub err: Vec<String>,
    pub buffer_writes: usize,
    pub cursor_reads: usize,
}

impl MemoryHost {
    pub fn python(lines: &[&str]) -> Self {
        Self {
            filetype: "python".to_owned(),
            name: None,
            lines: lines.iter().map(|line| (*line).to_owned()).collect(),
            text_width: 0,
            settings: HashMap::new(),
            cursor: CursorPosition { line: 1, column: 0 },
            out: Vec::new(),
            err: Vec::new(),
            buffer_writes: 0,
            cursor_reads: 0,
        }
    }

    pub fn with_filetype(mut self, filetype: &str) -> Self {
        self.filetype = filetype.to_owned();
        self
    }

    pub fn with_settings(mut self, tool: &str, value: Value) -> Self {
        self.settings.insert(tool.to_owned(), value);
        self
    }
}

impl Host for MemoryHost {
    fn filetype(&mut self) -> String {
        self.filetype.clone()
    }

    fn buffer_name(&mut self) -> Option<String> {
        self.name.clone()
    }

    fn buffer_lines(&mut self) -> Vec<String> {
        self.lines.clone()
    }

    fn text_width(&mut self) -> i64 {
        self.text_width
    }

    fn user_options(&mut self, tool: &str) -> Option<Value> {
        self.settings.get(tool).cloned()
    }

    fn cursor(&mut self) -> CursorPosition {
        self.cursor_reads += 1;
        self.cursor
    }

    fn set_cursor(&mut self, position: CursorPosition) -> Result<(), HostError> {
        let line_ok = position.line >= 1 && position.line <= self.lines.len();
        let column_ok = line_ok && position.column <= self.lines[position.line - 1].len();
        if line_ok && column_ok {
            self.cursor = position;
            Ok(())
        } else {
            Err(HostError::InvalidCursor)
        }
    }

    fn replace_buffer(&mut self, lines: Vec<String>) -> Result<(), HostError> {
        self.buffer_writes += 1;
        self.lines = lines;
        Ok(())
    }

    fn write_out(&mut self, message: &str) {
        self.out.push(message.to_owned());
    }

    fn write_err(&mut self, message: &str) {
        self.err.push(message.to_owned());
    }
}

type FakeTool = Box<dyn Fn(&ToolInvocation, &str) -> Result<ToolOutput, StepError>>;

/// Runner backed by closures instead of subprocesses. Unregistered
/// programs behave like tools missing from `PATH`.
#[derive(Default)]
pub struct FakeRunner {
    tools: HashMap<&'static str, FakeTool>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<F>(mut self, program: &'static str, tool: F) -> Self
    where
        F: Fn(&ToolInvocation, &str) -> Result<ToolOutput, StepError> + 'static,
    {
        self.tools.insert(program, Box::new(tool));
        self
    }

    /// Register a pure text transform under `program`.
    pub fn with_transform<F>(self, program: &'static str, transform: F) -> Self
    where
        F: Fn(&str) -> String + 'static,
    {
        self.with(program, move |_, input| Ok(ToolOutput::ok(transform(input))))
    }
}

impl ToolRunner for FakeRunner {
    fn run(&self, invocation: &ToolInvocation, input: &str) -> Result<ToolOutput, StepError> {
        self.calls.borrow_mut().push(invocation.program.to_owned());
        match self.tools.get(invocation.program) {
            Some(tool) => tool(invocation, input),
            None => Err(StepError::MissingTool {
                tool: invocation.program,
            }),
        }
    }
}

/// Fake isort: sorts each contiguous run of import lines.
pub fn sort_import_runs(input: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut run: Vec<String> = Vec::new();
    for line in input.lines() {
        if line.starts_with("import ") || line.starts_with("from ") {
            run.push(line.to_owned());
        } else {
            run.sort();
            out.append(&mut run);
            out.push(line.to_owned());
        }
    }
    run.sort();
    out.append(&mut run);
    out.join("\n") + "\n"
}

/// Fake black: removes blank lines, a crude but idempotent normalization.
pub fn strip_blank_lines(input: &str) -> String {
    let lines: Vec<&str> = input.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.is_empty() {
        "\n".to_owned()
    } else {
        lines.join("\n") + "\n"
    }
}
