//! # Option Resolution
//!
//! Builds the effective options for each requested formatter by layering
//! three sources in increasing priority:
//!
//! 1. the tool's built-in defaults,
//! 2. the derived value: a positive buffer text-width overrides the line
//!    length,
//! 3. the user's configured overrides, which may override anything —
//!    including the derived value.
//!
//! Options are resolved fresh for every invocation and used exactly once.

use std::path::PathBuf;

use pyformat_formatters::{
    AutoflakeOptions, BlackOptions, FormatterKind, IsortOptions, ToolOptions,
};
use serde_json::{Map, Value};

use crate::host::Host;

/// Resolve the effective options for one formatter step.
pub fn resolve(kind: FormatterKind, host: &mut dyn Host) -> ToolOptions {
    match kind {
        FormatterKind::Black => ToolOptions::Black(resolve_black(host)),
        FormatterKind::Isort => ToolOptions::Isort(resolve_isort(host)),
        FormatterKind::Autoflake => ToolOptions::Autoflake(resolve_autoflake(host)),
    }
}

fn resolve_black(host: &mut dyn Host) -> BlackOptions {
    let mut options = BlackOptions::default();
    options.pyi = host
        .buffer_name()
        .map(|name| name.ends_with(".pyi"))
        .unwrap_or(false);
    options.stdin_filename = existing_buffer_path(&mut *host);
    let text_width = host.text_width();
    if text_width > 0 {
        options.line_length = text_width as u32;
    }
    if let Some(overrides) = user_overrides(host, "black") {
        options.apply_overrides(&overrides);
    }
    options
}

fn resolve_isort(host: &mut dyn Host) -> IsortOptions {
    let mut options = IsortOptions::default();
    options.filename = existing_buffer_path(&mut *host);
    let text_width = host.text_width();
    if text_width > 0 {
        options.line_length = Some(text_width as u32);
    }
    if let Some(overrides) = user_overrides(host, "isort") {
        options.apply_overrides(&overrides);
    }
    options
}

fn resolve_autoflake(host: &mut dyn Host) -> AutoflakeOptions {
    let mut options = AutoflakeOptions::default();
    if let Some(overrides) = user_overrides(host, "autoflake") {
        options.apply_overrides(&overrides);
    }
    options
}

/// User overrides for one tool, when they exist and are a JSON object.
fn user_overrides(host: &mut dyn Host, tool: &str) -> Option<Map<String, Value>> {
    match host.user_options(tool) {
        Some(Value::Object(map)) => Some(map),
        Some(other) => {
            tracing::warn!("ignoring {tool} settings: expected a table, got {other}");
            None
        }
        None => None,
    }
}

/// The buffer's path, but only when it is absolute and exists on disk.
/// Tools key behavior (e.g. first-party import detection) on the path, and
/// a nonexistent one would mislead them.
fn existing_buffer_path(host: &mut dyn Host) -> Option<PathBuf> {
    let name = host.buffer_name()?;
    let path = PathBuf::from(name);
    if path.is_absolute() && path.exists() {
        Some(path)
    } else {
        None
    }
}
