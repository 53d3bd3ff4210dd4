//! Typed option structures for each formatter.
//!
//! Options are built fresh for every invocation and never cached. Each
//! structure starts from the tool's built-in defaults; the editor layer
//! then applies the derived text-width value and finally the user's
//! configured overrides, in that priority order. User overrides arrive as
//! a JSON map; only the documented keys are recognized — anything else is
//! logged and dropped rather than forwarded blindly to the tool.

use std::path::PathBuf;

use serde_json::{Map, Value};

/// Options for black, the style formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlackOptions {
    /// Maximum line length. black's own default is 88.
    pub line_length: u32,
    /// Skip the AST safety check after formatting.
    pub fast: bool,
    /// Format as a type stub (`.pyi`) file.
    pub pyi: bool,
    /// Buffer path reported to black, when it names a real file.
    pub stdin_filename: Option<PathBuf>,
}

impl Default for BlackOptions {
    fn default() -> Self {
        Self {
            line_length: 88,
            fast: false,
            pyi: false,
            stdin_filename: None,
        }
    }
}

impl BlackOptions {
    /// Recognized override keys: `line_length`, `fast`, `pyi`.
    pub fn apply_overrides(&mut self, overrides: &Map<String, Value>) {
        for (key, value) in overrides {
            match key.as_str() {
                "line_length" => set_u32(&mut self.line_length, "black", key, value),
                "fast" => set_bool(&mut self.fast, "black", key, value),
                "pyi" => set_bool(&mut self.pyi, "black", key, value),
                _ => warn_unrecognized("black", key),
            }
        }
    }

    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "-".to_owned(),
            "--quiet".to_owned(),
            "--line-length".to_owned(),
            self.line_length.to_string(),
        ];
        if self.fast {
            args.push("--fast".to_owned());
        }
        if self.pyi {
            args.push("--pyi".to_owned());
        }
        if let Some(path) = &self.stdin_filename {
            args.push("--stdin-filename".to_owned());
            args.push(path.display().to_string());
        }
        args
    }
}

/// Options for isort, the import sorter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsortOptions {
    /// Named style profile. Defaults to `black` so the two tools never
    /// fight each other when chained.
    pub profile: String,
    /// Maximum line length; when unset, the profile decides.
    pub line_length: Option<u32>,
    /// Buffer path reported to isort, when it names a real file. Affects
    /// first-party/third-party section placement.
    pub filename: Option<PathBuf>,
}

impl Default for IsortOptions {
    fn default() -> Self {
        Self {
            profile: "black".to_owned(),
            line_length: None,
            filename: None,
        }
    }
}

impl IsortOptions {
    /// Recognized override keys: `profile`, `line_length`.
    pub fn apply_overrides(&mut self, overrides: &Map<String, Value>) {
        for (key, value) in overrides {
            match key.as_str() {
                "profile" => set_string(&mut self.profile, "isort", key, value),
                "line_length" => match value.as_u64() {
                    Some(n) => self.line_length = Some(n as u32),
                    None => warn_type("isort", key, "an integer", value),
                },
                _ => warn_unrecognized("isort", key),
            }
        }
    }

    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["-".to_owned(), "--profile".to_owned(), self.profile.clone()];
        if let Some(line_length) = self.line_length {
            args.push("--line-length".to_owned());
            args.push(line_length.to_string());
        }
        if let Some(path) = &self.filename {
            args.push("--filename".to_owned());
            args.push(path.display().to_string());
        }
        args
    }
}

/// Options for autoflake, the unused-import remover.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoflakeOptions {
    pub remove_all_unused_imports: bool,
    pub remove_unused_variables: bool,
    pub expand_star_imports: bool,
    pub remove_duplicate_keys: bool,
    pub ignore_init_module_imports: bool,
}

impl AutoflakeOptions {
    /// Recognized override keys mirror the field names.
    pub fn apply_overrides(&mut self, overrides: &Map<String, Value>) {
        for (key, value) in overrides {
            match key.as_str() {
                "remove_all_unused_imports" => {
                    set_bool(&mut self.remove_all_unused_imports, "autoflake", key, value)
                }
                "remove_unused_variables" => {
                    set_bool(&mut self.remove_unused_variables, "autoflake", key, value)
                }
                "expand_star_imports" => {
                    set_bool(&mut self.expand_star_imports, "autoflake", key, value)
                }
                "remove_duplicate_keys" => {
                    set_bool(&mut self.remove_duplicate_keys, "autoflake", key, value)
                }
                "ignore_init_module_imports" => {
                    set_bool(&mut self.ignore_init_module_imports, "autoflake", key, value)
                }
                _ => warn_unrecognized("autoflake", key),
            }
        }
    }

    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["-".to_owned()];
        if self.remove_all_unused_imports {
            args.push("--remove-all-unused-imports".to_owned());
        }
        if self.remove_unused_variables {
            args.push("--remove-unused-variables".to_owned());
        }
        if self.expand_star_imports {
            args.push("--expand-star-imports".to_owned());
        }
        if self.remove_duplicate_keys {
            args.push("--remove-duplicate-keys".to_owned());
        }
        if self.ignore_init_module_imports {
            args.push("--ignore-init-module-imports".to_owned());
        }
        args
    }
}

fn set_u32(field: &mut u32, tool: &str, key: &str, value: &Value) {
    match value.as_u64() {
        Some(n) => *field = n as u32,
        None => warn_type(tool, key, "an integer", value),
    }
}

fn set_bool(field: &mut bool, tool: &str, key: &str, value: &Value) {
    match value.as_bool() {
        Some(b) => *field = b,
        None => warn_type(tool, key, "a boolean", value),
    }
}

fn set_string(field: &mut String, tool: &str, key: &str, value: &Value) {
    match value.as_str() {
        Some(s) => *field = s.to_owned(),
        None => warn_type(tool, key, "a string", value),
    }
}

fn warn_unrecognized(tool: &str, key: &str) {
    tracing::warn!("ignoring unrecognized {tool} option `{key}`");
}

fn warn_type(tool: &str, key: &str, expected: &str, value: &Value) {
    tracing::warn!("ignoring {tool} option `{key}`: expected {expected}, got {value}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn overrides(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("overrides must be an object"),
        }
    }

    #[test]
    fn test_black_defaults() {
        let options = BlackOptions::default();
        assert_eq!(options.line_length, 88);
        assert!(!options.fast);
        assert!(!options.pyi);
        assert!(options.stdin_filename.is_none());
    }

    #[test]
    fn test_black_overrides_apply() {
        let mut options = BlackOptions::default();
        options.apply_overrides(&overrides(json!({"line_length": 100, "fast": true})));
        assert_eq!(options.line_length, 100);
        assert!(options.fast);
    }

    #[test]
    fn test_unrecognized_key_is_dropped() {
        let mut options = BlackOptions::default();
        options.apply_overrides(&overrides(json!({"linelength": 100})));
        assert_eq!(options.line_length, 88);
    }

    #[test]
    fn test_mistyped_value_is_dropped() {
        let mut options = BlackOptions::default();
        options.apply_overrides(&overrides(json!({"line_length": "wide"})));
        assert_eq!(options.line_length, 88);
    }

    #[test]
    fn test_black_args_rendering() {
        let options = BlackOptions {
            line_length: 79,
            fast: true,
            pyi: true,
            stdin_filename: Some(PathBuf::from("/tmp/mod.pyi")),
        };
        assert_eq!(
            options.to_args(),
            vec![
                "-",
                "--quiet",
                "--line-length",
                "79",
                "--fast",
                "--pyi",
                "--stdin-filename",
                "/tmp/mod.pyi",
            ]
        );
    }

    #[test]
    fn test_isort_defaults_match_black_profile() {
        let options = IsortOptions::default();
        assert_eq!(options.profile, "black");
        assert_eq!(options.to_args(), vec!["-", "--profile", "black"]);
    }

    #[test]
    fn test_isort_overrides_apply() {
        let mut options = IsortOptions::default();
        options.apply_overrides(&overrides(json!({"profile": "django", "line_length": 120})));
        assert_eq!(options.profile, "django");
        assert_eq!(options.line_length, Some(120));
    }

    #[test]
    fn test_autoflake_flags_render_only_when_set() {
        let mut options = AutoflakeOptions::default();
        assert_eq!(options.to_args(), vec!["-"]);

        options.apply_overrides(&overrides(json!({
            "remove_all_unused_imports": true,
            "remove_unused_variables": true,
        })));
        assert_eq!(
            options.to_args(),
            vec!["-", "--remove-all-unused-imports", "--remove-unused-variables"]
        );
    }
}
