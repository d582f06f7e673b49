//! Per-unit configuration documents.
//!
//! A config file is a JSON object with snake_case keys. Loading never fails:
//! a missing file yields the schema defaults, and a broken one yields the
//! defaults plus exactly one warning. A document is either applied in full or
//! not at all.

use std::{io, path::Path};

use serde_json::Value;
use stencilpack_core::{ConfigSchema, Diagnostic, Diagnostics, GenerationConfig};

use crate::ConfigError;

/// Phase name attached to loader diagnostics.
pub const PHASE: &str = "config";

/// Loads per-unit configuration against a schema.
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader<'a> {
    schema: &'a ConfigSchema,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(schema: &'a ConfigSchema) -> Self {
        Self { schema }
    }

    /// Load the document at `path`, falling back to the defaults.
    ///
    /// A rejected document pushes a single warning onto `diagnostics`.
    pub fn load(&self, path: &Path, diagnostics: &mut Diagnostics) -> GenerationConfig {
        match self.try_load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err.describe(), "config rejected, using defaults");
                diagnostics.push(
                    Diagnostic::warning(
                        PHASE,
                        format!("{}; using default configuration", err.describe()),
                    )
                    .at(path.display().to_string()),
                );
                self.schema.defaults()
            }
        }
    }

    /// Load the document at `path`, reporting why it was rejected.
    ///
    /// A missing file is not an error and yields the defaults.
    pub fn try_load(&self, path: &Path) -> Result<GenerationConfig, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(self.schema.defaults());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        self.parse_str(&content, path)
    }

    /// Parse a document already in memory. `path` is used for error reporting.
    pub fn parse_str(&self, content: &str, path: &Path) -> Result<GenerationConfig, ConfigError> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| ConfigError::syntax(e, content, path))?;

        let document = match value {
            Value::Object(document) => document,
            other => {
                return Err(ConfigError::NotAnObject {
                    path: path.to_path_buf(),
                    found: json_type_name(&other),
                });
            }
        };

        self.schema
            .apply(&document)
            .map_err(|source| ConfigError::InvalidOption {
                path: path.to_path_buf(),
                source,
            })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
