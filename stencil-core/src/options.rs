//! Typed generator options.
//!
//! A [`ConfigSchema`] declares every option a generator flavor understands,
//! with its decode rule and default. A [`GenerationConfig`] is always a fully
//! populated record produced from a schema, either straight from the defaults
//! or from a user document applied on top of them.

use std::fmt;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::utils::{format_string_list, to_camel_case};

/// Access levels accepted for generated helper visibility.
pub const ACCESS_LEVELS: &[&str] = &[
    "private",
    "fileprivate",
    "internal",
    "package",
    "public",
    "open",
];

/// Decode rule for one option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionKind {
    Bool,
    String,
    /// A string restricted to a fixed set of values.
    Choice(&'static [&'static str]),
    /// A list of strings.
    List,
}

impl OptionKind {
    /// Human-readable description used in decode errors.
    pub fn describe(&self) -> String {
        match self {
            OptionKind::Bool => "a boolean".to_string(),
            OptionKind::String => "a string".to_string(),
            OptionKind::Choice(allowed) => format!("one of {}", allowed.join(", ")),
            OptionKind::List => "a list of strings".to_string(),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, OptionKind::List)
    }

    /// Whether `value` is a valid value for this kind.
    pub fn accepts(&self, value: &OptionValue) -> bool {
        match (self, value) {
            (OptionKind::Bool, OptionValue::Bool(_)) => true,
            (OptionKind::String, OptionValue::String(_)) => true,
            (OptionKind::Choice(allowed), OptionValue::String(s)) => allowed.contains(&s.as_str()),
            (OptionKind::List, OptionValue::List(_)) => true,
            _ => false,
        }
    }

    /// Decode a JSON value according to this rule.
    pub fn decode(&self, value: &Value) -> Result<OptionValue, String> {
        let decoded = match (self, value) {
            (OptionKind::Bool, Value::Bool(b)) => Some(OptionValue::Bool(*b)),
            (OptionKind::String | OptionKind::Choice(_), Value::String(s)) => {
                Some(OptionValue::String(s.clone()))
            }
            (OptionKind::List, Value::Array(items)) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(OptionValue::List),
            _ => None,
        };

        match decoded {
            Some(v) if self.accepts(&v) => Ok(v),
            _ => Err(value.to_string()),
        }
    }
}

/// A typed option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    Bool(bool),
    String(String),
    List(Vec<String>),
}

impl OptionValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            OptionValue::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::String(value.to_string())
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::String(s) => write!(f, "{}", s),
            OptionValue::List(items) => write!(f, "{}", format_string_list(items.as_slice())),
        }
    }
}

/// Declaration of a single option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    /// camelCase option name, as passed to the generator.
    pub name: String,
    pub kind: OptionKind,
    pub default: OptionValue,
}

/// An option in a document could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("option '{key}' must be {expected}, found {found}")]
pub struct DecodeError {
    /// The key as written in the document.
    pub key: String,
    pub expected: String,
    pub found: String,
}

/// Ordered set of options understood by one generator flavor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSchema {
    options: Vec<OptionSpec>,
}

impl ConfigSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a boolean option.
    pub fn bool(self, name: impl Into<String>, default: bool) -> Self {
        self.option(name, OptionKind::Bool, OptionValue::Bool(default))
    }

    /// Declare a free-form string option.
    pub fn string(self, name: impl Into<String>, default: impl Into<String>) -> Self {
        self.option(name, OptionKind::String, OptionValue::String(default.into()))
    }

    /// Declare a string option restricted to `allowed`.
    pub fn choice(
        self,
        name: impl Into<String>,
        allowed: &'static [&'static str],
        default: &str,
    ) -> Self {
        self.option(name, OptionKind::Choice(allowed), OptionValue::from(default))
    }

    /// Declare a list option defaulting to the empty list.
    pub fn list(self, name: impl Into<String>) -> Self {
        self.option(name, OptionKind::List, OptionValue::List(Vec::new()))
    }

    fn option(mut self, name: impl Into<String>, kind: OptionKind, default: OptionValue) -> Self {
        let name = name.into();
        debug_assert!(kind.accepts(&default), "invalid default for '{name}'");
        self.options.retain(|o| o.name != name);
        self.options.push(OptionSpec {
            name,
            kind,
            default,
        });
        self
    }

    /// Replace the default of an existing option.
    ///
    /// Options the schema doesn't declare are left alone, so one override can
    /// be applied to every flavor.
    pub fn with_default(
        mut self,
        name: &str,
        value: impl Into<OptionValue>,
    ) -> Result<Self, DecodeError> {
        let value = value.into();
        if let Some(spec) = self.options.iter_mut().find(|o| o.name == name) {
            if !spec.kind.accepts(&value) {
                return Err(DecodeError {
                    key: name.to_string(),
                    expected: spec.kind.describe(),
                    found: value.to_string(),
                });
            }
            spec.default = value;
        }
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }

    /// The record holding every default.
    pub fn defaults(&self) -> GenerationConfig {
        GenerationConfig {
            values: self
                .options
                .iter()
                .map(|o| (o.name.clone(), o.default.clone()))
                .collect(),
            scalars: self.scalar_names(),
        }
    }

    /// Apply a snake_case keyed document on top of the defaults.
    ///
    /// Unknown keys are ignored. The first key that fails to decode rejects
    /// the whole document.
    pub fn apply(&self, document: &Map<String, Value>) -> Result<GenerationConfig, DecodeError> {
        let mut config = self.defaults();
        for (key, value) in document {
            let name = to_camel_case(key);
            let Some(spec) = self.get(&name) else {
                continue;
            };
            let decoded = spec.kind.decode(value).map_err(|found| DecodeError {
                key: key.clone(),
                expected: spec.kind.describe(),
                found,
            })?;
            config.values.insert(name, decoded);
        }
        Ok(config)
    }

    fn scalar_names(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| !o.kind.is_list())
            .map(|o| o.name.clone())
            .collect()
    }
}

/// Normalized settings controlling one generation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    values: IndexMap<String, OptionValue>,
    scalars: Vec<String>,
}

impl GenerationConfig {
    pub const DEBUG_ONLY: &'static str = "debugOnly";
    pub const IMPORTS: &'static str = "imports";
    pub const TESTABLE_IMPORTS: &'static str = "testableImports";

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(name)
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(OptionValue::as_bool)
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(OptionValue::as_str)
    }

    /// A list option, or the empty list when the schema has no such option.
    pub fn list(&self, name: &str) -> &[String] {
        self.get(name).and_then(OptionValue::as_list).unwrap_or(&[])
    }

    pub fn debug_only(&self) -> bool {
        self.bool(Self::DEBUG_ONLY).unwrap_or(false)
    }

    pub fn imports(&self) -> &[String] {
        self.list(Self::IMPORTS)
    }

    pub fn testable_imports(&self) -> &[String] {
        self.list(Self::TESTABLE_IMPORTS)
    }

    /// Every option in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `key=value` arguments for every scalar option, in schema order.
    pub fn arguments(&self) -> Vec<String> {
        self.scalars
            .iter()
            .filter_map(|name| self.values.get(name).map(|v| format!("{}={}", name, v)))
            .collect()
    }
}
