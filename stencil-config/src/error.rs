use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use stencilpack_core::DecodeError;
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Fatal problems with `stencil.toml`.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a stencil.toml describing your units, or pass --manifest"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse stencil.toml")]
    #[diagnostic(code(stencil::manifest::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("unit '{unit}' depends on unknown unit '{dependency}'")]
    #[diagnostic(
        code(stencil::manifest::unknown_dependency),
        help("declare [units.{dependency}] or remove it from the dependency list")
    )]
    UnknownDependency {
        #[source_code]
        src: NamedSource<String>,
        #[label("not a unit in this manifest")]
        span: Option<SourceSpan>,
        unit: String,
        dependency: String,
    },

    #[error("unit '{unit}' depends on itself")]
    #[diagnostic(code(stencil::manifest::self_dependency))]
    SelfDependency {
        #[source_code]
        src: NamedSource<String>,
        #[label("remove this entry")]
        span: Option<SourceSpan>,
        unit: String,
    },

    #[error("unit '{unit}' lists '{dependency}' more than once")]
    #[diagnostic(code(stencil::manifest::duplicate_dependency))]
    DuplicateDependency {
        #[source_code]
        src: NamedSource<String>,
        #[label("listed again here")]
        span: Option<SourceSpan>,
        unit: String,
        dependency: String,
    },

    #[error("unit name '{unit}' is not a plain directory name")]
    #[diagnostic(
        code(stencil::manifest::invalid_unit_name),
        help("unit names become work directory names; drop path separators, '.' and '..'")
    )]
    InvalidUnitName {
        #[source_code]
        src: NamedSource<String>,
        #[label("unit declared here")]
        span: Option<SourceSpan>,
        unit: String,
    },

    #[error("unit '{unit}' has an empty path")]
    #[diagnostic(code(stencil::manifest::empty_path))]
    EmptyPath {
        #[source_code]
        src: NamedSource<String>,
        #[label("unit declared here")]
        span: Option<SourceSpan>,
        unit: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Why a per-unit config document was rejected.
///
/// These never abort a build: the loader turns them into a warning and falls
/// back to the defaults.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in '{path}'")]
    #[diagnostic(code(stencil::config::syntax))]
    Syntax {
        path: PathBuf,
        #[source_code]
        src: NamedSource<String>,
        #[label("syntax error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{path}' must contain a JSON object, found {found}")]
    #[diagnostic(code(stencil::config::not_an_object))]
    NotAnObject { path: PathBuf, found: &'static str },

    #[error("invalid option in '{path}'")]
    #[diagnostic(code(stencil::config::invalid_option))]
    InvalidOption {
        path: PathBuf,
        #[source]
        source: DecodeError,
    },
}

impl ConfigError {
    /// Create a syntax error, pointing at the line and column serde_json reports.
    pub fn syntax(source: serde_json::Error, src: &str, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let span = offset_of(src, source.line(), source.column()).map(|o| SourceSpan::from(o..o));
        ConfigError::Syntax {
            src: NamedSource::new(path.display().to_string(), src.to_string()),
            path,
            span,
            source,
        }
    }

    /// One-line description including every underlying cause.
    pub fn describe(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

/// Byte offset of a 1-based line and column, clamped to the source length.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of_first_line() {
        assert_eq!(offset_of("{\"a\": 1", 1, 3), Some(2));
    }

    #[test]
    fn test_offset_of_later_line() {
        let src = "{\n  \"a\": tru\n}";
        assert_eq!(offset_of(src, 2, 8), Some(9));
    }

    #[test]
    fn test_offset_is_clamped() {
        assert_eq!(offset_of("{", 1, 10), Some(1));
        assert_eq!(offset_of("{", 0, 0), None);
    }

    #[test]
    fn test_describe_includes_cause() {
        let src = "{\"debug_only\": tr";
        let source = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let err = ConfigError::syntax(source, src, ".sourcepack.json");
        let message = err.describe();
        assert!(message.starts_with("invalid JSON in '.sourcepack.json': "));
    }
}
