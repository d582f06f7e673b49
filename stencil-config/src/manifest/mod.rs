//! Manifest types and parsing for stencil.toml files.

mod file;
mod validate;

use std::{path::PathBuf, str::FromStr};

pub use file::StencilToml;
use indexmap::IndexMap;
use serde::Deserialize;
use stencilpack_core::Flavor;

use crate::{Error, Result};

/// Default generator program, looked up on PATH.
pub const DEFAULT_GENERATOR: &str = "sourcery";
/// Default template directory, relative to the project root.
pub const DEFAULT_TEMPLATES_DIR: &str = "Stencils";
/// Default work directory, relative to the project root.
pub const DEFAULT_WORK_DIR: &str = ".build/stencil";

/// Root manifest for stencil.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    /// Project-wide generator settings
    #[serde(default)]
    pub project: ProjectConfig,

    /// Build units in declaration order
    #[serde(default)]
    pub units: IndexMap<String, UnitConfig>,
}

/// The `[project]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    /// Generator program name or path
    #[serde(default = "default_generator")]
    pub generator: String,

    /// Directory holding the flavor templates
    #[serde(default = "default_templates_dir")]
    pub templates_dir: PathBuf,

    /// Directory for generated output and generator caches
    #[serde(default = "default_work_dir")]
    pub work_dir: PathBuf,

    /// Overrides the built-in default of the `debugOnly` option
    #[serde(default)]
    pub debug_only_default: Option<bool>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            generator: default_generator(),
            templates_dir: default_templates_dir(),
            work_dir: default_work_dir(),
            debug_only_default: None,
        }
    }
}

fn default_generator() -> String {
    DEFAULT_GENERATOR.to_string()
}

fn default_templates_dir() -> PathBuf {
    PathBuf::from(DEFAULT_TEMPLATES_DIR)
}

fn default_work_dir() -> PathBuf {
    PathBuf::from(DEFAULT_WORK_DIR)
}

/// A `[units.<name>]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitConfig {
    /// Source directory, relative to the project root
    pub path: PathBuf,

    /// Names of the units this one depends on
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Whether this is a test unit; inferred from the name when omitted
    #[serde(default)]
    pub test: Option<bool>,

    /// Flavors generated for this unit; `test` for test units and `source`
    /// otherwise when omitted
    #[serde(default)]
    pub flavors: Option<Vec<Flavor>>,
}

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "stencil.toml")
    }
}

impl Manifest {
    /// Parse a manifest with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let manifest: Manifest =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        validate::validate(&manifest, content, filename)?;
        Ok(manifest)
    }

    /// Check if a unit exists
    pub fn has_unit(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }
}
