//! Generator flavors.
//!
//! A flavor fixes everything that differs between generator configurations:
//! the template set, the option schema and the name of the per-unit config
//! file. The driver logic is shared by all flavors.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::Deserialize;

use crate::{ACCESS_LEVELS, BuildUnit, ConfigSchema, GenerationConfig};

/// Supported generator flavors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flavor {
    /// Copy, equality, hashing and description conformances for production code
    #[serde(alias = "sourcepack")]
    Source,
    /// Mocks and randomizers for test code
    #[serde(alias = "testpack")]
    Test,
}

impl Flavor {
    /// Every flavor, in display order.
    pub const ALL: [Flavor; 2] = [Flavor::Source, Flavor::Test];

    /// The flavor a unit gets when it doesn't list any.
    pub fn default_for(is_test: bool) -> Self {
        if is_test { Flavor::Test } else { Flavor::Source }
    }

    /// Returns the flavor identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Source => "source",
            Flavor::Test => "test",
        }
    }

    /// Name used in step descriptions and work directories.
    pub fn display_name(&self) -> &'static str {
        match self {
            Flavor::Source => "SourcePack",
            Flavor::Test => "TestPack",
        }
    }

    /// Per-unit config file, looked up in the unit's root directory.
    pub fn config_file_name(&self) -> &'static str {
        match self {
            Flavor::Source => ".sourcepack.json",
            Flavor::Test => ".testpack.json",
        }
    }

    /// Template files shipped with this flavor, in invocation order.
    pub fn template_names(&self) -> &'static [&'static str] {
        match self {
            Flavor::Source => &[
                "Copyable.stencil",
                "Equatable.stencil",
                "Hashable.stencil",
                "Describable.stencil",
            ],
            Flavor::Test => &[
                "Mockable.stencil",
                "Randomizable.stencil",
                "MockSwift.stencil",
            ],
        }
    }

    /// Template paths under `templates_dir`.
    pub fn templates(&self, templates_dir: &Path) -> Vec<PathBuf> {
        self.template_names()
            .iter()
            .map(|name| templates_dir.join(name))
            .collect()
    }

    /// Options understood by this flavor, with their built-in defaults.
    pub fn schema(&self) -> ConfigSchema {
        match self {
            Flavor::Source => ConfigSchema::new()
                .bool(GenerationConfig::DEBUG_ONLY, false)
                .list(GenerationConfig::IMPORTS),
            Flavor::Test => ConfigSchema::new()
                .bool(GenerationConfig::DEBUG_ONLY, false)
                .bool("randomStdLib", true)
                .choice("randomStdLibProtection", ACCESS_LEVELS, "internal")
                .list(GenerationConfig::IMPORTS)
                .list(GenerationConfig::TESTABLE_IMPORTS),
        }
    }

    /// Config file path for `unit`.
    pub fn config_path(&self, unit: &BuildUnit) -> PathBuf {
        unit.root_dir().join(self.config_file_name())
    }

    /// Work directory owned by this flavor's pass over `unit`.
    pub fn work_dir(&self, work_root: &Path, unit: &BuildUnit) -> PathBuf {
        work_root.join(unit.name()).join(self.display_name())
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Flavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "source" | "sourcepack" => Ok(Flavor::Source),
            "test" | "testpack" => Ok(Flavor::Test),
            _ => Err(format!(
                "unknown flavor '{}', expected 'source' or 'test'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Flavor::from_str("source").unwrap(), Flavor::Source);
        assert_eq!(Flavor::from_str("SourcePack").unwrap(), Flavor::Source);
        assert_eq!(Flavor::from_str("test").unwrap(), Flavor::Test);
        assert_eq!(Flavor::from_str("TestPack").unwrap(), Flavor::Test);
        assert!(Flavor::from_str("docs").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Flavor::Source.to_string(), "source");
        assert_eq!(Flavor::Test.to_string(), "test");
    }

    #[test]
    fn test_templates_are_fixed_per_flavor() {
        let templates = Flavor::Test.templates(Path::new("/t"));
        assert_eq!(
            templates,
            [
                PathBuf::from("/t/Mockable.stencil"),
                PathBuf::from("/t/Randomizable.stencil"),
                PathBuf::from("/t/MockSwift.stencil"),
            ]
        );
        assert_eq!(Flavor::Source.templates(Path::new("/t")).len(), 4);
    }

    #[test]
    fn test_source_schema_defaults() {
        let config = Flavor::Source.schema().defaults();
        assert!(!config.debug_only());
        assert!(config.imports().is_empty());
        assert_eq!(config.arguments(), ["debugOnly=false"]);
    }

    #[test]
    fn test_test_schema_defaults() {
        let config = Flavor::Test.schema().defaults();
        assert_eq!(
            config.arguments(),
            [
                "debugOnly=false",
                "randomStdLib=true",
                "randomStdLibProtection=internal"
            ]
        );
        assert!(config.testable_imports().is_empty());
    }

    #[test]
    fn test_paths_for_unit() {
        let unit = BuildUnit::new("Widgets", "/p", "/p/Sources/Widgets");
        assert_eq!(
            Flavor::Source.config_path(&unit),
            PathBuf::from("/p/.sourcepack.json")
        );
        assert_eq!(
            Flavor::Test.work_dir(Path::new("/w"), &unit),
            PathBuf::from("/w/Widgets/TestPack")
        );
    }
}
