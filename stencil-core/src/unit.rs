//! Build units.

use std::path::{Path, PathBuf};

use crate::Flavor;

/// Suffix that marks a unit as a test module when not stated explicitly.
const TEST_SUFFIX: &str = "Tests";

/// A direct module dependency of a build unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Module name, used as an import in generated code.
    pub name: String,
    /// Directory holding the dependency's sources.
    pub source_dir: PathBuf,
}

/// One compilable module or test module processed by a single generation pass.
///
/// Dependencies are stored as name/directory pairs, so every dependency name
/// has exactly one source directory at the same position. Names form an
/// ordered set: adding a name twice keeps the first entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildUnit {
    name: String,
    root_dir: PathBuf,
    source_dir: PathBuf,
    dependencies: Vec<Dependency>,
    is_test: bool,
    flavors: Option<Vec<Flavor>>,
}

impl BuildUnit {
    /// Create a unit without dependencies.
    ///
    /// Whether the unit is a test module is inferred from its name; use
    /// [`BuildUnit::test`] to state it explicitly.
    pub fn new(
        name: impl Into<String>,
        root_dir: impl Into<PathBuf>,
        source_dir: impl Into<PathBuf>,
    ) -> Self {
        let name = name.into();
        let is_test = Self::is_test_name(&name);
        Self {
            name,
            root_dir: root_dir.into(),
            source_dir: source_dir.into(),
            dependencies: Vec::new(),
            is_test,
            flavors: None,
        }
    }

    /// Mark the unit as a test module (or not).
    pub fn test(mut self, is_test: bool) -> Self {
        self.is_test = is_test;
        self
    }

    /// Attach the flavors generated for this unit, replacing the default.
    pub fn with_flavors(mut self, flavors: impl IntoIterator<Item = Flavor>) -> Self {
        let mut attached = Vec::new();
        for flavor in flavors {
            if !attached.contains(&flavor) {
                attached.push(flavor);
            }
        }
        self.flavors = Some(attached);
        self
    }

    /// Add a direct dependency. Duplicate names are ignored.
    pub fn dependency(mut self, name: impl Into<String>, source_dir: impl Into<PathBuf>) -> Self {
        let name = name.into();
        if !self.dependencies.iter().any(|d| d.name == name) {
            self.dependencies.push(Dependency {
                name,
                source_dir: source_dir.into(),
            });
        }
        self
    }

    /// Whether a unit name follows the test module naming convention.
    pub fn is_test_name(name: &str) -> bool {
        name.ends_with(TEST_SUFFIX)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Project root; per-unit config files live here.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    pub fn is_test(&self) -> bool {
        self.is_test
    }

    /// Flavors generated for this unit: the attached ones, or the test
    /// flavor for test units and the source flavor otherwise.
    pub fn flavors(&self) -> Vec<Flavor> {
        match &self.flavors {
            Some(flavors) => flavors.clone(),
            None => vec![Flavor::default_for(self.is_test)],
        }
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Dependency names in declaration order.
    pub fn dependency_names(&self) -> Vec<&str> {
        self.dependencies.iter().map(|d| d.name.as_str()).collect()
    }

    /// Dependency source directories, in the same order as the names.
    pub fn dependency_source_dirs(&self) -> Vec<&Path> {
        self.dependencies
            .iter()
            .map(|d| d.source_dir.as_path())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infers_test_unit_from_name() {
        assert!(BuildUnit::new("WidgetsTests", "/p", "/p/Tests/WidgetsTests").is_test());
        assert!(!BuildUnit::new("Widgets", "/p", "/p/Sources/Widgets").is_test());
    }

    #[test]
    fn test_explicit_flag_overrides_name() {
        let unit = BuildUnit::new("Integration", "/p", "/p/Integration").test(true);
        assert!(unit.is_test());

        let unit = BuildUnit::new("FixturesTests", "/p", "/p/Fixtures").test(false);
        assert!(!unit.is_test());
    }

    #[test]
    fn test_default_flavor_follows_test_flag() {
        let unit = BuildUnit::new("Widgets", "/p", "/p/Widgets");
        assert_eq!(unit.flavors(), [Flavor::Source]);

        let unit = BuildUnit::new("WidgetsTests", "/p", "/p/WidgetsTests");
        assert_eq!(unit.flavors(), [Flavor::Test]);

        let unit = BuildUnit::new("Integration", "/p", "/p/Integration").test(true);
        assert_eq!(unit.flavors(), [Flavor::Test]);
    }

    #[test]
    fn test_attached_flavors() {
        let unit = BuildUnit::new("Widgets", "/p", "/p/Widgets").with_flavors([
            Flavor::Test,
            Flavor::Source,
            Flavor::Test,
        ]);
        assert_eq!(unit.flavors(), [Flavor::Test, Flavor::Source]);

        let unit = BuildUnit::new("Widgets", "/p", "/p/Widgets").with_flavors(Vec::new());
        assert!(unit.flavors().is_empty());
    }

    #[test]
    fn test_dependencies_stay_paired() {
        let unit = BuildUnit::new("AppTests", "/p", "/p/Tests/AppTests")
            .dependency("App", "/p/Sources/App")
            .dependency("Models", "/p/Sources/Models");

        assert_eq!(unit.dependency_names(), ["App", "Models"]);
        assert_eq!(
            unit.dependency_source_dirs(),
            [Path::new("/p/Sources/App"), Path::new("/p/Sources/Models")]
        );
    }

    #[test]
    fn test_duplicate_dependency_is_ignored() {
        let unit = BuildUnit::new("AppTests", "/p", "/p/Tests/AppTests")
            .dependency("App", "/p/Sources/App")
            .dependency("App", "/elsewhere");

        assert_eq!(unit.dependencies().len(), 1);
        assert_eq!(unit.dependencies()[0].source_dir, PathBuf::from("/p/Sources/App"));
    }
}
