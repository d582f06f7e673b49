//! Target resolution.
//!
//! Production units scan their own sources. Test units are empty scaffolds
//! around the modules they test, so the types worth generating helpers for
//! live in their dependencies: a test unit scans its dependencies' sources and
//! imports them with test visibility.

use std::path::PathBuf;

use crate::{BuildUnit, GenerationConfig};

/// Sources and imports handed to the generator for one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub sources: Vec<PathBuf>,
    pub imports: Vec<String>,
    pub testable_imports: Vec<String>,
}

/// Resolve everything the generator needs to know about `unit`.
pub fn resolve(unit: &BuildUnit, config: &GenerationConfig) -> Resolution {
    Resolution {
        sources: source_roots(unit),
        imports: plain_imports(config),
        testable_imports: testable_imports(unit, config),
    }
}

/// Source roots the generator scans.
///
/// Paths are not checked for existence; the generator reports missing ones.
pub fn source_roots(unit: &BuildUnit) -> Vec<PathBuf> {
    if unit.is_test() {
        unit.dependencies()
            .iter()
            .map(|d| d.source_dir.clone())
            .collect()
    } else {
        vec![unit.source_dir().to_path_buf()]
    }
}

/// Modules imported with test visibility: dependencies first for test units,
/// then the configured extras. Duplicates are kept.
pub fn testable_imports(unit: &BuildUnit, config: &GenerationConfig) -> Vec<String> {
    let extras = config.testable_imports().iter().cloned();
    if unit.is_test() {
        unit.dependencies()
            .iter()
            .map(|d| d.name.clone())
            .chain(extras)
            .collect()
    } else {
        extras.collect()
    }
}

/// Plain imports are taken from the configuration verbatim.
pub fn plain_imports(config: &GenerationConfig) -> Vec<String> {
    config.imports().to_vec()
}

#[cfg(test)]
mod tests {
    use serde_json::{Map, Value, json};

    use super::*;
    use crate::ConfigSchema;

    fn schema() -> ConfigSchema {
        ConfigSchema::new()
            .bool("debugOnly", false)
            .list("imports")
            .list("testableImports")
    }

    fn config(value: Value) -> GenerationConfig {
        let map: Map<String, Value> = match value {
            Value::Object(map) => map,
            _ => panic!("expected an object"),
        };
        schema().apply(&map).unwrap()
    }

    fn widgets() -> BuildUnit {
        BuildUnit::new("Widgets", "/p", "/p/Widgets")
    }

    fn widgets_tests() -> BuildUnit {
        BuildUnit::new("WidgetsTests", "/p", "/p/WidgetsTests")
            .dependency("Widgets", "/p/Widgets")
            .dependency("Gadgets", "/p/Gadgets")
    }

    #[test]
    fn test_production_unit_scans_own_sources() {
        assert_eq!(source_roots(&widgets()), [PathBuf::from("/p/Widgets")]);
    }

    #[test]
    fn test_production_unit_ignores_dependencies() {
        let unit = widgets().dependency("Core", "/p/Core");
        assert_eq!(source_roots(&unit), [PathBuf::from("/p/Widgets")]);
    }

    #[test]
    fn test_test_unit_scans_dependency_sources_in_order() {
        assert_eq!(
            source_roots(&widgets_tests()),
            [PathBuf::from("/p/Widgets"), PathBuf::from("/p/Gadgets")]
        );
    }

    #[test]
    fn test_test_unit_without_dependencies_scans_nothing() {
        let unit = BuildUnit::new("EmptyTests", "/p", "/p/EmptyTests");
        assert!(source_roots(&unit).is_empty());
    }

    #[test]
    fn test_testable_imports_put_dependencies_first() {
        let config = config(json!({ "testable_imports": ["Extra", "Widgets"] }));
        assert_eq!(
            testable_imports(&widgets_tests(), &config),
            ["Widgets", "Gadgets", "Extra", "Widgets"]
        );
    }

    #[test]
    fn test_production_testable_imports_are_config_only() {
        let config = config(json!({ "testable_imports": ["Extra"] }));
        assert_eq!(testable_imports(&widgets(), &config), ["Extra"]);
    }

    #[test]
    fn test_plain_imports_ignore_unit_kind() {
        let config = config(json!({ "imports": ["Foundation", "Combine"] }));
        let expected = ["Foundation", "Combine"];
        assert_eq!(resolve(&widgets(), &config).imports, expected);
        assert_eq!(resolve(&widgets_tests(), &config).imports, expected);
    }
}
