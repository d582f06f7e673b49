//! Config operation - show the effective configuration of a unit.

use eyre::{Result, bail};
use stencilpack_config::StencilToml;
use stencilpack_core::Diagnostics;
use stencilpack_driver::Flavor;

use super::{Selection, warning_messages};
use crate::reports::{ConfigReport, FlavorConfig};

/// Load the configuration `unit` would be generated with.
///
/// Without an explicit `flavor`, every flavor the unit declares is shown.
pub fn config(stencil_toml: &StencilToml, unit: &str, flavor: Option<Flavor>) -> Result<ConfigReport> {
    let Some(build_unit) = stencil_toml.build_unit(unit) else {
        bail!("unknown unit '{}'", unit);
    };

    let flavors = match flavor {
        Some(flavor) => vec![flavor],
        None => build_unit.flavors(),
    };
    let selection = Selection {
        flavor,
        units: &[],
        templates_dir: None,
        generator: None,
    };

    let mut report = ConfigReport {
        unit: unit.to_string(),
        is_test: build_unit.is_test(),
        flavors: Vec::new(),
    };

    for flavor in flavors {
        let program = selection.generator(stencil_toml);
        let driver = selection.driver(stencil_toml, flavor, program.into())?;

        let mut diagnostics = Diagnostics::new();
        let config = driver.load_config(&build_unit, &mut diagnostics);
        let path = flavor.config_path(&build_unit);

        report.flavors.push(FlavorConfig {
            flavor,
            present: path.is_file(),
            path,
            values: config
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            warnings: warning_messages(&diagnostics),
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::ops::testing::*;

    fn value<'a>(config: &'a FlavorConfig, name: &str) -> Option<&'a str> {
        config
            .values
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_config_defaults() {
        let (_temp, stencil_toml) = project(MANIFEST);

        let report = config(&stencil_toml, "WidgetsTests", None).unwrap();

        assert!(report.is_test);
        let test = &report.flavors[0];
        assert!(!test.present);
        assert!(test.warnings.is_empty());
        assert_eq!(value(test, "debugOnly"), Some("false"));
        assert_eq!(value(test, "randomStdLibProtection"), Some("internal"));
        assert_eq!(value(test, "testableImports"), Some("[]"));
    }

    #[test]
    fn test_config_file_and_manifest_default() {
        let (temp, _) = project(MANIFEST);
        let manifest = format!("[project]\ndebug_only_default = true\n{}", MANIFEST);
        fs::write(temp.path().join("stencil.toml"), manifest).unwrap();
        fs::write(temp.path().join(".sourcepack.json"), r#"{"imports": ["Foundation"]}"#).unwrap();
        let stencil_toml = StencilToml::open(temp.path().join("stencil.toml")).unwrap();

        let report = config(&stencil_toml, "Widgets", None).unwrap();

        assert_eq!(report.flavors.len(), 1);
        let source = &report.flavors[0];
        assert_eq!(source.flavor, Flavor::Source);
        assert!(source.present);
        assert_eq!(value(source, "debugOnly"), Some("true"));
        assert_eq!(value(source, "imports"), Some(r#"["Foundation"]"#));

        let report = config(&stencil_toml, "Widgets", Some(Flavor::Test)).unwrap();
        assert_eq!(report.flavors[0].flavor, Flavor::Test);
        assert_eq!(value(&report.flavors[0], "debugOnly"), Some("true"));
    }

    #[test]
    fn test_config_broken_file_warns() {
        let (temp, stencil_toml) = project(MANIFEST);
        fs::write(temp.path().join(".testpack.json"), "[]").unwrap();

        let report = config(&stencil_toml, "Widgets", Some(Flavor::Test)).unwrap();

        assert_eq!(report.flavors[0].warnings.len(), 1);
        assert_eq!(value(&report.flavors[0], "randomStdLib"), Some("true"));
    }

    #[test]
    fn test_config_unknown_unit() {
        let (_temp, stencil_toml) = project(MANIFEST);
        assert!(config(&stencil_toml, "Gadgets", None).is_err());
    }
}
