//! Check operation - manifest validation.

use stencilpack_config::StencilToml;
use stencilpack_driver::{Flavor, locate_generator};

use crate::reports::{CheckReport, UnitSummary};

/// Summarize a parsed manifest and look for problems that would only show
/// up once the generator runs.
///
/// Structural errors are caught when the manifest is opened; everything
/// found here is a warning.
pub fn check(stencil_toml: &StencilToml) -> CheckReport {
    let mut warnings = Vec::new();

    let program = stencil_toml.generator();
    if let Err(err) = locate_generator(&program) {
        warnings.push(err.to_string());
    }

    let units = stencil_toml.build_units();

    // Only templates of flavors some unit runs are required.
    let templates_dir = stencil_toml.templates_dir();
    let flavors = Flavor::ALL
        .into_iter()
        .filter(|flavor| units.iter().any(|unit| unit.flavors().contains(flavor)));
    for flavor in flavors {
        for template in flavor.templates(&templates_dir) {
            if !template.is_file() {
                warnings.push(format!(
                    "{} template '{}' not found",
                    flavor.display_name(),
                    template.display()
                ));
            }
        }
    }

    let units = units
        .into_iter()
        .map(|unit| {
            if !unit.source_dir().is_dir() {
                warnings.push(format!(
                    "source directory of unit '{}' does not exist: {}",
                    unit.name(),
                    unit.source_dir().display()
                ));
            }
            UnitSummary {
                name: unit.name().to_string(),
                path: unit.source_dir().to_path_buf(),
                is_test: unit.is_test(),
                dependencies: unit
                    .dependency_names()
                    .into_iter()
                    .map(String::from)
                    .collect(),
                flavors: unit.flavors(),
            }
        })
        .collect();

    CheckReport {
        manifest_path: stencil_toml.path().to_path_buf(),
        generator: program,
        templates_dir,
        work_dir: stencil_toml.work_dir(),
        units,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::ops::testing::*;

    #[test]
    fn test_check_summarizes_units() {
        let (_temp, stencil_toml) = project(MANIFEST);

        let report = check(&stencil_toml);

        let names: Vec<_> = report.units.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["Widgets", "WidgetsTests"]);
        assert!(!report.units[0].is_test);
        assert!(report.units[1].is_test);
        assert_eq!(report.units[1].dependencies, ["Widgets"]);
        assert_eq!(report.units[0].flavors, [Flavor::Source]);
        assert_eq!(report.units[1].flavors, [Flavor::Test]);
    }

    #[test]
    fn test_check_requires_templates_of_used_flavors_only() {
        let (temp, stencil_toml) = project(MANIFEST);
        let templates = temp.path().join("Stencils");
        fs::create_dir_all(&templates).unwrap();
        for name in Flavor::Test.template_names() {
            fs::write(templates.join(name), "").unwrap();
        }

        let report = check(&stencil_toml);
        let missing: Vec<_> = report.warnings.iter().filter(|w| w.contains("template")).collect();
        assert!(!missing.is_empty());
        assert!(missing.iter().all(|w| w.starts_with("SourcePack")));

        let manifest = "[units.WidgetsTests]\npath = \"Tests/WidgetsTests\"\n";
        fs::write(temp.path().join("stencil.toml"), manifest).unwrap();
        let stencil_toml = StencilToml::open(temp.path().join("stencil.toml")).unwrap();

        let report = check(&stencil_toml);
        assert!(!report.warnings.iter().any(|w| w.contains("template")));
    }

    #[test]
    fn test_check_warns_about_missing_files() {
        let (temp, stencil_toml) = project(MANIFEST);
        fs::create_dir_all(temp.path().join("Sources/Widgets")).unwrap();
        let templates = temp.path().join("Stencils");
        fs::create_dir_all(&templates).unwrap();
        for flavor in Flavor::ALL {
            for name in flavor.template_names() {
                fs::write(templates.join(name), "").unwrap();
            }
        }

        let report = check(&stencil_toml);

        let missing_sources: Vec<_> = report
            .warnings
            .iter()
            .filter(|w| w.starts_with("source directory"))
            .collect();
        assert_eq!(missing_sources.len(), 1);
        assert!(missing_sources[0].contains("WidgetsTests"));
        assert!(!report.warnings.iter().any(|w| w.contains("template")));
    }
}
