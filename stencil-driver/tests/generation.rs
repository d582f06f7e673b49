//! End-to-end generation passes over small projects.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::{fs, path::Path};

use stencilpack_core::{BuildUnit, Diagnostics};
use stencilpack_driver::{Driver, DriverError, Flavor};
use tempfile::TempDir;

fn driver_at(flavor: Flavor, root: &Path) -> Driver {
    Driver::new(
        flavor,
        "/usr/bin/sourcery",
        root.join("Stencils"),
        root.join(".build/stencil"),
    )
}

fn widgets_tests(root: &Path) -> BuildUnit {
    BuildUnit::new("WidgetsTests", root, root.join("WidgetsTests"))
        .dependency("Widgets", root.join("Widgets"))
}

#[test]
fn test_production_unit_scans_own_sources_once() {
    let root = Path::new("/p");
    let unit = BuildUnit::new("Widgets", root, root.join("Widgets"));

    let plan = driver_at(Flavor::Source, root).prepare(&unit).plan;
    let args = plan.generate.args();

    let sources: Vec<_> = args
        .windows(2)
        .filter(|pair| pair[0] == "--sources")
        .map(|pair| pair[1].as_str())
        .collect();
    assert_eq!(sources, ["/p/Widgets"]);
    assert!(args.contains(&"testableImports=[]".to_string()));
}

#[test]
fn test_test_unit_imports_dependencies_before_extras() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".testpack.json"),
        r#"{"testable_imports": ["Extra"], "random_std_lib": false}"#,
    )
    .unwrap();

    let prepared = driver_at(Flavor::Test, temp.path()).prepare(&widgets_tests(temp.path()));

    assert!(prepared.diagnostics.is_empty());
    assert_eq!(prepared.plan.generate.sources, [temp.path().join("Widgets")]);
    assert_eq!(
        prepared.plan.generate.arguments,
        [
            "imports=[]",
            r#"testableImports=["Widgets", "Extra"]"#,
            "debugOnly=false",
            "randomStdLib=false",
            "randomStdLibProtection=internal",
        ]
    );
}

#[test]
fn test_flavors_use_separate_work_dirs() {
    let root = Path::new("/p");
    let unit = BuildUnit::new("Widgets", root, root.join("Widgets"));

    let source = driver_at(Flavor::Source, root).prepare(&unit).plan;
    let test = driver_at(Flavor::Test, root).prepare(&unit).plan;

    assert_ne!(source.output_dir(), test.output_dir());
    assert_ne!(source.generate.cache_dir, test.generate.cache_dir);
}

#[test]
fn test_flavor_command_line() {
    let root = Path::new("/p");
    let plan = driver_at(Flavor::Test, root).prepare(&widgets_tests(root)).plan;

    insta::assert_snapshot!("test_flavor_command_line", plan.command_line());
}

#[cfg(unix)]
mod process {
    use std::{os::unix::fs::PermissionsExt, path::PathBuf};

    use stencilpack_driver::locate_generator;

    use super::*;

    fn script(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("fake-sourcery");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn driver(temp: &TempDir, generator: &Path) -> Driver {
        Driver::new(
            Flavor::Source,
            generator,
            temp.path().join("Stencils"),
            temp.path().join(".build/stencil"),
        )
    }

    #[test]
    fn test_generator_receives_arguments() {
        let temp = TempDir::new().unwrap();
        let record = temp.path().join("args.txt");
        let generator = script(
            temp.path(),
            &format!("printf '%s\\n' \"$@\" > '{}'\necho done", record.display()),
        );
        let unit = BuildUnit::new("Widgets", temp.path(), temp.path().join("Widgets"));

        let execution = driver(&temp, &generator)
            .run(&unit, &mut Diagnostics::new())
            .unwrap();

        assert_eq!(execution.stdout, "done\n");
        let recorded = fs::read_to_string(&record).unwrap();
        let lines: Vec<_> = recorded.lines().collect();
        assert_eq!(lines.first(), Some(&"--sources"));
        assert_eq!(lines.last(), Some(&"--verbose"));
        assert!(lines.contains(&"imports=[]"));
    }

    #[test]
    fn test_generator_stderr_is_propagated() {
        let temp = TempDir::new().unwrap();
        let generator = script(temp.path(), "echo 'error: Widget.swift:3 parse failure' >&2\nexit 2");
        let unit = BuildUnit::new("Widgets", temp.path(), temp.path().join("Widgets"));

        let err = driver(&temp, &generator)
            .run(&unit, &mut Diagnostics::new())
            .unwrap_err();

        match err {
            DriverError::GeneratorFailed { unit, code, stderr } => {
                assert_eq!(unit, "Widgets");
                assert_eq!(code, Some(2));
                assert_eq!(stderr, "error: Widget.swift:3 parse failure\n");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_successful_generator_keeps_its_stderr() {
        let temp = TempDir::new().unwrap();
        let generator = script(
            temp.path(),
            "echo 'warning: Widget.swift:3 annotation ignored' >&2\necho done",
        );
        let unit = BuildUnit::new("Widgets", temp.path(), temp.path().join("Widgets"));

        let execution = driver(&temp, &generator)
            .run(&unit, &mut Diagnostics::new())
            .unwrap();

        assert_eq!(execution.code, Some(0));
        assert_eq!(execution.stdout, "done\n");
        assert_eq!(execution.stderr, "warning: Widget.swift:3 annotation ignored\n");
    }

    #[test]
    fn test_config_warning_outlives_failing_generator() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".sourcepack.json"), r#"{"debug_only": tr"#).unwrap();
        let generator = script(temp.path(), "exit 1");
        let unit = BuildUnit::new("Widgets", temp.path(), temp.path().join("Widgets"));

        let mut diagnostics = Diagnostics::new();
        let err = driver(&temp, &generator)
            .run(&unit, &mut diagnostics)
            .unwrap_err();

        assert!(matches!(err, DriverError::GeneratorFailed { code: Some(1), .. }));
        let warnings: Vec<_> = diagnostics.warnings().collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].phase, "config");
    }

    #[test]
    fn test_missing_generator_is_not_a_generation_failure() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("bin/sourcery");

        let err = locate_generator(missing.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, DriverError::GeneratorNotFound { .. }));

        let unit = BuildUnit::new("Widgets", temp.path(), temp.path().join("Widgets"));
        let err = driver(&temp, &missing)
            .run(&unit, &mut Diagnostics::new())
            .unwrap_err();
        assert!(matches!(err, DriverError::GeneratorNotFound { .. }));
    }
}
