//! Core operations.
//!
//! This module contains the business logic for stencil commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod clean;
pub mod config;
pub mod generate;
pub mod plan;

use std::path::{Path, PathBuf};

pub use check::check;
pub use clean::clean;
pub use config::config;
use eyre::{Context, Result, bail};
pub use generate::generate;
pub use plan::plan;
use stencilpack_config::StencilToml;
use stencilpack_core::{BuildUnit, Diagnostics};
use stencilpack_driver::{Driver, Flavor};

/// Warning messages with their location, the way reports print them.
pub fn warning_messages(diagnostics: &Diagnostics) -> Vec<String> {
    diagnostics
        .warnings()
        .map(|d| match &d.location {
            Some(loc) => format!("{}\n  --> {}", d.message, loc),
            None => d.message.clone(),
        })
        .collect()
}

/// Which units and flavors an operation covers, plus command-line overrides
/// of the `[project]` table.
pub struct Selection<'a> {
    /// Restrict passes to this flavor; `None` keeps each unit's own flavors.
    pub flavor: Option<Flavor>,
    /// Unit names; empty selects every unit.
    pub units: &'a [String],
    pub templates_dir: Option<&'a Path>,
    pub generator: Option<&'a str>,
}

impl Selection<'_> {
    /// Selected units in the order given, or manifest order when none are named.
    pub fn units(&self, stencil_toml: &StencilToml) -> Result<Vec<BuildUnit>> {
        if self.units.is_empty() {
            return Ok(stencil_toml.build_units());
        }

        self.units
            .iter()
            .map(|name| match stencil_toml.build_unit(name) {
                Some(unit) => Ok(unit),
                None => bail!(
                    "unknown unit '{}' (declared units: {})",
                    name,
                    stencil_toml.unit_names().collect::<Vec<_>>().join(", ")
                ),
            })
            .collect()
    }

    /// Unit and flavor pairs in run order: selected units in order, each
    /// with the flavors it declares, narrowed to the requested flavor.
    pub fn passes(&self, stencil_toml: &StencilToml) -> Result<Vec<(BuildUnit, Flavor)>> {
        let only = self.flavor;
        let passes = self
            .units(stencil_toml)?
            .into_iter()
            .flat_map(|unit| {
                unit.flavors()
                    .into_iter()
                    .filter(move |&flavor| only.is_none_or(|only| only == flavor))
                    .map(move |flavor| (unit.clone(), flavor))
            })
            .collect();
        Ok(passes)
    }

    /// Generator program after applying the override.
    pub fn generator(&self, stencil_toml: &StencilToml) -> String {
        match self.generator {
            Some(generator) => generator.to_string(),
            None => stencil_toml.generator(),
        }
    }

    pub fn templates_dir(&self, stencil_toml: &StencilToml) -> PathBuf {
        match self.templates_dir {
            Some(dir) => dir.to_path_buf(),
            None => stencil_toml.templates_dir(),
        }
    }

    /// Build the driver for `flavor` running `executable`.
    pub fn driver(
        &self,
        stencil_toml: &StencilToml,
        flavor: Flavor,
        executable: PathBuf,
    ) -> Result<Driver> {
        let driver = Driver::new(
            flavor,
            executable,
            self.templates_dir(stencil_toml),
            stencil_toml.work_dir(),
        );

        match stencil_toml.debug_only_default() {
            Some(debug_only) => driver
                .with_debug_only_default(debug_only)
                .wrap_err("Invalid debug_only_default in stencil.toml"),
            None => Ok(driver),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{fs, path::Path};

    use stencilpack_config::StencilToml;
    use tempfile::TempDir;

    pub const MANIFEST: &str = r#"
[units.Widgets]
path = "Sources/Widgets"

[units.WidgetsTests]
path = "Tests/WidgetsTests"
dependencies = ["Widgets"]
"#;

    /// Like [`MANIFEST`], with Widgets also generating the test pack.
    pub const BOTH_FLAVORS_MANIFEST: &str = r#"
[units.Widgets]
path = "Sources/Widgets"
flavors = ["source", "test"]

[units.WidgetsTests]
path = "Tests/WidgetsTests"
dependencies = ["Widgets"]
"#;

    pub fn everything<'a>() -> super::Selection<'a> {
        super::Selection {
            flavor: None,
            units: &[],
            templates_dir: None,
            generator: None,
        }
    }

    /// A project directory with a stencil.toml.
    pub fn project(manifest: &str) -> (TempDir, StencilToml) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stencil.toml");
        fs::write(&path, manifest).unwrap();
        let stencil_toml = StencilToml::open(&path).unwrap();
        (temp, stencil_toml)
    }

    #[cfg(unix)]
    pub fn script(dir: &Path, body: &str) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("fake-sourcery");
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }
}
