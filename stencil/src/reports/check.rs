//! Check command report data structures.

use std::path::PathBuf;

use stencilpack_driver::Flavor;

use super::output::{Output, Report};

/// A declared build unit.
#[derive(Debug)]
pub struct UnitSummary {
    pub name: String,
    pub path: PathBuf,
    pub is_test: bool,
    pub dependencies: Vec<String>,
    /// Flavors `generate` runs on this unit by default.
    pub flavors: Vec<Flavor>,
}

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the manifest.
    pub manifest_path: PathBuf,
    pub generator: String,
    pub templates_dir: PathBuf,
    pub work_dir: PathBuf,
    pub units: Vec<UnitSummary>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.manifest_path.display()));
        out.newline();
        out.key_value("generator", &self.generator);
        out.key_value("templates", &self.templates_dir.display().to_string());
        out.key_value("work dir", &self.work_dir.display().to_string());
        out.newline();

        let count = self.units.len();
        out.section(&format!("{} unit{}", count, if count == 1 { "" } else { "s" }));
        for unit in &self.units {
            let mut line = format!("{} ({})", unit.name, unit.path.display());
            if unit.is_test {
                line.push_str(" [test]");
            }
            if !unit.dependencies.is_empty() {
                line.push_str(&format!(" -> {}", unit.dependencies.join(", ")));
            }
            let flavors: Vec<_> = unit.flavors.iter().map(|f| f.display_name()).collect();
            line.push_str(&format!(" using {}", flavors.join(", ")));
            out.list_item(&line);
        }
    }
}
